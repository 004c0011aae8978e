use std::marker::PhantomData;

use tracing::warn;

use crate::error::Result;
use crate::individual::Crossoverable;
use crate::operators::Operator;
use crate::rng::{validate_probability, Probability, RandomNumberGenerator};

/// Recombines random pairs of individuals.
///
/// The population is shuffled and then consumed two at a time. Each pair is
/// replaced by the two offspring of [`Crossoverable::cross`] with probability
/// `p`, or passed through unchanged. With an odd population the last individual
/// has no partner and is passed through. The output is always exactly as long
/// as the input.
///
/// When both parents of a pair report a [`Crossoverable::genome_len`] and the
/// lengths differ, a warning is logged and the pair is still recombined; the
/// representation's `cross` decides the offspring lengths.
#[derive(Debug, Clone)]
pub struct Crossover<I> {
    probability: Probability,
    _marker: PhantomData<fn() -> I>,
}

impl<I> Crossover<I>
where
    I: Crossoverable,
{
    /// Creates a crossover operator applied to each pair with probability `probability`.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if `probability` is outside `[0, 1]`.
    pub fn new(probability: Probability) -> Result<Self> {
        validate_probability(probability, "Crossover")?;
        Ok(Self {
            probability,
            _marker: PhantomData,
        })
    }
}

impl<I> Crossover<I> {
    pub fn probability(&self) -> Probability {
        self.probability
    }
}

impl<I> Operator<I> for Crossover<I>
where
    I: Crossoverable,
{
    fn apply(&self, mut population: Vec<I>, rng: &mut RandomNumberGenerator) -> Result<Vec<I>> {
        rng.shuffle(&mut population);

        let mut offspring = Vec::with_capacity(population.len());
        let mut parents = population.into_iter();

        while let Some(first) = parents.next() {
            let Some(second) = parents.next() else {
                offspring.push(first);
                break;
            };

            if !rng.roll(self.probability) {
                offspring.push(first);
                offspring.push(second);
                continue;
            }

            if let (Some(lhs), Some(rhs)) = (first.genome_len(), second.genome_len()) {
                if lhs != rhs {
                    warn!(lhs, rhs, "crossing individuals with mismatched genome lengths");
                }
            }

            let (child1, child2) = I::cross(&first, &second, rng);
            offspring.push(child1);
            offspring.push(child2);
        }

        Ok(offspring)
    }
}
