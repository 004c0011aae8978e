use std::marker::PhantomData;

use crate::error::Result;
use crate::individual::Mutatable;
use crate::operators::Operator;
use crate::rng::{validate_probability, Probability, RandomNumberGenerator};

/// Mutates each individual independently with probability `p`.
///
/// Order and length are preserved; there is no shuffle.
#[derive(Debug, Clone)]
pub struct Mutation<I> {
    probability: Probability,
    _marker: PhantomData<fn() -> I>,
}

impl<I> Mutation<I>
where
    I: Mutatable,
{
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if `probability` is outside `[0, 1]`.
    pub fn new(probability: Probability) -> Result<Self> {
        validate_probability(probability, "Mutation")?;
        Ok(Self {
            probability,
            _marker: PhantomData,
        })
    }
}

impl<I> Mutation<I> {
    pub fn probability(&self) -> Probability {
        self.probability
    }
}

impl<I> Operator<I> for Mutation<I>
where
    I: Mutatable,
{
    fn apply(&self, population: Vec<I>, rng: &mut RandomNumberGenerator) -> Result<Vec<I>> {
        Ok(population
            .into_iter()
            .map(|individual| {
                if rng.roll(self.probability) {
                    individual.mutate(rng)
                } else {
                    individual
                }
            })
            .collect())
    }
}
