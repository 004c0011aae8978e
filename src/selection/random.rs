use crate::error::Result;
use crate::fitness::{FitnessKind, Score};
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::{ensure_not_empty, SelectionStrategy};

/// Uniform selection with replacement; fitness is ignored.
///
/// The engine also uses this strategy to top up a selection that came back
/// short.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSelection;

impl RandomSelection {
    pub fn new() -> Self {
        Self
    }
}

impl<I> SelectionStrategy<I> for RandomSelection
where
    I: Individual,
{
    fn select(
        &self,
        population: &[Score<I>],
        _kind: FitnessKind,
        count: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<I>> {
        ensure_not_empty(population)?;

        (0..count)
            .map(|_| rng.pick_random(population).map(|score| score.individual.clone()))
            .collect()
    }
}
