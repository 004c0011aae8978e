use tracing::trace;

use crate::error::{GeneticError, Result};
use crate::operators::Operator;
use crate::rng::RandomNumberGenerator;
use crate::scatter::{batch_ranges, scatter_gather};

/// Runs an inner operator on concurrent batches of the population.
///
/// The population is shuffled, cut into batches of `batch_size` (plus a
/// shorter remainder batch) and each batch is handed to the inner operator on
/// the rayon pool. Outputs are concatenated in batch order.
///
/// Every batch gets its own generator, seeded from the caller's generator
/// before the batches are dispatched, so a seeded run stays reproducible no
/// matter how the pool schedules the work.
///
/// The output may be shorter or longer than the input if the inner operator
/// changes the size of its batches.
#[derive(Debug, Clone)]
pub struct Parallel<O> {
    batch_size: usize,
    inner: O,
}

impl<O> Parallel<O> {
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if `batch_size` is zero.
    pub fn new(batch_size: usize, inner: O) -> Result<Self> {
        if batch_size == 0 {
            return Err(GeneticError::Configuration(
                "Parallel batch size must be at least 1".to_string(),
            ));
        }
        Ok(Self { batch_size, inner })
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn inner(&self) -> &O {
        &self.inner
    }
}

impl<I, O> Operator<I> for Parallel<O>
where
    I: Clone + Send + Sync,
    O: Operator<I>,
{
    fn apply(&self, mut population: Vec<I>, rng: &mut RandomNumberGenerator) -> Result<Vec<I>> {
        rng.shuffle(&mut population);

        let batch_count = batch_ranges(population.len(), self.batch_size)?.len();
        let seeds: Vec<u64> = (0..batch_count).map(|_| rng.next_seed()).collect();

        scatter_gather(&population, self.batch_size, |batch_idx, batch| {
            trace!(batch_idx, len = batch.len(), "applying operator to batch");
            let mut batch_rng = RandomNumberGenerator::from_seed(seeds[batch_idx]);
            self.inner.apply(batch.to_vec(), &mut batch_rng)
        })
    }
}
