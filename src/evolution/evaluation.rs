//! # Concurrent Evaluation
//!
//! Scores every individual of a population against the whole population,
//! spreading the work over fixed-size batches on the rayon pool.

use tracing::trace;

use crate::{
    error::{GeneticError, Result},
    fitness::{Fitness, Score},
    individual::Individual,
    scatter::scatter_gather,
};

/// Computes the fitness of an individual in the context of its population.
///
/// Blanket-implemented for `Fn(&I, &[I]) -> Fitness` closures.
pub trait Evaluation<I>: Send + Sync {
    fn evaluate(&self, individual: &I, population: &[I]) -> Fitness;
}

impl<I, F> Evaluation<I> for F
where
    F: Fn(&I, &[I]) -> Fitness + Send + Sync,
{
    fn evaluate(&self, individual: &I, population: &[I]) -> Fitness {
        self(individual, population)
    }
}

/// Produces a `Score` for every individual in `population`.
///
/// Each individual is evaluated exactly once, with the full population as
/// read-only context. The order of the returned scores is unspecified; callers
/// sort them before use.
///
/// # Errors
///
/// Returns `GeneticError::Configuration` if `batch_size` is zero and
/// `GeneticError::FitnessCalculation` if any evaluation yields NaN.
pub fn evaluate_population<I, E>(
    population: Vec<I>,
    batch_size: usize,
    evaluation: &E,
) -> Result<Vec<Score<I>>>
where
    I: Individual,
    E: Evaluation<I> + ?Sized,
{
    let context = population.as_slice();

    let scores = scatter_gather(context, batch_size, |batch_idx, batch| {
        trace!(batch_idx, len = batch.len(), "evaluating batch");
        batch
            .iter()
            .map(|individual| {
                let fitness = evaluation.evaluate(individual, context);
                if fitness.is_nan() {
                    return Err(GeneticError::FitnessCalculation(format!(
                        "Evaluation of {:?} returned NaN",
                        individual
                    )));
                }
                Ok(Score::new(individual.clone(), fitness))
            })
            .collect::<Result<Vec<_>>>()
    })?;

    Ok(scores)
}
