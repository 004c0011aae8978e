use std::fmt::Debug;

use crate::error::{GeneticError, Result};
use crate::fitness::{FitnessKind, Score};
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;

/// Trait for selection strategies in genetic algorithms.
///
/// Selection strategies are responsible for choosing individuals from a scored
/// population. The engine always passes the population sorted best-first
/// under the given [`FitnessKind`], and asks for exactly `count` individuals.
/// Sampling is with replacement unless a strategy states otherwise.
///
/// # Examples
///
/// ```
/// use genvolve::fitness::{FitnessKind, Score};
/// use genvolve::rng::RandomNumberGenerator;
/// use genvolve::selection::{SelectionStrategy, TournamentSelection};
/// use genvolve::error::Result;
///
/// fn main() -> Result<()> {
///     let population = vec![
///         Score::new(1.0, 0.9),
///         Score::new(2.0, 0.8),
///         Score::new(3.0, 0.5),
///     ];
///     let mut rng = RandomNumberGenerator::from_seed(42);
///
///     let selection = TournamentSelection::new(2)?;
///     let selected = selection.select(&population, FitnessKind::Natural, 5, &mut rng)?;
///
///     assert_eq!(selected.len(), 5);
///
///     Ok(())
/// }
/// ```
pub trait SelectionStrategy<I>: Debug + Send + Sync
where
    I: Individual,
{
    /// Selects `count` individuals from the population.
    ///
    /// # Arguments
    ///
    /// * `population` - The scored population, sorted best-first.
    /// * `kind` - Whether higher or lower fitness is better.
    /// * `count` - The number of individuals to select.
    /// * `rng` - The random number generator used for draws.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The population is empty
    /// - A proportional strategy encounters a negative weight
    fn select(
        &self,
        population: &[Score<I>],
        kind: FitnessKind,
        count: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<I>>;
}

pub(crate) fn ensure_not_empty<I>(population: &[Score<I>]) -> Result<()> {
    if population.is_empty() {
        return Err(GeneticError::EmptyPopulation);
    }
    Ok(())
}

/// Maps raw fitness onto non-negative proportional weights.
pub(crate) fn adjusted_weights<I>(population: &[Score<I>], kind: FitnessKind) -> Result<Vec<f64>> {
    let weights: Vec<f64> = population
        .iter()
        .map(|score| kind.adjusted(score.fitness))
        .collect();

    if let Some(negative) = weights.iter().find(|w| **w < 0.0) {
        return Err(GeneticError::InvalidInput(format!(
            "Proportional selection requires non-negative adjusted fitness, found {}",
            negative
        )));
    }

    Ok(weights)
}

/// Divides finite weights by their maximum when their sum overflows to infinity.
///
/// Proportions are unchanged; only the scale moves back into range.
pub(crate) fn rescale_overflowing(weights: &mut [f64]) {
    let total: f64 = weights.iter().sum();
    if total.is_finite() {
        return;
    }

    let max = weights.iter().copied().fold(0.0, f64::max);
    if max > 0.0 && max.is_finite() {
        for weight in weights.iter_mut() {
            *weight /= max;
        }
    }
}
