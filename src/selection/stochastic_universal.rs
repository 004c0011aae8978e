use crate::error::Result;
use crate::fitness::{FitnessKind, Score};
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::{
    adjusted_weights, ensure_not_empty, rescale_overflowing, SelectionStrategy,
};

/// Stochastic universal sampling.
///
/// A proportional strategy that places `count` evenly spaced pointers on the
/// wheel behind a single random offset, so the whole selection costs one draw.
/// Every individual is picked either `floor(e)` or `ceil(e)` times, where `e`
/// is its expected number of selections. The result always holds exactly
/// `count` individuals.
///
/// Weight handling matches [`RouletteWheelSelection`]: infinite adjusted
/// fitness takes all the pointers (shared between the infinite entries), all
/// zero weights degrade to uniform sampling, negative weights are rejected.
///
/// [`RouletteWheelSelection`]: crate::selection::RouletteWheelSelection
///
/// # Examples
///
/// ```
/// use genvolve::fitness::{FitnessKind, Score};
/// use genvolve::rng::RandomNumberGenerator;
/// use genvolve::selection::{SelectionStrategy, StochasticUniversalSampling};
///
/// let population = vec![Score::new('a', 3.0), Score::new('b', 1.0)];
/// let mut rng = RandomNumberGenerator::from_seed(4);
///
/// let selected = StochasticUniversalSampling::new()
///     .select(&population, FitnessKind::Natural, 4, &mut rng)
///     .unwrap();
///
/// assert_eq!(selected.iter().filter(|c| **c == 'a').count(), 3);
/// assert_eq!(selected.iter().filter(|c| **c == 'b').count(), 1);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct StochasticUniversalSampling;

impl StochasticUniversalSampling {
    pub fn new() -> Self {
        Self
    }
}

impl<I> SelectionStrategy<I> for StochasticUniversalSampling
where
    I: Individual,
{
    fn select(
        &self,
        population: &[Score<I>],
        kind: FitnessKind,
        count: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<I>> {
        ensure_not_empty(population)?;

        let weights = adjusted_weights(population, kind)?;
        Ok(sample_by_weights(population, &weights, count, rng))
    }
}

/// Runs stochastic universal sampling over precomputed non-negative weights.
///
/// `weights` must be as long as `population`, and `population` non-empty.
pub(crate) fn sample_by_weights<I>(
    population: &[Score<I>],
    weights: &[f64],
    count: usize,
    rng: &mut RandomNumberGenerator,
) -> Vec<I>
where
    I: Clone,
{
    if count == 0 || population.is_empty() {
        return Vec::new();
    }

    let mut weights: Vec<f64> = if weights.iter().any(|w| w.is_infinite()) {
        weights
            .iter()
            .map(|w| if w.is_infinite() { 1.0 } else { 0.0 })
            .collect()
    } else {
        let mut finite = weights.to_vec();
        rescale_overflowing(&mut finite);
        finite
    };

    let mut total: f64 = weights.iter().sum();
    if total <= 0.0 {
        weights = vec![1.0; population.len()];
        total = population.len() as f64;
    }

    let offset = rng.random_probability();
    let mut selected = Vec::with_capacity(count);
    let mut cumulative_expectation = 0.0;

    for (score, weight) in population.iter().zip(&weights) {
        cumulative_expectation += weight / total * count as f64;
        while selected.len() < count && cumulative_expectation > offset + selected.len() as f64 {
            selected.push(score.individual.clone());
        }
    }

    // Rounding can leave the last pointer just past the final cumulative sum.
    if selected.len() < count {
        let last = weights
            .iter()
            .rposition(|w| *w > 0.0)
            .unwrap_or(population.len() - 1);
        selected.resize(count, population[last].individual.clone());
    }

    selected
}
