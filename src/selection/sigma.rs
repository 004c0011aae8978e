use crate::error::Result;
use crate::fitness::{FitnessKind, Score};
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::{ensure_not_empty, SelectionStrategy};
use crate::selection::stochastic_universal::sample_by_weights;
use crate::stats::Stats;

/// Lower bound for a scaled fitness, so every individual keeps a chance.
const MIN_SCALED_FITNESS: f64 = 0.1;

/// Sigma scaling selection.
///
/// Raw fitness is rescaled relative to the population mean and standard
/// deviation before stochastic universal sampling:
///
/// ```text
/// scaled = 1                                      if stdev == 0
/// scaled = max(0.1, 1 + (fitness - mean) / (2 * stdev))   otherwise
/// ```
///
/// This keeps selection pressure roughly constant over the run: early on a few
/// outliers cannot take over the wheel, and late in the run small differences
/// still matter. The scaled values are interpreted with the configured
/// [`FitnessKind`], so for inverted problems the smaller scaled value wins.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct SigmaScalingSelection;

impl SigmaScalingSelection {
    pub fn new() -> Self {
        Self
    }

    fn scale(fitness: f64, mean: f64, stdev: f64) -> f64 {
        if stdev == 0.0 {
            1.0
        } else {
            MIN_SCALED_FITNESS.max(1.0 + (fitness - mean) / (2.0 * stdev))
        }
    }
}

impl<I> SelectionStrategy<I> for SigmaScalingSelection
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

        let stats = Stats::from_values(population.iter().map(|score| score.fitness))?;
        let mean = stats.arithmetic_mean();
        let stdev = stats.stdev();

        let weights: Vec<f64> = population
            .iter()
            .map(|score| kind.adjusted(Self::scale(score.fitness, mean, stdev)))
            .collect();

        Ok(sample_by_weights(population, &weights, count, rng))
    }
}
