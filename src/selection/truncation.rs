use crate::error::{GeneticError, Result};
use crate::fitness::{FitnessKind, Score};
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::{ensure_not_empty, SelectionStrategy};

/// A selection strategy that keeps the best individuals.
///
/// The population handed to a strategy is already sorted best-first, so
/// truncation takes the first `count` entries. When `count` exceeds the
/// population size the whole population is returned and the engine tops up
/// the shortfall.
///
/// The truncation point is only recorded. It is validated on construction and
/// readable through [`TruncationSelection::truncation_point`], but it has no
/// effect on [`select`](SelectionStrategy::select): `new(0.1)` and `new(1.0)`
/// pick the same individuals.
///
/// # Examples
///
/// ```
/// use genvolve::fitness::{FitnessKind, Score};
/// use genvolve::rng::RandomNumberGenerator;
/// use genvolve::selection::{SelectionStrategy, TruncationSelection};
///
/// let population = vec![Score::new('a', 3.0), Score::new('b', 2.0), Score::new('c', 1.0)];
/// let mut rng = RandomNumberGenerator::new();
///
/// let selection = TruncationSelection::new(0.5).unwrap();
/// let selected = selection.select(&population, FitnessKind::Natural, 2, &mut rng).unwrap();
///
/// assert_eq!(selected, vec!['a', 'b']);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct TruncationSelection {
    truncation_point: f64,
}

impl TruncationSelection {
    /// Creates a new TruncationSelection strategy.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if `truncation_point` is not in `(0, 1]`.
    pub fn new(truncation_point: f64) -> Result<Self> {
        if !(truncation_point > 0.0 && truncation_point <= 1.0) {
            return Err(GeneticError::Configuration(format!(
                "Truncation point must be in the range (0, 1], got {}",
                truncation_point
            )));
        }
        Ok(Self { truncation_point })
    }

    pub fn truncation_point(&self) -> f64 {
        self.truncation_point
    }
}

impl<I> SelectionStrategy<I> for TruncationSelection
where
    I: Individual,
{
    fn select(
        &self,
        population: &[Score<I>],
        _kind: FitnessKind,
        count: usize,
        _rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<I>> {
        ensure_not_empty(population)?;

        let take = count.min(population.len());
        Ok(population[..take]
            .iter()
            .map(|score| score.individual.clone())
            .collect())
    }
}
