use crate::error::Result;
use crate::fitness::{FitnessKind, Score};
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::{ensure_not_empty, SelectionStrategy};
use crate::selection::stochastic_universal::sample_by_weights;

/// A selection strategy that selects individuals based on their rank in the population.
///
/// Rank-based selection replaces each fitness with `population_size - rank`,
/// where the best individual has rank 1, and then runs stochastic universal
/// sampling over these values. Only the ordering of the population matters, so
/// a few individuals with much higher fitness than the rest cannot take over
/// the next generation, and negative fitness values are fine.
///
/// The worst individual receives a value of 0 and is never selected, unless the
/// population holds a single individual.
///
/// # Examples
///
/// ```
/// use genvolve::fitness::{FitnessKind, Score};
/// use genvolve::rng::RandomNumberGenerator;
/// use genvolve::selection::{RankSelection, SelectionStrategy};
///
/// // Sorted best-first, as the engine hands it over.
/// let population = vec![Score::new(1, -0.5), Score::new(2, -3.0), Score::new(3, -40.0)];
/// let mut rng = RandomNumberGenerator::from_seed(11);
///
/// let selected = RankSelection::new()
///     .select(&population, FitnessKind::Natural, 6, &mut rng)
///     .unwrap();
///
/// assert_eq!(selected.len(), 6);
/// assert!(!selected.contains(&3));
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct RankSelection;

impl RankSelection {
    pub fn new() -> Self {
        Self
    }
}

impl<I> SelectionStrategy<I> for RankSelection
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

        let size = population.len();
        let ranks: Vec<f64> = (0..size).map(|idx| (size - (idx + 1)) as f64).collect();

        Ok(sample_by_weights(population, &ranks, count, rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_ignores_magnitude() {
        let population = vec![
            Score::new("first", 1e12),
            Score::new("second", 2.0),
            Score::new("third", 1.0),
            Score::new("last", 0.5),
        ];
        let mut rng = RandomNumberGenerator::from_seed(42);

        // Ranks 3, 2, 1, 0 over a total of 6.
        let selected = RankSelection::new()
            .select(&population, FitnessKind::Natural, 12, &mut rng)
            .unwrap();

        assert_eq!(selected.iter().filter(|x| **x == "first").count(), 6);
        assert_eq!(selected.iter().filter(|x| **x == "second").count(), 4);
        assert_eq!(selected.iter().filter(|x| **x == "third").count(), 2);
        assert!(!selected.contains(&"last"));
    }

    #[test]
    fn test_rank_uses_order_not_kind() {
        // Inverted population sorted best-first: smallest raw value at the front.
        let population = vec![Score::new("best", 0.1), Score::new("worst", 5.0)];
        let mut rng = RandomNumberGenerator::from_seed(3);

        let selected = RankSelection::new()
            .select(&population, FitnessKind::Inverted, 10, &mut rng)
            .unwrap();

        assert!(selected.iter().all(|x| *x == "best"));
    }

    #[test]
    fn test_single_individual() {
        let population = vec![Score::new(9, 1.0)];
        let mut rng = RandomNumberGenerator::from_seed(5);

        let selected = RankSelection::new()
            .select(&population, FitnessKind::Natural, 3, &mut rng)
            .unwrap();

        assert_eq!(selected, vec![9, 9, 9]);
    }

    #[test]
    fn test_empty_population() {
        let population: Vec<Score<i32>> = Vec::new();
        let mut rng = RandomNumberGenerator::new();

        assert!(RankSelection::new()
            .select(&population, FitnessKind::Natural, 2, &mut rng)
            .is_err());
    }
}
