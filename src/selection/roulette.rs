use crate::error::Result;
use crate::fitness::{FitnessKind, Score};
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::{
    adjusted_weights, ensure_not_empty, rescale_overflowing, SelectionStrategy,
};

/// A selection strategy that selects individuals through roulette wheel selection.
///
/// Roulette wheel selection (also known as fitness proportionate selection) selects
/// individuals with probability proportional to their adjusted fitness. For
/// [`FitnessKind::Inverted`] the adjusted fitness is the reciprocal of the raw value,
/// so smaller raw fitness still means a larger slice of the wheel.
///
/// Each draw is a uniform value in `[0, total)` that is located on the running
/// cumulative sum with a binary search. An individual with infinite adjusted
/// fitness (an inverted fitness of exactly zero) takes the whole wheel: the first
/// such individual is selected every time. A wheel whose weights are all zero
/// degrades to uniform selection.
///
/// Negative adjusted fitness is rejected; consider [`RankSelection`] for
/// populations with negative scores.
///
/// [`RankSelection`]: crate::selection::RankSelection
///
/// # Examples
///
/// ```
/// use genvolve::fitness::{FitnessKind, Score};
/// use genvolve::rng::RandomNumberGenerator;
/// use genvolve::selection::{RouletteWheelSelection, SelectionStrategy};
/// use genvolve::error::Result;
///
/// fn main() -> Result<()> {
///     let population = vec![
///         Score::new("a", 0.5),
///         Score::new("b", 0.8),
///         Score::new("c", 0.3),
///     ];
///     let mut rng = RandomNumberGenerator::new();
///
///     let selection = RouletteWheelSelection::new();
///     let selected = selection.select(&population, FitnessKind::Natural, 3, &mut rng)?;
///
///     assert_eq!(selected.len(), 3);
///
///     Ok(())
/// }
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct RouletteWheelSelection;

impl RouletteWheelSelection {
    pub fn new() -> Self {
        Self
    }
}

/// Running sum of the weights, in population order.
fn cumulative_weights(weights: &[f64]) -> Vec<f64> {
    weights
        .iter()
        .scan(0.0, |sum, weight| {
            *sum += weight;
            Some(*sum)
        })
        .collect()
}

/// Index of the first cumulative entry that reaches `draw`.
fn spin(cumulative: &[f64], draw: f64) -> usize {
    let idx = cumulative.partition_point(|&c| c < draw);
    idx.min(cumulative.len() - 1)
}

impl<I> SelectionStrategy<I> for RouletteWheelSelection
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

        let mut weights = adjusted_weights(population, kind)?;

        if let Some(dominant) = weights.iter().position(|w| w.is_infinite()) {
            return Ok(vec![population[dominant].individual.clone(); count]);
        }
        rescale_overflowing(&mut weights);

        let cumulative = cumulative_weights(&weights);
        let total = cumulative.last().copied().unwrap_or(0.0);

        let mut selected = Vec::with_capacity(count);
        for _ in 0..count {
            let idx = if total > 0.0 {
                let draw = rng.random_probability() * total;
                spin(&cumulative, draw)
            } else {
                rng.pick_index(population.len())?
            };
            selected.push(population[idx].individual.clone());
        }

        Ok(selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeneticError;

    #[test]
    fn test_roulette_selection() {
        let population = vec![
            Score::new(1, 0.5),
            Score::new(2, 0.8),
            Score::new(3, 0.3),
            Score::new(4, 0.9),
            Score::new(5, 0.1),
        ];
        let mut rng = RandomNumberGenerator::from_seed(42);

        let selected = RouletteWheelSelection::new()
            .select(&population, FitnessKind::Natural, 3, &mut rng)
            .unwrap();

        assert_eq!(selected.len(), 3);
    }

    #[test]
    fn test_spin_uses_cumulative_sums() {
        let cumulative = cumulative_weights(&[1.0, 2.0, 3.0]);
        assert_eq!(cumulative, vec![1.0, 3.0, 6.0]);

        assert_eq!(spin(&cumulative, 0.0), 0);
        assert_eq!(spin(&cumulative, 1.0), 0);
        assert_eq!(spin(&cumulative, 1.5), 1);
        assert_eq!(spin(&cumulative, 5.9), 2);
        assert_eq!(spin(&cumulative, 7.0), 2);
    }

    #[test]
    fn test_roulette_uniform_for_equal_fitness() {
        let population: Vec<Score<usize>> = (0..4).map(|i| Score::new(i, 2.0)).collect();
        let mut rng = RandomNumberGenerator::from_seed(42);

        let trials = 40_000;
        let selected = RouletteWheelSelection::new()
            .select(&population, FitnessKind::Natural, trials, &mut rng)
            .unwrap();

        let mut counts = [0usize; 4];
        for idx in selected {
            counts[idx] += 1;
        }

        let expected = trials / 4;
        for count in counts {
            let deviation = (count as f64 - expected as f64).abs() / expected as f64;
            assert!(deviation < 0.05, "counts = {:?}", counts);
        }
    }

    #[test]
    fn test_roulette_favours_heavy_slices() {
        let population = vec![Score::new("heavy", 9.0), Score::new("light", 1.0)];
        let mut rng = RandomNumberGenerator::from_seed(5);

        let selected = RouletteWheelSelection::new()
            .select(&population, FitnessKind::Natural, 10_000, &mut rng)
            .unwrap();

        let heavy = selected.iter().filter(|x| **x == "heavy").count();
        assert!((8_500..9_500).contains(&heavy), "heavy = {}", heavy);
    }

    #[test]
    fn test_inverted_zero_fitness_dominates() {
        let population = vec![
            Score::new("a", 2.0),
            Score::new("b", 0.0),
            Score::new("c", 0.0),
            Score::new("d", 1.0),
        ];
        let mut rng = RandomNumberGenerator::from_seed(1);

        let selected = RouletteWheelSelection::new()
            .select(&population, FitnessKind::Inverted, 50, &mut rng)
            .unwrap();

        assert!(selected.iter().all(|x| *x == "b"));
    }

    #[test]
    fn test_overflowing_total_keeps_proportions() {
        let population = vec![
            Score::new("best_a", f64::MAX),
            Score::new("best_b", f64::MAX),
            Score::new("worst", 1.0),
        ];
        let mut rng = RandomNumberGenerator::from_seed(42);

        let selected = RouletteWheelSelection::new()
            .select(&population, FitnessKind::Natural, 2_000, &mut rng)
            .unwrap();

        let best_a = selected.iter().filter(|x| **x == "best_a").count();
        let best_b = selected.iter().filter(|x| **x == "best_b").count();
        assert!((800..1_200).contains(&best_a), "best_a = {}", best_a);
        assert!((800..1_200).contains(&best_b), "best_b = {}", best_b);
        assert!(!selected.contains(&"worst"));
    }

    #[test]
    fn test_all_zero_weights_fall_back_to_uniform() {
        let population: Vec<Score<usize>> = (0..3).map(|i| Score::new(i, 0.0)).collect();
        let mut rng = RandomNumberGenerator::from_seed(8);

        let selected = RouletteWheelSelection::new()
            .select(&population, FitnessKind::Natural, 300, &mut rng)
            .unwrap();

        assert_eq!(selected.len(), 300);
        for i in 0..3 {
            assert!(selected.contains(&i));
        }
    }

    #[test]
    fn test_negative_fitness_rejected() {
        let population = vec![Score::new(1, -1.0), Score::new(2, 1.0)];
        let mut rng = RandomNumberGenerator::new();

        let result = RouletteWheelSelection::new().select(&population, FitnessKind::Natural, 1, &mut rng);

        match result {
            Err(GeneticError::InvalidInput(_)) => (),
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[test]
    fn test_roulette_empty_population() {
        let population: Vec<Score<i32>> = Vec::new();
        let mut rng = RandomNumberGenerator::new();

        let result = RouletteWheelSelection::new().select(&population, FitnessKind::Natural, 0, &mut rng);

        match result {
            Err(GeneticError::EmptyPopulation) => (),
            _ => panic!("Expected EmptyPopulation error"),
        }
    }
}
