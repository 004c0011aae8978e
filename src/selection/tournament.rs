use crate::error::{GeneticError, Result};
use crate::fitness::{FitnessKind, Score};
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::{ensure_not_empty, SelectionStrategy};

/// A selection strategy that selects individuals through tournament selection.
///
/// Each tournament samples `tournament_size` individuals uniformly at random
/// (with replacement) from the whole population and keeps the best of them.
/// This is repeated once per requested individual.
///
/// - Smaller tournament sizes lead to more exploration (a size of 1 is random selection)
/// - Larger tournament sizes lead to more exploitation
///
/// # Examples
///
/// ```
/// use genvolve::fitness::{FitnessKind, Score};
/// use genvolve::rng::RandomNumberGenerator;
/// use genvolve::selection::{SelectionStrategy, TournamentSelection};
///
/// let population = vec![
///     Score::new(1, 0.5),
///     Score::new(2, 0.8),
///     Score::new(3, 0.3),
/// ];
/// let mut rng = RandomNumberGenerator::from_seed(1);
///
/// let selection = TournamentSelection::default();
/// let selected = selection.select(&population, FitnessKind::Inverted, 4, &mut rng).unwrap();
///
/// assert_eq!(selected.len(), 4);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct TournamentSelection {
    tournament_size: usize,
}

impl TournamentSelection {
    /// Creates a new TournamentSelection strategy with the specified tournament size.
    ///
    /// # Errors
    ///
    /// Returns an error if `tournament_size` is 0.
    pub fn new(tournament_size: usize) -> Result<Self> {
        if tournament_size < 1 {
            return Err(GeneticError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }

        Ok(Self { tournament_size })
    }

    pub fn with_tournament_size(mut self, tournament_size: usize) -> Result<Self> {
        if tournament_size < 1 {
            return Err(GeneticError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }
        self.tournament_size = tournament_size;
        Ok(self)
    }

    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    /// Runs a single tournament and returns the index of the winner.
    ///
    /// The first sampled participant wins ties.
    fn run_tournament<I>(
        &self,
        population: &[Score<I>],
        kind: FitnessKind,
        rng: &mut RandomNumberGenerator,
    ) -> Result<usize> {
        let mut best_idx = rng.pick_index(population.len())?;

        for _ in 1..self.tournament_size {
            let idx = rng.pick_index(population.len())?;
            if kind.is_better(population[idx].fitness, population[best_idx].fitness) {
                best_idx = idx;
            }
        }

        Ok(best_idx)
    }
}

impl Default for TournamentSelection {
    fn default() -> Self {
        Self { tournament_size: 2 }
    }
}

impl<I> SelectionStrategy<I> for TournamentSelection
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

        let mut selected = Vec::with_capacity(count);
        for _ in 0..count {
            let winner_idx = self.run_tournament(population, kind, rng)?;
            selected.push(population[winner_idx].individual.clone());
        }

        Ok(selected)
    }
}
