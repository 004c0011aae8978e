use crate::{
    error::{GeneticError, OptionExt, Result},
    fitness::{Fitness, FitnessKind, Score},
    stats::Stats,
};

/// A snapshot of one generation, handed to observers and termination
/// conditions.
#[derive(Debug, Clone, PartialEq)]
pub struct IterationData<I> {
    iteration_num: usize,
    best_candidate: I,
    best_candidate_fitness: Fitness,
    fitness_mean: Fitness,
    fitness_stdev: Fitness,
    fitness_kind: FitnessKind,
}

impl<I: Clone> IterationData<I> {
    /// Builds a snapshot from a population already sorted best-first.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::EmptyPopulation` if `population` is empty.
    pub fn new(iteration_num: usize, population: &[Score<I>], fitness_kind: FitnessKind) -> Result<Self> {
        let best = population
            .first()
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;
        let stats = Stats::from_values(population.iter().map(|score| score.fitness))?;

        Ok(Self {
            iteration_num,
            best_candidate: best.individual.clone(),
            best_candidate_fitness: best.fitness,
            fitness_mean: stats.arithmetic_mean(),
            fitness_stdev: stats.stdev(),
            fitness_kind,
        })
    }
}

impl<I> IterationData<I> {
    pub fn iteration_num(&self) -> usize {
        self.iteration_num
    }

    pub fn best_candidate(&self) -> &I {
        &self.best_candidate
    }

    pub fn best_candidate_fitness(&self) -> Fitness {
        self.best_candidate_fitness
    }

    pub fn fitness_mean(&self) -> Fitness {
        self.fitness_mean
    }

    pub fn fitness_stdev(&self) -> Fitness {
        self.fitness_stdev
    }

    pub fn fitness_kind(&self) -> FitnessKind {
        self.fitness_kind
    }

    /// Consumes the snapshot, returning the best candidate.
    pub fn into_best_candidate(self) -> I {
        self.best_candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_from_sorted_population() {
        let population = vec![Score::new('a', 4.0), Score::new('b', 2.0), Score::new('c', 0.0)];
        let data = IterationData::new(3, &population, FitnessKind::Natural).unwrap();

        assert_eq!(data.iteration_num(), 3);
        assert_eq!(*data.best_candidate(), 'a');
        assert_eq!(data.best_candidate_fitness(), 4.0);
        assert_eq!(data.fitness_mean(), 2.0);
        assert!((data.fitness_stdev() - (8.0f64 / 3.0).sqrt()).abs() < 1e-12);
        assert_eq!(data.fitness_kind(), FitnessKind::Natural);
        assert_eq!(data.into_best_candidate(), 'a');
    }

    #[test]
    fn test_empty_population_is_rejected() {
        let population: Vec<Score<char>> = Vec::new();
        match IterationData::new(0, &population, FitnessKind::Inverted) {
            Err(GeneticError::EmptyPopulation) => (),
            _ => panic!("Expected EmptyPopulation error"),
        }
    }
}
