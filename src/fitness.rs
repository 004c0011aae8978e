//! # Fitness
//!
//! Fitness values are plain `f64`s. Whether a larger or a smaller value is
//! better is decided by [`FitnessKind`], which every comparison in the engine
//! goes through.
//!
//! ## Example
//!
//! ```rust
//! use genvolve::fitness::{sort_evaluated_population, FitnessKind, Score};
//!
//! let mut scores = vec![Score::new("b", 3.0), Score::new("a", 1.0), Score::new("c", 2.0)];
//!
//! sort_evaluated_population(&mut scores, FitnessKind::Inverted);
//! assert_eq!(scores[0].individual, "a");
//!
//! assert_eq!(FitnessKind::Inverted.adjusted(0.0), f64::INFINITY);
//! assert_eq!(FitnessKind::Inverted.adjusted(4.0), 0.25);
//! ```

use std::cmp::Ordering;

/// A scalar quality score.
pub type Fitness = f64;

/// Defines whether a greater fitness value is better or worse.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FitnessKind {
    /// Higher is better.
    #[default]
    Natural,
    /// Lower is better.
    Inverted,
}

impl FitnessKind {
    /// Returns `true` if `lhs` is strictly better than `rhs`.
    pub fn is_better(&self, lhs: Fitness, rhs: Fitness) -> bool {
        match self {
            FitnessKind::Natural => lhs > rhs,
            FitnessKind::Inverted => lhs < rhs,
        }
    }

    /// Maps a raw fitness onto a "larger is always better" scale.
    ///
    /// `Inverted` fitness becomes its reciprocal, and an exact zero becomes
    /// positive infinity.
    pub fn adjusted(&self, fitness: Fitness) -> Fitness {
        match self {
            FitnessKind::Natural => fitness,
            FitnessKind::Inverted => {
                if fitness == 0.0 {
                    f64::INFINITY
                } else {
                    1.0 / fitness
                }
            }
        }
    }

    /// Orders two fitness values best-first.
    pub fn compare_best_first(&self, a: Fitness, b: Fitness) -> Ordering {
        match self {
            FitnessKind::Natural => b.total_cmp(&a),
            FitnessKind::Inverted => a.total_cmp(&b),
        }
    }
}

/// An evaluated individual.
#[derive(Debug, Clone, PartialEq)]
pub struct Score<I> {
    pub individual: I,
    pub fitness: Fitness,
}

impl<I> Score<I> {
    pub fn new(individual: I, fitness: Fitness) -> Self {
        Self {
            individual,
            fitness,
        }
    }

    /// Returns whichever of the two individuals is fitter.
    ///
    /// Ties go to `other`.
    pub fn fitter_individual<'a>(&'a self, kind: FitnessKind, other: &'a Score<I>) -> &'a I {
        if kind.is_better(self.fitness, other.fitness) {
            &self.individual
        } else {
            &other.individual
        }
    }
}

/// Sorts an evaluated population best-first.
///
/// The sort is stable, so equally fit scores keep their relative order.
pub fn sort_evaluated_population<I>(population: &mut [Score<I>], kind: FitnessKind) {
    population.sort_by(|a, b| kind.compare_best_first(a.fitness, b.fitness));
}
