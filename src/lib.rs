//! # genvolve
//!
//! A generational evolutionary-computation engine. The caller supplies the
//! problem: a [`Factory`] for new individuals, an [`Evaluation`] scoring an
//! individual against its population, and, depending on the operators used,
//! [`Crossoverable`] and [`Mutatable`] implementations. The engine supplies
//! the rest: selection strategies, composable genetic operators, concurrent
//! evaluation, termination conditions and per-generation statistics.
//!
//! ## Example
//!
//! ```rust
//! use genvolve::{
//!     Configuration, EngineBuilder, FitnessKind, Mutatable, RandomNumberGenerator,
//! };
//! use genvolve::operators::Mutation;
//! use genvolve::selection::TournamentSelection;
//! use genvolve::termination::{FitnessThreshold, NumberOfIterations, TerminationExt};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Guess(f64);
//!
//! impl Mutatable for Guess {
//!     fn mutate(&self, rng: &mut RandomNumberGenerator) -> Self {
//!         Guess(self.0 + rng.random_range(-1.0..1.0))
//!     }
//! }
//!
//! let mut engine = EngineBuilder::new()
//!     .with_factory(|rng: &mut RandomNumberGenerator| Guess(rng.random_range(-50.0..50.0)))
//!     .with_evaluation(|guess: &Guess, _population: &[Guess]| (guess.0 - 7.0).abs())
//!     .with_fitness_kind(FitnessKind::Inverted)
//!     .with_selection(TournamentSelection::new(3).unwrap())
//!     .with_operator(Mutation::new(0.8).unwrap())
//!     .with_config(Configuration::builder().size(40).elite_count(2).seed(1).build())
//!     .with_termination(
//!         NumberOfIterations(500).or(FitnessThreshold::new(0.01, FitnessKind::Inverted)),
//!     )
//!     .build()
//!     .unwrap();
//!
//! let result = engine.evolve().unwrap();
//! assert!(result.fitness < 1.0);
//! ```

pub mod error;
pub mod evolution;
pub mod fitness;
pub mod individual;
pub mod operators;
pub mod rng;
pub mod scatter;
pub mod selection;
pub mod stats;
pub mod termination;

// Re-export commonly used types for convenience
pub use error::{GeneticError, OptionExt, Result};
pub use evolution::{
    Configuration, Engine, EngineBuilder, Evaluation, EvolutionResult, IterationData, LogLevel,
    StopHandle,
};
pub use fitness::{Fitness, FitnessKind, Score};
pub use individual::{Crossoverable, Factory, Individual, Mutatable};
pub use operators::{Operator, OperatorExt};
pub use rng::{Probability, RandomNumberGenerator};
pub use selection::SelectionStrategy;
pub use termination::{TerminationCondition, TerminationExt};
