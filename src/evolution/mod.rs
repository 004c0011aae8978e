//! # Evolution
//!
//! The generational loop and everything it is configured with: the
//! [`Engine`] itself, its [`EngineBuilder`], the run [`Configuration`], the
//! concurrent [`Evaluation`] of a population and the per-generation
//! [`IterationData`] snapshot.

pub mod builder;
pub mod engine;
pub mod evaluation;
pub mod iteration;
pub mod options;

pub use builder::EngineBuilder;
pub use engine::{Engine, EvolutionResult, Observer, StopHandle};
pub use evaluation::{evaluate_population, Evaluation};
pub use iteration::IterationData;
pub use options::{Configuration, ConfigurationBuilder, LogLevel};
