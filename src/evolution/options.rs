//! # Configuration
//!
//! The `Configuration` struct holds the knobs of a generational run: the
//! population size, how many elites are carried over unmodified, the batch
//! size used when evaluating a population concurrently, the logging level and
//! an optional seed.
//!
//! ## Example
//!
//! ```rust
//! use genvolve::evolution::options::{Configuration, LogLevel};
//!
//! // Create a new Configuration instance with custom parameters
//! let config = Configuration::new(50, 1);
//! assert!(config.validate().is_ok());
//!
//! // Or use the builder
//! let config = Configuration::builder()
//!     .size(100)
//!     .elite_count(2)
//!     .evaluation_batch_size(10)
//!     .log_level(LogLevel::Minimal)
//!     .seed(42)
//!     .build();
//! assert_eq!(config.get_size(), 100);
//!
//! // Elite count may not exceed the population size
//! assert!(Configuration::new(5, 6).validate().is_err());
//! ```
//!
//! ## Defaults
//!
//! - `size`: 250
//! - `elite_count`: 1
//! - `evaluation_batch_size`: 25
//! - `log_level`: `LogLevel::None`
//! - `seed`: none (seeded from system entropy)

use crate::error::{GeneticError, Result};

const DEFAULT_SIZE: usize = 250;
const DEFAULT_ELITE_COUNT: usize = 1;
const DEFAULT_EVALUATION_BATCH_SIZE: usize = 25;

/// Controls how much the engine reports through `tracing` on each generation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Per-generation summary plus every score.
    Verbose,
    /// Per-generation summary.
    Minimal,
    /// Start and termination events only.
    None,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    size: usize,
    elite_count: usize,
    /// Number of individuals evaluated by a single worker task
    evaluation_batch_size: usize,
    log_level: LogLevel,
    seed: Option<u64>,
}

impl Configuration {
    pub fn new(size: usize, elite_count: usize) -> Self {
        Self {
            size,
            elite_count,
            ..Self::default()
        }
    }

    /// Checks the invariants the engine relies on.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if the size is zero, the elite
    /// count exceeds the size, or the evaluation batch size is zero.
    pub fn validate(&self) -> Result<()> {
        if self.size < 1 {
            return Err(GeneticError::Configuration(
                "Population size must be at least 1".to_string(),
            ));
        }

        if self.elite_count > self.size {
            return Err(GeneticError::Configuration(format!(
                "Elite count ({}) cannot exceed population size ({})",
                self.elite_count, self.size
            )));
        }

        if self.evaluation_batch_size < 1 {
            return Err(GeneticError::Configuration(
                "Evaluation batch size must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    pub fn get_size(&self) -> usize {
        self.size
    }

    pub fn get_elite_count(&self) -> usize {
        self.elite_count
    }

    pub fn get_evaluation_batch_size(&self) -> usize {
        self.evaluation_batch_size
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }

    pub fn get_seed(&self) -> Option<u64> {
        self.seed
    }

    /// Sets the population size.
    pub fn set_size(&mut self, size: usize) {
        self.size = size;
    }

    /// Sets the elite count.
    pub fn set_elite_count(&mut self, elite_count: usize) {
        self.elite_count = elite_count;
    }

    /// Sets the evaluation batch size.
    pub fn set_evaluation_batch_size(&mut self, batch_size: usize) {
        self.evaluation_batch_size = batch_size;
    }

    /// Sets the log level.
    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    /// Sets or clears the seed.
    pub fn set_seed(&mut self, seed: Option<u64>) {
        self.seed = seed;
    }

    /// Returns a builder for creating a `Configuration` instance.
    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::default()
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            elite_count: DEFAULT_ELITE_COUNT,
            evaluation_batch_size: DEFAULT_EVALUATION_BATCH_SIZE,
            log_level: LogLevel::None,
            seed: None,
        }
    }
}

/// Builder for `Configuration`.
///
/// Provides a fluent interface for constructing `Configuration` instances.
/// Unset fields take their default values.
#[derive(Debug, Clone, Default)]
pub struct ConfigurationBuilder {
    size: Option<usize>,
    elite_count: Option<usize>,
    evaluation_batch_size: Option<usize>,
    log_level: Option<LogLevel>,
    seed: Option<u64>,
}

impl ConfigurationBuilder {
    /// Sets the population size.
    pub fn size(mut self, value: usize) -> Self {
        self.size = Some(value);
        self
    }

    /// Sets the elite count.
    pub fn elite_count(mut self, value: usize) -> Self {
        self.elite_count = Some(value);
        self
    }

    /// Sets the evaluation batch size.
    pub fn evaluation_batch_size(mut self, value: usize) -> Self {
        self.evaluation_batch_size = Some(value);
        self
    }

    /// Sets the log level.
    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    /// Seeds the engine's generator.
    pub fn seed(mut self, value: u64) -> Self {
        self.seed = Some(value);
        self
    }

    /// Builds the `Configuration` instance.
    pub fn build(self) -> Configuration {
        Configuration {
            size: self.size.unwrap_or(DEFAULT_SIZE),
            elite_count: self.elite_count.unwrap_or(DEFAULT_ELITE_COUNT),
            evaluation_batch_size: self
                .evaluation_batch_size
                .unwrap_or(DEFAULT_EVALUATION_BATCH_SIZE),
            log_level: self.log_level.unwrap_or(LogLevel::None),
            seed: self.seed,
        }
    }
}
