//! # Error Types
//!
//! This module defines the error type shared by every part of the engine.
//! Precondition violations (an invalid configuration, an empty population
//! handed to selection or statistics) are reported as values instead of
//! producing degenerate output.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use genvolve::error::{GeneticError, Result};
//!
//! fn checked_size(size: usize) -> Result<usize> {
//!     if size == 0 {
//!         return Err(GeneticError::Configuration(
//!             "Population size must be at least 1".to_string(),
//!         ));
//!     }
//!     Ok(size)
//! }
//!
//! assert!(checked_size(0).is_err());
//! assert_eq!(checked_size(10).unwrap(), 10);
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use genvolve::error::{GeneticError, OptionExt};
//!
//! fn first_candidate(candidates: &[i32]) -> genvolve::error::Result<i32> {
//!     candidates.first().cloned().ok_or_else_genetic(|| GeneticError::EmptyPopulation)
//! }
//!
//! assert!(first_candidate(&[]).is_err());
//! ```

use thiserror::Error;

/// Represents errors that can occur while configuring or running an evolution.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when input data violates a precondition.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error that occurs when a fitness calculation fails.
    #[error("Fitness calculation error: {0}")]
    FitnessCalculation(String),

    /// Error that occurs when a genetic operator fails.
    #[error("Operator error: {0}")]
    Operator(String),

    /// Error that occurs when a concurrent batch cannot be merged.
    #[error("Concurrency error: {0}")]
    Concurrency(String),

    /// A custom error raised by caller-supplied components.
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for engine operations.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Option to convert to Result with a custom error.
///
/// ## Examples
///
/// ```rust
/// use genvolve::error::{GeneticError, OptionExt};
///
/// fn best(values: &[f64]) -> genvolve::error::Result<f64> {
///     values
///         .iter()
///         .cloned()
///         .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.max(v))))
///         .ok_or_else_genetic(|| GeneticError::EmptyPopulation)
/// }
///
/// assert_eq!(best(&[1.0, 3.0, 2.0]).unwrap(), 3.0);
/// ```
pub trait OptionExt<T> {
    /// Converts an Option to a Result using a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GeneticError::Configuration("elite count exceeds size".to_string());
        assert_eq!(err.to_string(), "Configuration error: elite count exceeds size");

        let err = GeneticError::EmptyPopulation;
        assert!(err.to_string().contains("empty population"));
    }

    #[test]
    fn test_option_ext() {
        let some: Option<i32> = Some(3);
        assert_eq!(some.ok_or_else_genetic(|| GeneticError::EmptyPopulation).unwrap(), 3);

        let none: Option<i32> = None;
        match none.ok_or_else_genetic(|| GeneticError::EmptyPopulation) {
            Err(GeneticError::EmptyPopulation) => (),
            _ => panic!("Expected EmptyPopulation error"),
        }
    }
}
