//! # Genetic Operators
//!
//! An [`Operator`] is a population-to-population transform. The engine applies
//! exactly one operator per generation to the individuals chosen by selection;
//! anything more elaborate is built by composing operators:
//!
//! - [`Crossover`] and [`Mutation`] do the actual recombination and variation.
//! - [`Pipe`] runs one operator after another.
//! - [`Split`] runs two operators on two parts of the population.
//! - [`Parallel`] runs an operator on batches of the population concurrently.
//! - [`Identity`] and [`Replace`] pass the population through or replace it
//!   with fresh individuals.
//!
//! An operator may return fewer individuals than it received; the engine
//! tops up the next generation with freshly created individuals.
//!
//! ## Example
//!
//! ```rust
//! use genvolve::individual::{Crossoverable, Mutatable};
//! use genvolve::operators::{Crossover, Mutation, Operator, OperatorExt};
//! use genvolve::rng::RandomNumberGenerator;
//! use genvolve::error::Result;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Gene(i32);
//!
//! impl Crossoverable for Gene {
//!     fn cross(a: &Self, b: &Self, _rng: &mut RandomNumberGenerator) -> (Self, Self) {
//!         (Gene(a.0 + b.0), Gene(a.0 - b.0))
//!     }
//! }
//!
//! impl Mutatable for Gene {
//!     fn mutate(&self, _rng: &mut RandomNumberGenerator) -> Self {
//!         Gene(self.0 + 1)
//!     }
//! }
//!
//! fn main() -> Result<()> {
//!     let operator = Crossover::new(0.7)?
//!         .pipe(Mutation::new(0.1)?)
//!         .parallel(16)?;
//!
//!     let mut rng = RandomNumberGenerator::from_seed(42);
//!     let population: Vec<Gene> = (0..100).map(Gene).collect();
//!     let next = operator.apply(population, &mut rng)?;
//!
//!     assert_eq!(next.len(), 100);
//!     Ok(())
//! }
//! ```

use std::sync::Arc;

use crate::error::Result;
use crate::rng::RandomNumberGenerator;

pub mod basic;
pub mod compose;
pub mod crossover;
pub mod mutation;
pub mod parallel;

pub use basic::{Identity, Replace};
pub use compose::{Pipe, Split};
pub use crossover::Crossover;
pub use mutation::Mutation;
pub use parallel::Parallel;

/// A population-to-population transform.
pub trait Operator<I>: Send + Sync {
    /// Transforms `population` into the next set of (not yet evaluated) individuals.
    ///
    /// # Errors
    ///
    /// Returns an error if the transform cannot be carried out, for example
    /// when a concurrent batch fails.
    fn apply(&self, population: Vec<I>, rng: &mut RandomNumberGenerator) -> Result<Vec<I>>;
}

impl<I, O> Operator<I> for Arc<O>
where
    O: Operator<I> + ?Sized,
{
    fn apply(&self, population: Vec<I>, rng: &mut RandomNumberGenerator) -> Result<Vec<I>> {
        (**self).apply(population, rng)
    }
}

impl<I, O> Operator<I> for Box<O>
where
    O: Operator<I> + ?Sized,
{
    fn apply(&self, population: Vec<I>, rng: &mut RandomNumberGenerator) -> Result<Vec<I>> {
        (**self).apply(population, rng)
    }
}

/// Composition sugar shared by the built-in operators.
pub trait OperatorExt: Sized {
    /// Runs `self`, then `rhs` on its output.
    fn pipe<R>(self, rhs: R) -> Pipe<Self, R> {
        Pipe::new(self, rhs)
    }

    /// Runs `self` on concurrent batches of `batch_size` individuals.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if `batch_size` is zero.
    fn parallel(self, batch_size: usize) -> Result<Parallel<Self>> {
        Parallel::new(batch_size, self)
    }
}

impl<I> OperatorExt for Crossover<I> {}
impl<I> OperatorExt for Mutation<I> {}
impl<O> OperatorExt for Parallel<O> {}
impl<L, R> OperatorExt for Pipe<L, R> {}
impl<L, R> OperatorExt for Split<L, R> {}
impl OperatorExt for Identity {}
impl<F> OperatorExt for Replace<F> {}
