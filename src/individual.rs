//! # Individual Capability Traits
//!
//! The engine never inspects a candidate's representation. Instead, each
//! genetic operator states the capability it needs:
//!
//! - [`Individual`]: anything that can be evaluated, cloned and sent between
//!   threads. Blanket-implemented for every suitable type.
//! - [`Crossoverable`]: required by [`Crossover`](crate::operators::Crossover).
//! - [`Mutatable`]: required by [`Mutation`](crate::operators::Mutation).
//!
//! A type that lacks a capability simply cannot be used to build the operator
//! that needs it; the mismatch is a compile error, not a runtime failure.
//!
//! ## Implementing the Traits
//!
//! ```rust
//! use genvolve::individual::{Crossoverable, Mutatable};
//! use genvolve::rng::RandomNumberGenerator;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Bits(Vec<bool>);
//!
//! impl Crossoverable for Bits {
//!     fn cross(a: &Self, b: &Self, rng: &mut RandomNumberGenerator) -> (Self, Self) {
//!         let point = rng.random_range(0..=a.0.len().min(b.0.len()));
//!         let mut left = a.0[..point].to_vec();
//!         left.extend_from_slice(&b.0[point..]);
//!         let mut right = b.0[..point].to_vec();
//!         right.extend_from_slice(&a.0[point..]);
//!         (Bits(left), Bits(right))
//!     }
//!
//!     fn genome_len(&self) -> Option<usize> {
//!         Some(self.0.len())
//!     }
//! }
//!
//! impl Mutatable for Bits {
//!     fn mutate(&self, rng: &mut RandomNumberGenerator) -> Self {
//!         let mut bits = self.0.clone();
//!         if !bits.is_empty() {
//!             let idx = rng.random_range(0..bits.len());
//!             bits[idx] = !bits[idx];
//!         }
//!         Bits(bits)
//!     }
//! }
//! ```

use std::fmt::Debug;

use crate::rng::RandomNumberGenerator;

/// A candidate solution.
///
/// Types must be `Clone`, `Debug`, `Send` and `Sync` so that populations can be
/// evaluated and transformed in parallel batches.
pub trait Individual: Clone + Debug + Send + Sync {}

impl<T> Individual for T where T: Clone + Debug + Send + Sync {}

/// Individuals that can be recombined.
pub trait Crossoverable: Individual {
    /// Produces exactly two offspring from two parents.
    fn cross(parent1: &Self, parent2: &Self, rng: &mut RandomNumberGenerator) -> (Self, Self);

    /// The length of the individual's internal representation, if it has one.
    ///
    /// When both parents report a length and the lengths differ, the
    /// crossover operator logs a warning before recombining them.
    fn genome_len(&self) -> Option<usize> {
        None
    }
}

/// Individuals that can be mutated.
pub trait Mutatable: Individual {
    /// Returns a mutated copy of the individual.
    fn mutate(&self, rng: &mut RandomNumberGenerator) -> Self;
}

/// Builds new, not yet evaluated individuals.
///
/// Blanket-implemented for closures taking the engine's generator, so a seeded
/// run also seeds every individual it creates.
pub trait Factory<I>: Send + Sync {
    fn create(&self, rng: &mut RandomNumberGenerator) -> I;
}

impl<I, F> Factory<I> for F
where
    F: Fn(&mut RandomNumberGenerator) -> I + Send + Sync,
{
    fn create(&self, rng: &mut RandomNumberGenerator) -> I {
        self(rng)
    }
}

/// Generates an initial population of `size` individuals.
pub fn primordial_soup<I, F>(size: usize, factory: &F, rng: &mut RandomNumberGenerator) -> Vec<I>
where
    F: Factory<I> + ?Sized,
{
    (0..size).map(|_| factory.create(rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Counter(u32);

    impl Mutatable for Counter {
        fn mutate(&self, _rng: &mut RandomNumberGenerator) -> Self {
            Counter(self.0 + 1)
        }
    }

    #[test]
    fn test_closure_factory() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let factory = |rng: &mut RandomNumberGenerator| Counter(rng.random_range(0..10));
        let soup: Vec<Counter> = primordial_soup(20, &factory, &mut rng);
        assert_eq!(soup.len(), 20);
        assert!(soup.iter().all(|c| c.0 < 10));
    }

    #[test]
    fn test_primordial_soup_empty() {
        let mut rng = RandomNumberGenerator::new();
        let factory = |_: &mut RandomNumberGenerator| Counter(0);
        let soup: Vec<Counter> = primordial_soup(0, &factory, &mut rng);
        assert!(soup.is_empty());
    }

    #[test]
    fn test_mutate_returns_new_value() {
        let mut rng = RandomNumberGenerator::new();
        let original = Counter(1);
        let mutated = original.mutate(&mut rng);
        assert_eq!(original, Counter(1));
        assert_eq!(mutated, Counter(2));
    }
}
