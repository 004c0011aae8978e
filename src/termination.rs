//! # Termination Conditions
//!
//! A termination condition is a pure predicate over the per-generation
//! [`IterationData`] snapshot. The engine stops as soon as its condition
//! returns `true`.
//!
//! Conditions compose with [`TerminationExt::and`] and [`TerminationExt::or`].
//! Both combinators always evaluate both operands; conditions are expected to
//! be cheap and free of side effects.
//!
//! Plain closures over `&IterationData<I>` are conditions as well.
//!
//! ## Example
//!
//! ```rust
//! use genvolve::fitness::{FitnessKind, Score};
//! use genvolve::evolution::IterationData;
//! use genvolve::termination::{
//!     FitnessThreshold, NumberOfIterations, TerminationCondition, TerminationExt,
//! };
//!
//! let condition = NumberOfIterations(100).or(FitnessThreshold::new(0.5, FitnessKind::Inverted));
//!
//! let population = vec![Score::new("best", 0.25), Score::new("worst", 3.0)];
//! let data = IterationData::new(10, &population, FitnessKind::Inverted).unwrap();
//!
//! assert!(condition.should_terminate(&data));
//! ```

use std::time::SystemTime;

use crate::{
    evolution::IterationData,
    fitness::{Fitness, FitnessKind},
};

/// Decides, once per generation, whether the evolution should stop.
pub trait TerminationCondition<I>: Send + Sync {
    fn should_terminate(&self, data: &IterationData<I>) -> bool;
}

impl<I, F> TerminationCondition<I> for F
where
    F: Fn(&IterationData<I>) -> bool + Send + Sync,
{
    fn should_terminate(&self, data: &IterationData<I>) -> bool {
        self(data)
    }
}

/// Combinator sugar shared by the built-in conditions.
pub trait TerminationExt: Sized {
    /// Stops when both conditions hold.
    fn and<R>(self, rhs: R) -> And<Self, R> {
        And::new(self, rhs)
    }

    /// Stops when either condition holds.
    fn or<R>(self, rhs: R) -> Or<Self, R> {
        Or::new(self, rhs)
    }
}

/// True once the iteration index reaches `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberOfIterations(pub usize);

impl<I> TerminationCondition<I> for NumberOfIterations {
    fn should_terminate(&self, data: &IterationData<I>) -> bool {
        data.iteration_num() >= self.0
    }
}

/// True once the wall clock has passed the given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OnDate(pub SystemTime);

impl<I> TerminationCondition<I> for OnDate {
    fn should_terminate(&self, _data: &IterationData<I>) -> bool {
        SystemTime::now() >= self.0
    }
}

/// True once the best fitness is strictly better than a threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitnessThreshold {
    threshold: Fitness,
    kind: FitnessKind,
}

impl FitnessThreshold {
    pub fn new(threshold: Fitness, kind: FitnessKind) -> Self {
        Self { threshold, kind }
    }
}

impl<I> TerminationCondition<I> for FitnessThreshold {
    fn should_terminate(&self, data: &IterationData<I>) -> bool {
        self.kind
            .is_better(data.best_candidate_fitness(), self.threshold)
    }
}

/// True once the best candidate equals a reference individual.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceIndividual<T> {
    reference: T,
}

impl<T> ReferenceIndividual<T> {
    pub fn new(reference: T) -> Self {
        Self { reference }
    }
}

impl<T> TerminationCondition<T> for ReferenceIndividual<T>
where
    T: PartialEq + Send + Sync,
{
    fn should_terminate(&self, data: &IterationData<T>) -> bool {
        *data.best_candidate() == self.reference
    }
}

/// Always true; installing it stops the evolution at the next boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Always;

impl<I> TerminationCondition<I> for Always {
    fn should_terminate(&self, _data: &IterationData<I>) -> bool {
        true
    }
}

/// Never true.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Never;

impl<I> TerminationCondition<I> for Never {
    fn should_terminate(&self, _data: &IterationData<I>) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct And<L, R> {
    lhs: L,
    rhs: R,
}

impl<L, R> And<L, R> {
    pub fn new(lhs: L, rhs: R) -> Self {
        Self { lhs, rhs }
    }
}

impl<I, L, R> TerminationCondition<I> for And<L, R>
where
    L: TerminationCondition<I>,
    R: TerminationCondition<I>,
{
    fn should_terminate(&self, data: &IterationData<I>) -> bool {
        let lhs = self.lhs.should_terminate(data);
        let rhs = self.rhs.should_terminate(data);
        lhs && rhs
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Or<L, R> {
    lhs: L,
    rhs: R,
}

impl<L, R> Or<L, R> {
    pub fn new(lhs: L, rhs: R) -> Self {
        Self { lhs, rhs }
    }
}

impl<I, L, R> TerminationCondition<I> for Or<L, R>
where
    L: TerminationCondition<I>,
    R: TerminationCondition<I>,
{
    fn should_terminate(&self, data: &IterationData<I>) -> bool {
        let lhs = self.lhs.should_terminate(data);
        let rhs = self.rhs.should_terminate(data);
        lhs || rhs
    }
}

impl TerminationExt for NumberOfIterations {}
impl TerminationExt for OnDate {}
impl TerminationExt for FitnessThreshold {}
impl<T> TerminationExt for ReferenceIndividual<T> {}
impl TerminationExt for Always {}
impl TerminationExt for Never {}
impl<L, R> TerminationExt for And<L, R> {}
impl<L, R> TerminationExt for Or<L, R> {}
