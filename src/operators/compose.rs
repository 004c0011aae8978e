use crate::error::{GeneticError, Result};
use crate::operators::Operator;
use crate::rng::RandomNumberGenerator;

/// Sequential composition: `rhs(lhs(population))`.
#[derive(Debug, Clone)]
pub struct Pipe<L, R> {
    lhs: L,
    rhs: R,
}

impl<L, R> Pipe<L, R> {
    pub fn new(lhs: L, rhs: R) -> Self {
        Self { lhs, rhs }
    }
}

impl<I, L, R> Operator<I> for Pipe<L, R>
where
    L: Operator<I>,
    R: Operator<I>,
{
    fn apply(&self, population: Vec<I>, rng: &mut RandomNumberGenerator) -> Result<Vec<I>> {
        let intermediate = self.lhs.apply(population, rng)?;
        self.rhs.apply(intermediate, rng)
    }
}

/// Runs `lhs` on the first `floor(amount * len)` individuals and `rhs` on the
/// rest, concatenating both outputs in that order.
#[derive(Debug, Clone)]
pub struct Split<L, R> {
    amount: f64,
    lhs: L,
    rhs: R,
}

impl<L, R> Split<L, R> {
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if `amount` is outside `[0, 1]`.
    pub fn new(amount: f64, lhs: L, rhs: R) -> Result<Self> {
        if !(0.0..=1.0).contains(&amount) {
            return Err(GeneticError::Configuration(format!(
                "Split amount must be in the range [0, 1], got {}",
                amount
            )));
        }
        Ok(Self { amount, lhs, rhs })
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Index at which a population of `len` individuals is cut.
    pub fn split_index(&self, len: usize) -> usize {
        ((self.amount * len as f64).floor() as usize).min(len)
    }
}

impl<I, L, R> Operator<I> for Split<L, R>
where
    L: Operator<I>,
    R: Operator<I>,
{
    fn apply(&self, mut population: Vec<I>, rng: &mut RandomNumberGenerator) -> Result<Vec<I>> {
        let suffix = population.split_off(self.split_index(population.len()));

        let mut output = self.lhs.apply(population, rng)?;
        output.extend(self.rhs.apply(suffix, rng)?);
        Ok(output)
    }
}
