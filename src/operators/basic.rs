use std::fmt;

use crate::error::Result;
use crate::individual::{primordial_soup, Factory};
use crate::operators::Operator;
use crate::rng::RandomNumberGenerator;

/// Passes the population through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl<I> Operator<I> for Identity {
    fn apply(&self, population: Vec<I>, _rng: &mut RandomNumberGenerator) -> Result<Vec<I>> {
        Ok(population)
    }
}

/// Replaces every individual with a freshly created one.
///
/// Useful on one side of a [`Split`](crate::operators::Split) to inject new
/// genetic material each generation.
#[derive(Clone)]
pub struct Replace<F> {
    factory: F,
}

impl<F> Replace<F> {
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl<F> fmt::Debug for Replace<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Replace").finish_non_exhaustive()
    }
}

impl<I, F> Operator<I> for Replace<F>
where
    F: Factory<I>,
{
    fn apply(&self, population: Vec<I>, rng: &mut RandomNumberGenerator) -> Result<Vec<I>> {
        Ok(primordial_soup(population.len(), &self.factory, rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let mut rng = RandomNumberGenerator::new();
        assert_eq!(Identity.apply(vec!['a', 'b'], &mut rng).unwrap(), vec!['a', 'b']);
    }

    #[test]
    fn test_replace_keeps_length() {
        let mut rng = RandomNumberGenerator::from_seed(2);
        let replace = Replace::new(|_: &mut RandomNumberGenerator| 0u8);

        let output = replace.apply(vec![7u8; 12], &mut rng).unwrap();

        assert_eq!(output, vec![0u8; 12]);
    }
}
