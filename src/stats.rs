//! # Running Statistics
//!
//! `Stats` is an incremental aggregator over a stream of fitness values. Sums,
//! extrema and the product are updated on every [`Stats::push`]; the raw values
//! are retained so that the median and the two-pass variance can be computed on
//! demand.
//!
//! An aggregator is always non-empty: [`Stats::from_values`] rejects an empty
//! input, so every query is well defined.
//!
//! ## Example
//!
//! ```rust
//! use genvolve::stats::Stats;
//!
//! let mut stats = Stats::from_values([2.0, 4.0, 4.0, 4.0]).unwrap();
//! stats.push(5.0);
//! stats.push(5.0);
//! stats.push(7.0);
//! stats.push(9.0);
//!
//! assert_eq!(stats.arithmetic_mean(), 5.0);
//! assert_eq!(stats.stdev(), 2.0);
//! assert_eq!(stats.maximum(), 9.0);
//! ```

use crate::error::{GeneticError, Result};

/// Serialized as the bare list of values; deserializing rebuilds the
/// aggregates through [`Stats::from_values`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<f64>", into = "Vec<f64>"))]
#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    total: f64,
    product: f64,
    reciprocal_sum: f64,
    minimum: f64,
    maximum: f64,
    data: Vec<f64>,
}

impl Stats {
    /// Builds an aggregator from a non-empty collection of values.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::InvalidInput` if `values` is empty.
    pub fn from_values<I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut stats = Self {
            total: 0.0,
            product: 1.0,
            reciprocal_sum: 0.0,
            minimum: f64::INFINITY,
            maximum: f64::NEG_INFINITY,
            data: Vec::new(),
        };
        values.into_iter().for_each(|value| stats.push(value));

        if stats.data.is_empty() {
            return Err(GeneticError::InvalidInput(
                "Statistics require at least one value".to_string(),
            ));
        }
        Ok(stats)
    }

    /// Appends a value to the stream.
    pub fn push(&mut self, value: f64) {
        self.data.push(value);
        self.minimum = self.minimum.min(value);
        self.maximum = self.maximum.max(value);
        self.total += value;
        self.product *= value;
        self.reciprocal_sum += 1.0 / value;
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn product(&self) -> f64 {
        self.product
    }

    pub fn reciprocal_sum(&self) -> f64 {
        self.reciprocal_sum
    }

    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    pub fn maximum(&self) -> f64 {
        self.maximum
    }

    /// Returns the median, averaging the two middle values for even sizes.
    pub fn median(&self) -> f64 {
        let mut sorted = self.data.clone();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let mid = sorted.len() / 2;
        if sorted.len() % 2 != 0 {
            sorted[mid]
        } else {
            sorted[mid - 1] + (sorted[mid] - sorted[mid - 1]) / 2.0
        }
    }

    pub fn arithmetic_mean(&self) -> f64 {
        self.total / self.size() as f64
    }

    /// Returns the N-th root of the product of all values.
    pub fn geometric_mean(&self) -> f64 {
        self.product.powf(1.0 / self.size() as f64)
    }

    pub fn harmonic_mean(&self) -> f64 {
        self.size() as f64 / self.reciprocal_sum
    }

    /// Mean absolute deviation around the arithmetic mean.
    pub fn mean_deviation(&self) -> f64 {
        let mean = self.arithmetic_mean();
        let diffs: f64 = self.data.iter().map(|value| (mean - value).abs()).sum();
        diffs / self.size() as f64
    }

    /// Sum of squared deviations from the arithmetic mean.
    pub fn sum_squared_diffs(&self) -> f64 {
        let mean = self.arithmetic_mean();
        self.data
            .iter()
            .map(|value| {
                let diff = mean - value;
                diff * diff
            })
            .sum()
    }

    /// Population variance.
    pub fn variance(&self) -> f64 {
        self.sum_squared_diffs() / self.size() as f64
    }

    /// Population standard deviation.
    pub fn stdev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Sample variance, `Σ(x - mean)² / (N - 1)`.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::InvalidInput` for fewer than two values.
    pub fn sample_variance(&self) -> Result<f64> {
        if self.size() < 2 {
            return Err(GeneticError::InvalidInput(
                "Sample variance requires at least two values".to_string(),
            ));
        }
        Ok(self.sum_squared_diffs() / (self.size() - 1) as f64)
    }

    /// Sample standard deviation.
    pub fn sample_stdev(&self) -> Result<f64> {
        self.sample_variance().map(f64::sqrt)
    }
}

impl TryFrom<Vec<f64>> for Stats {
    type Error = GeneticError;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Stats::from_values(values)
    }
}

impl From<Stats> for Vec<f64> {
    fn from(stats: Stats) -> Self {
        stats.data
    }
}
