//! # Scatter/Gather
//!
//! Partition a slice into fixed-size contiguous batches, run one task per batch
//! concurrently on the rayon pool, merge the partial results through a single
//! serialized collector, and block until every batch has reported.
//!
//! Both population evaluation and the [`Parallel`](crate::operators::Parallel)
//! operator are built on [`scatter_gather`].
//!
//! ## Example
//!
//! ```rust
//! use genvolve::scatter::scatter_gather;
//!
//! let values: Vec<u32> = (0..10).collect();
//! let doubled = scatter_gather(&values, 3, |_, batch| {
//!     Ok(batch.iter().map(|v| v * 2).collect())
//! })
//! .unwrap();
//!
//! assert_eq!(doubled, (0..10).map(|v| v * 2).collect::<Vec<_>>());
//! ```

use std::ops::Range;
use std::sync::Mutex;

use crate::error::{GeneticError, Result};

/// Splits `0..len` into contiguous ranges of `batch_size`, followed by one
/// shorter range for the remainder if there is one.
///
/// # Errors
///
/// Returns `GeneticError::Configuration` if `batch_size` is zero.
pub fn batch_ranges(len: usize, batch_size: usize) -> Result<Vec<Range<usize>>> {
    if batch_size == 0 {
        return Err(GeneticError::Configuration(
            "Batch size must be at least 1".to_string(),
        ));
    }

    let full_batches = len / batch_size;
    let mut ranges: Vec<Range<usize>> = (0..full_batches)
        .map(|idx| idx * batch_size..(idx + 1) * batch_size)
        .collect();

    let remainder_start = full_batches * batch_size;
    if remainder_start < len {
        ranges.push(remainder_start..len);
    }

    Ok(ranges)
}

/// Runs `task` on every batch of `items` concurrently and concatenates the
/// outputs in batch order.
///
/// The task receives the batch index and the batch itself. Workers only read
/// `items`; their outputs are written into the collector one batch at a time
/// under a lock. The call returns once every batch has finished.
///
/// # Errors
///
/// Returns the first error reported by any batch, a
/// `GeneticError::Configuration` if `batch_size` is zero, or a
/// `GeneticError::Concurrency` if the collector was poisoned by a panicking
/// worker.
pub fn scatter_gather<T, R, F>(items: &[T], batch_size: usize, task: F) -> Result<Vec<R>>
where
    T: Sync,
    R: Send,
    F: Fn(usize, &[T]) -> Result<Vec<R>> + Sync,
{
    let ranges = batch_ranges(items.len(), batch_size)?;
    let collector: Mutex<Vec<(usize, Result<Vec<R>>)>> =
        Mutex::new(Vec::with_capacity(ranges.len()));

    rayon::scope(|scope| {
        for (batch_idx, range) in ranges.iter().cloned().enumerate() {
            let task = &task;
            let collector = &collector;
            scope.spawn(move |_| {
                let partial = task(batch_idx, &items[range]);
                // A poisoned collector is detected after the barrier.
                if let Ok(mut merged) = collector.lock() {
                    merged.push((batch_idx, partial));
                }
            });
        }
    });

    let mut partials = collector
        .into_inner()
        .map_err(|_| GeneticError::Concurrency("Batch collector was poisoned".to_string()))?;

    if partials.len() != ranges.len() {
        return Err(GeneticError::Concurrency(format!(
            "Expected {} batch results, collected {}",
            ranges.len(),
            partials.len()
        )));
    }

    partials.sort_by_key(|(batch_idx, _)| *batch_idx);

    let mut results = Vec::with_capacity(items.len());
    for (_, partial) in partials {
        results.extend(partial?);
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_batch_ranges_with_remainder() {
        let ranges = batch_ranges(10, 4).unwrap();
        assert_eq!(ranges, vec![0..4, 4..8, 8..10]);
    }

    #[test]
    fn test_batch_ranges_exact() {
        let ranges = batch_ranges(8, 4).unwrap();
        assert_eq!(ranges, vec![0..4, 4..8]);
    }

    #[test]
    fn test_batch_ranges_smaller_than_batch() {
        assert_eq!(batch_ranges(3, 25).unwrap(), vec![0..3]);
        assert!(batch_ranges(0, 25).unwrap().is_empty());
    }

    #[test]
    fn test_batch_ranges_zero_batch_size() {
        match batch_ranges(10, 0) {
            Err(GeneticError::Configuration(msg)) => assert!(msg.contains("Batch size")),
            _ => panic!("Expected Configuration error"),
        }
    }

    #[test]
    fn test_every_item_processed_exactly_once() {
        let items: Vec<usize> = (0..103).collect();
        let calls = AtomicUsize::new(0);

        let results = scatter_gather(&items, 10, |_, batch| {
            calls.fetch_add(batch.len(), Ordering::SeqCst);
            Ok(batch.to_vec())
        })
        .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 103);
        assert_eq!(results, items);
    }

    #[test]
    fn test_batch_indices_are_passed() {
        let items: Vec<u8> = vec![0; 7];
        let results = scatter_gather(&items, 3, |idx, batch| Ok(vec![(idx, batch.len())])).unwrap();
        assert_eq!(results, vec![(0, 3), (1, 3), (2, 1)]);
    }

    #[test]
    fn test_error_is_propagated() {
        let items: Vec<u32> = (0..20).collect();
        let result: Result<Vec<u32>> = scatter_gather(&items, 5, |idx, batch| {
            if idx == 2 {
                Err(GeneticError::Operator("batch failed".to_string()))
            } else {
                Ok(batch.to_vec())
            }
        });

        match result {
            Err(GeneticError::Operator(msg)) => assert_eq!(msg, "batch failed"),
            _ => panic!("Expected Operator error"),
        }
    }

    #[test]
    fn test_batches_may_change_length() {
        let items: Vec<u32> = (0..9).collect();
        let results = scatter_gather(&items, 4, |_, batch| Ok(batch[..1].to_vec())).unwrap();
        assert_eq!(results, vec![0, 4, 8]);
    }

    #[test]
    fn test_empty_input() {
        let items: Vec<u32> = Vec::new();
        let results = scatter_gather(&items, 4, |_, batch| Ok(batch.to_vec())).unwrap();
        assert!(results.is_empty());
    }
}
