//! Sorted sample index for bandwidth-window prefiltering.
//!
//! ## Purpose
//!
//! Every local fit only looks at the samples inside a rectangular window
//! around its query point. This module sorts the samples once per call by
//! their first coordinate so the window's first-axis range can be located by
//! binary search; the second axis is filtered by the caller.
//!
//! ## Design notes
//!
//! * **Stable**: Ties on the first coordinate keep input order, so accumulation
//!   order inside a window is deterministic.
//! * **Borrowing**: Ranges are returned as sub-slices of the sorted order; no
//!   per-query allocation.
//!
//! ## Invariants
//!
//! * `keys` is non-decreasing and `keys[k]` is the first coordinate of sample `order[k]`.
//!
//! ## Non-goals
//!
//! * This module does not evaluate kernels or the second-axis filter.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// ============================================================================
// Sample Index
// ============================================================================

/// Sample indices sorted by first coordinate.
#[derive(Debug, Clone)]
pub struct SampleIndex<T> {
    /// Sample positions in ascending first-coordinate order.
    pub order: Vec<usize>,
    /// First coordinates in the same order as `order`.
    pub keys: Vec<T>,
}

impl<T: Float> SampleIndex<T> {
    /// Build the index from flattened row-major `(a, b)` pairs.
    pub fn new(coords: &[T]) -> Self {
        let n = coords.len() / 2;
        let mut order: Vec<usize> = (0..n).collect();
        // `sort_by` is stable: equal keys stay in input order.
        order.sort_by(|&i, &j| {
            coords[i * 2]
                .partial_cmp(&coords[j * 2])
                .unwrap_or(Ordering::Equal)
        });
        let keys = order.iter().map(|&i| coords[i * 2]).collect();
        Self { order, keys }
    }

    /// Number of indexed samples.
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.order.len()
    }

    /// Samples whose first coordinate lies in `[center - half_width, center + half_width]`.
    #[inline]
    pub fn range(&self, center: T, half_width: T) -> &[usize] {
        let lower = center - half_width;
        let upper = center + half_width;
        let start = self.keys.partition_point(|&k| k < lower);
        let end = self.keys.partition_point(|&k| k <= upper);
        if start >= end {
            return &[];
        }
        &self.order[start..end]
    }
}
