//! Execution engine for LWLS smoothing passes.
//!
//! ## Purpose
//!
//! This module runs one local fit per query point. It owns nothing but a
//! `RegressionContext` and a parallelism hint, and provides the two passes
//! every smoother needs: the full smoothing pass and the bandwidth probe.
//!
//! ## Design notes
//!
//! * **Independence**: Query points never share mutable state; each worker
//!   owns a `FittingBuffer` and writes disjoint output positions.
//! * **Parallelism**: With the `parallel` feature, queries are distributed
//!   with rayon (`map_init` gives one buffer per worker).
//! * **Order**: Output order always matches query order.
//! * **Probe**: Stops at the first unsupported query and never solves a system.
//!
//! ## Key concepts
//!
//! * **Frame**: Queries are given in the same coordinate frame as the context's
//!   samples (raw for the grid smoother, rotated for the rotated smoother).
//! * **Sentinel**: Unsupported queries produce NaN in the full pass.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs (see `validator`).
//! * This module does not build grids or rotate coordinates (see adapters).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::Debug;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

// Internal dependencies
use crate::algorithms::regression::{RegressionContext, SolverLinalg};
use crate::engine::output::BandwidthCheck;
use crate::math::linalg::FloatLinalg;
use crate::primitives::buffer::FittingBuffer;

// ============================================================================
// Executor
// ============================================================================

/// Runs smoothing passes over a set of query points.
#[derive(Debug, Clone, Copy)]
pub struct LwlsExecutor<'a, T> {
    /// Shared per-pass regression state.
    pub context: RegressionContext<'a, T>,

    /// Distribute queries across threads (only honored with the `parallel` feature).
    pub parallel: bool,
}

impl<'a, T> LwlsExecutor<'a, T>
where
    T: FloatLinalg + SolverLinalg + Debug + Send + Sync,
{
    /// Create an executor for one pass.
    pub fn new(context: RegressionContext<'a, T>, parallel: bool) -> Self {
        Self { context, parallel }
    }

    /// Initial buffer capacity: a rough guess at the window population.
    fn buffer(&self) -> FittingBuffer<T> {
        let expected = self.context.index.n_samples().min(256);
        FittingBuffer::new(expected, self.context.degree.n_coeffs())
    }

    // ========================================================================
    // Full Pass
    // ========================================================================

    /// Fit every query point (flattened `(a, b)` pairs); NaN marks unsupported points.
    pub fn smooth(&self, queries: &[T]) -> Vec<T> {
        let estimates = self.smooth_points(queries);

        let unsupported = estimates.iter().filter(|v| v.is_nan()).count();
        tracing::debug!(
            queries = estimates.len(),
            samples = self.context.index.n_samples(),
            unsupported,
            kernel = self.context.kernel.name(),
            degree = self.context.degree.value(),
            "smoothing pass complete"
        );

        estimates
    }

    #[cfg(feature = "parallel")]
    fn smooth_points(&self, queries: &[T]) -> Vec<T> {
        if self.parallel {
            let context = &self.context;
            return queries
                .par_chunks_exact(2)
                .map_init(
                    || self.buffer(),
                    |buffer, q| context.fit([q[0], q[1]], buffer).unwrap_or_else(T::nan),
                )
                .collect();
        }
        self.smooth_points_sequential(queries)
    }

    #[cfg(not(feature = "parallel"))]
    fn smooth_points(&self, queries: &[T]) -> Vec<T> {
        self.smooth_points_sequential(queries)
    }

    fn smooth_points_sequential(&self, queries: &[T]) -> Vec<T> {
        let mut buffer = self.buffer();
        queries
            .chunks_exact(2)
            .map(|q| {
                self.context
                    .fit([q[0], q[1]], &mut buffer)
                    .unwrap_or_else(T::nan)
            })
            .collect()
    }

    // ========================================================================
    // Bandwidth Probe
    // ========================================================================

    /// Check that every query point has sufficient local support.
    pub fn probe(&self, queries: &[T]) -> BandwidthCheck {
        let check = match self.first_unsupported(queries) {
            Some(index) => BandwidthCheck::Unsupported { index },
            None => BandwidthCheck::Supported,
        };

        match check {
            BandwidthCheck::Supported => tracing::debug!(
                queries = queries.len() / 2,
                bandwidth_a = ?self.context.bandwidth[0],
                bandwidth_b = ?self.context.bandwidth[1],
                "bandwidth check passed"
            ),
            BandwidthCheck::Unsupported { index } => tracing::debug!(
                index,
                bandwidth_a = ?self.context.bandwidth[0],
                bandwidth_b = ?self.context.bandwidth[1],
                "bandwidth check failed: query point lacks local support"
            ),
        }

        check
    }

    #[cfg(feature = "parallel")]
    fn first_unsupported(&self, queries: &[T]) -> Option<usize> {
        if self.parallel {
            let context = &self.context;
            return queries
                .par_chunks_exact(2)
                .map_init(
                    || self.buffer(),
                    |buffer, q| context.is_supported([q[0], q[1]], buffer),
                )
                .position_first(|supported| !supported);
        }
        self.first_unsupported_sequential(queries)
    }

    #[cfg(not(feature = "parallel"))]
    fn first_unsupported(&self, queries: &[T]) -> Option<usize> {
        self.first_unsupported_sequential(queries)
    }

    fn first_unsupported_sequential(&self, queries: &[T]) -> Option<usize> {
        let mut buffer = self.buffer();
        queries
            .chunks_exact(2)
            .position(|q| !self.context.is_supported([q[0], q[1]], &mut buffer))
    }
}
