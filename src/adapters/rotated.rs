//! Rotated adapter: LWLS in 45-degree rotated coordinates.
//!
//! ## Purpose
//!
//! This module provides the execution adapter behind `rotatedmullwlsk`. Samples
//! and query points are rotated so the window is aligned with the diagonal
//! `x = y`, which keeps estimates on and near the diagonal of a covariance
//! surface supported even when the samples on the diagonal itself are missing.
//!
//! ## Design notes
//!
//! * **Frame**: `u = (x + y) / sqrt(2)`, `v = (y - x) / sqrt(2)`; the bandwidth
//!   `[bw_u, bw_v]` applies along and across the diagonal.
//! * **Degree**: Local linear `[1, u, v]` or local quadratic
//!   `[1, u, v, u^2, uv, v^2]`.
//! * **Queries**: Arbitrary points; output order matches input order.
//!
//! ## Invariants
//!
//! * Output length equals the number of query points.
//! * Query points without sufficient support hold NaN.
//!
//! ## Non-goals
//!
//! * This adapter does not produce a rectangular surface (use the grid adapter).

// External dependencies
use core::fmt::Debug;

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::algorithms::regression::{PolynomialDegree, RegressionContext, SolverLinalg};
use crate::engine::executor::LwlsExecutor;
use crate::engine::output::BandwidthCheck;
use crate::engine::validator::Validator;
use crate::math::kernel::KernelFunction;
use crate::math::linalg::FloatLinalg;
use crate::math::rotation::rotate_pairs;
use crate::primitives::errors::LwlsError;
use crate::primitives::window::SampleIndex;

// ============================================================================
// Rotated Smoother Builder
// ============================================================================

/// Builder for the rotated smoother.
#[derive(Debug, Clone)]
pub struct RotatedSmootherBuilder<T> {
    /// Bandwidth along and across the diagonal.
    pub bandwidth: Option<[T; 2]>,

    /// Kernel function.
    pub kernel: KernelFunction,

    /// Degree of the local polynomial.
    pub polynomial_degree: PolynomialDegree,

    /// Distribute query points across threads (`parallel` feature).
    pub parallel: bool,

    /// Deferred error from adapter conversion.
    pub deferred_error: Option<LwlsError>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T> Default for RotatedSmootherBuilder<T> {
    fn default() -> Self {
        Self {
            bandwidth: None,
            kernel: KernelFunction::default(),
            polynomial_degree: PolynomialDegree::default(),
            parallel: cfg!(feature = "parallel"),
            deferred_error: None,
            duplicate_param: None,
        }
    }
}

impl<T: FloatLinalg + SolverLinalg + Debug + Send + Sync> RotatedSmootherBuilder<T> {
    /// Create a new rotated builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Shared Setters
    // ========================================================================

    /// Set the bandwidth along (`bw_u`) and across (`bw_v`) the diagonal.
    pub fn bandwidth(mut self, bw_u: T, bw_v: T) -> Self {
        if self.bandwidth.is_some() {
            self.duplicate_param = Some("bandwidth");
        }
        self.bandwidth = Some([bw_u, bw_v]);
        self
    }

    /// Set the kernel function.
    pub fn kernel(mut self, kernel: KernelFunction) -> Self {
        self.kernel = kernel;
        self
    }

    /// Set the polynomial degree.
    pub fn degree(mut self, degree: PolynomialDegree) -> Self {
        self.polynomial_degree = degree;
        self
    }

    /// Set the parallel execution hint.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Validate the configuration and build the smoother.
    pub fn build(self) -> Result<RotatedSmoother<T>, LwlsError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let bandwidth = self
            .bandwidth
            .ok_or(LwlsError::InvalidBandwidth(f64::NAN))?;
        Validator::validate_bandwidth(bandwidth)?;

        Ok(RotatedSmoother {
            bandwidth,
            kernel: self.kernel,
            degree: self.polynomial_degree,
            parallel: self.parallel,
        })
    }
}

// ============================================================================
// Rotated Smoother
// ============================================================================

/// LWLS smoother in rotated coordinates at arbitrary query points.
#[derive(Debug, Clone)]
pub struct RotatedSmoother<T> {
    bandwidth: [T; 2],
    kernel: KernelFunction,
    degree: PolynomialDegree,
    parallel: bool,
}

impl<T: FloatLinalg + SolverLinalg + Debug + Send + Sync> RotatedSmoother<T> {
    /// Bandwidth along and across the diagonal.
    pub fn bandwidth(&self) -> [T; 2] {
        self.bandwidth
    }

    /// Degree of the local polynomial.
    pub fn degree(&self) -> PolynomialDegree {
        self.degree
    }

    /// Estimate the surface at each query point of `xygrid` (flattened `(x, y)` pairs).
    pub fn fit(
        &self,
        t_pairs: &[T],
        values: &[T],
        weights: &[T],
        xygrid: &[T],
    ) -> Result<Vec<T>, LwlsError> {
        Self::validate(t_pairs, values, weights, xygrid)?;

        let rotated = rotate_pairs(t_pairs);
        let index = SampleIndex::new(&rotated);
        let executor = self.executor(&rotated, values, weights, &index);
        Ok(executor.smooth(&rotate_pairs(xygrid)))
    }

    /// Check that every query point has sufficient local support, without
    /// computing the estimates.
    pub fn check_bandwidth(
        &self,
        t_pairs: &[T],
        values: &[T],
        weights: &[T],
        xygrid: &[T],
    ) -> Result<BandwidthCheck, LwlsError> {
        Self::validate(t_pairs, values, weights, xygrid)?;

        let rotated = rotate_pairs(t_pairs);
        let index = SampleIndex::new(&rotated);
        let executor = self.executor(&rotated, values, weights, &index);
        Ok(executor.probe(&rotate_pairs(xygrid)))
    }

    fn validate(t_pairs: &[T], values: &[T], weights: &[T], xygrid: &[T]) -> Result<(), LwlsError> {
        Validator::validate_samples(t_pairs, values, weights)?;
        Validator::validate_query_pairs("xygrid", xygrid)
    }

    fn executor<'a>(
        &self,
        rotated: &'a [T],
        values: &'a [T],
        weights: &'a [T],
        index: &'a SampleIndex<T>,
    ) -> LwlsExecutor<'a, T> {
        let context = RegressionContext {
            coords: rotated,
            values,
            weights,
            index,
            kernel: self.kernel,
            degree: self.degree,
            bandwidth: self.bandwidth,
        };
        LwlsExecutor::new(context, self.parallel)
    }
}
