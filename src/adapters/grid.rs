//! Grid adapter: local linear smoothing onto a rectangular output grid.
//!
//! ## Purpose
//!
//! This module provides the execution adapter behind `mullwlsk`. It smooths
//! scattered `(x, y, z)` samples onto the Cartesian product of two output axes
//! with a local linear fit per grid intersection, and offers the matching
//! bandwidth probe.
//!
//! ## Design notes
//!
//! * **Processing**: Validates, indexes the samples once, then delegates one
//!   pass over all grid cells to the execution engine.
//! * **Frame**: Raw coordinates; bandwidth `[bw_x, bw_y]` applies to x and y.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * Output is row-major with `xgrid.len()` rows and `ygrid.len()` columns.
//! * Cells without sufficient support hold NaN.
//!
//! ## Non-goals
//!
//! * This adapter does not fit higher-order polynomials (use the rotated adapter).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::Debug;

// Internal dependencies
use crate::algorithms::regression::{PolynomialDegree, RegressionContext, SolverLinalg};
use crate::engine::executor::LwlsExecutor;
use crate::engine::output::{BandwidthCheck, SmoothedSurface};
use crate::engine::validator::Validator;
use crate::math::kernel::KernelFunction;
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::LwlsError;
use crate::primitives::window::SampleIndex;

// ============================================================================
// Grid Smoother Builder
// ============================================================================

/// Builder for the grid smoother.
#[derive(Debug, Clone)]
pub struct GridSmootherBuilder<T> {
    /// Bandwidth along x and y.
    pub bandwidth: Option<[T; 2]>,

    /// Kernel function.
    pub kernel: KernelFunction,

    /// Polynomial degree; the grid smoother only fits local linear surfaces.
    pub polynomial_degree: PolynomialDegree,

    /// Distribute grid cells across threads (`parallel` feature).
    pub parallel: bool,

    /// Deferred error from adapter conversion.
    pub deferred_error: Option<LwlsError>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T> Default for GridSmootherBuilder<T> {
    fn default() -> Self {
        Self {
            bandwidth: None,
            kernel: KernelFunction::default(),
            polynomial_degree: PolynomialDegree::Linear,
            parallel: cfg!(feature = "parallel"),
            deferred_error: None,
            duplicate_param: None,
        }
    }
}

impl<T: FloatLinalg + SolverLinalg + Debug + Send + Sync> GridSmootherBuilder<T> {
    /// Create a new grid builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Shared Setters
    // ========================================================================

    /// Set the bandwidth along x and y.
    pub fn bandwidth(mut self, bw_x: T, bw_y: T) -> Self {
        if self.bandwidth.is_some() {
            self.duplicate_param = Some("bandwidth");
        }
        self.bandwidth = Some([bw_x, bw_y]);
        self
    }

    /// Set the kernel function.
    pub fn kernel(mut self, kernel: KernelFunction) -> Self {
        self.kernel = kernel;
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
    pub fn build(self) -> Result<GridSmoother<T>, LwlsError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        // The grid design row is [1, u, v]
        if self.polynomial_degree != PolynomialDegree::Linear {
            return Err(LwlsError::InvalidPolynomialOrder(
                self.polynomial_degree.value(),
            ));
        }

        let bandwidth = self
            .bandwidth
            .ok_or(LwlsError::InvalidBandwidth(f64::NAN))?;
        Validator::validate_bandwidth(bandwidth)?;

        Ok(GridSmoother {
            bandwidth,
            kernel: self.kernel,
            parallel: self.parallel,
        })
    }
}

// ============================================================================
// Grid Smoother
// ============================================================================

/// Local linear smoother onto a rectangular grid.
#[derive(Debug, Clone)]
pub struct GridSmoother<T> {
    bandwidth: [T; 2],
    kernel: KernelFunction,
    parallel: bool,
}

impl<T: FloatLinalg + SolverLinalg + Debug + Send + Sync> GridSmoother<T> {
    /// Bandwidth along x and y.
    pub fn bandwidth(&self) -> [T; 2] {
        self.bandwidth
    }

    /// Kernel function.
    pub fn kernel(&self) -> KernelFunction {
        self.kernel
    }

    /// Smooth the samples onto the grid `xgrid` x `ygrid`.
    ///
    /// `t_pairs` holds the sample locations as flattened `(x, y)` pairs.
    pub fn fit(
        &self,
        t_pairs: &[T],
        values: &[T],
        weights: &[T],
        xgrid: &[T],
        ygrid: &[T],
    ) -> Result<SmoothedSurface<T>, LwlsError> {
        Self::validate(t_pairs, values, weights, xgrid, ygrid)?;

        let index = SampleIndex::new(t_pairs);
        let executor = self.executor(t_pairs, values, weights, &index);
        let estimates = executor.smooth(&grid_queries(xgrid, ygrid));

        Ok(SmoothedSurface {
            x_grid: xgrid.to_vec(),
            y_grid: ygrid.to_vec(),
            values: estimates,
        })
    }

    /// Check that every grid cell has sufficient local support, without
    /// computing the surface.
    ///
    /// An unsupported cell `(i, j)` is reported as index `i * ygrid.len() + j`.
    pub fn check_bandwidth(
        &self,
        t_pairs: &[T],
        values: &[T],
        weights: &[T],
        xgrid: &[T],
        ygrid: &[T],
    ) -> Result<BandwidthCheck, LwlsError> {
        Self::validate(t_pairs, values, weights, xgrid, ygrid)?;

        let index = SampleIndex::new(t_pairs);
        let executor = self.executor(t_pairs, values, weights, &index);
        Ok(executor.probe(&grid_queries(xgrid, ygrid)))
    }

    fn validate(
        t_pairs: &[T],
        values: &[T],
        weights: &[T],
        xgrid: &[T],
        ygrid: &[T],
    ) -> Result<(), LwlsError> {
        Validator::validate_samples(t_pairs, values, weights)?;
        Validator::validate_axis("xgrid", xgrid)?;
        Validator::validate_axis("ygrid", ygrid)
    }

    fn executor<'a>(
        &self,
        t_pairs: &'a [T],
        values: &'a [T],
        weights: &'a [T],
        index: &'a SampleIndex<T>,
    ) -> LwlsExecutor<'a, T> {
        let context = RegressionContext {
            coords: t_pairs,
            values,
            weights,
            index,
            kernel: self.kernel,
            degree: PolynomialDegree::Linear,
            bandwidth: self.bandwidth,
        };
        LwlsExecutor::new(context, self.parallel)
    }
}

/// Row-major Cartesian product of two axes as flattened `(x, y)` pairs.
fn grid_queries<T: Copy>(xgrid: &[T], ygrid: &[T]) -> Vec<T> {
    let mut queries = Vec::with_capacity(2 * xgrid.len() * ygrid.len());
    for &x in xgrid {
        for &y in ygrid {
            queries.push(x);
            queries.push(y);
        }
    }
    queries
}
