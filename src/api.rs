//! High-level API for LWLS smoothing.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points. It implements a
//! fluent builder for configuring the local fit and choosing an execution
//! adapter (Grid or Rotated), plus the flat functions `interp2lin`, `mullwlsk`,
//! `rotatedmullwlsk` and their bandwidth checks.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Polymorphic**: Uses marker types to transition to specialized adapter builders.
//! * **Validated**: Parameters are validated when `.build()` is called on the adapter.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! * **Execution Adapters**: Grid and Rotated modes.
//! * **Deferred Errors**: String and integer inputs (`kernel_name`,
//!   `polynomial_order`) are parsed eagerly; a failure is carried through the
//!   builder and returned by `.build()`.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`LwlsBuilder`] via `Lwls::new()`.
//! 2. Chain configuration methods (`.bandwidth()`, `.kernel()`, etc.).
//! 3. Select an adapter via `.adapter(Adapter::Grid)` to get an execution builder.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::fmt::Debug;
use num_traits::Float;

// Internal dependencies
use crate::adapters::grid::GridSmootherBuilder;
use crate::adapters::rotated::RotatedSmootherBuilder;
use crate::algorithms::regression::SolverLinalg;
use crate::math::linalg::FloatLinalg;

// Publicly re-exported types
pub use crate::adapters::grid::GridSmoother;
pub use crate::adapters::rotated::RotatedSmoother;
pub use crate::algorithms::interpolation::GridInterpolator;
pub use crate::algorithms::regression::PolynomialDegree;
pub use crate::engine::output::{BandwidthCheck, SmoothedSurface};
pub use crate::math::kernel::KernelFunction;
pub use crate::primitives::errors::LwlsError;

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Grid, Rotated};
}

/// Fluent builder for configuring LWLS parameters and execution modes.
#[derive(Debug, Clone)]
pub struct LwlsBuilder<T> {
    /// Bandwidth along the two axes of the fitting frame.
    pub bandwidth: Option<[T; 2]>,

    /// Kernel function.
    pub kernel: Option<KernelFunction>,

    /// Polynomial degree for the local fit (Linear or Quadratic).
    pub polynomial_degree: Option<PolynomialDegree>,

    /// Parallel execution hint.
    pub parallel: Option<bool>,

    /// Error raised while parsing a configuration value, returned by `build()`.
    #[doc(hidden)]
    pub deferred_error: Option<LwlsError>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T> Default for LwlsBuilder<T> {
    fn default() -> Self {
        Self {
            bandwidth: None,
            kernel: None,
            polynomial_degree: None,
            parallel: None,
            deferred_error: None,
            duplicate_param: None,
        }
    }
}

impl<T: FloatLinalg + SolverLinalg + Debug + Send + Sync> LwlsBuilder<T> {
    /// Select an execution adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: LwlsAdapter<T>,
    {
        A::convert(self)
    }

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bandwidth along the two axes of the fitting frame.
    pub fn bandwidth(mut self, bw_a: T, bw_b: T) -> Self {
        if self.bandwidth.is_some() {
            self.duplicate_param = Some("bandwidth");
        }
        self.bandwidth = Some([bw_a, bw_b]);
        self
    }

    /// Set the kernel function.
    pub fn kernel(mut self, kernel: KernelFunction) -> Self {
        if self.kernel.is_some() {
            self.duplicate_param = Some("kernel");
        }
        self.kernel = Some(kernel);
        self
    }

    /// Set the kernel function by name (`"epan"`, `"rect"`, `"gauss"`, ...).
    pub fn kernel_name(mut self, name: &str) -> Self {
        match name.parse::<KernelFunction>() {
            Ok(kernel) => self.kernel(kernel),
            Err(err) => {
                if self.deferred_error.is_none() {
                    self.deferred_error = Some(err);
                }
                self
            }
        }
    }

    /// Set the polynomial degree.
    pub fn degree(mut self, degree: PolynomialDegree) -> Self {
        if self.polynomial_degree.is_some() {
            self.duplicate_param = Some("degree");
        }
        self.polynomial_degree = Some(degree);
        self
    }

    /// Set the polynomial degree from its order (1 or 2).
    pub fn polynomial_order(mut self, order: usize) -> Self {
        match PolynomialDegree::from_order(order) {
            Ok(degree) => self.degree(degree),
            Err(err) => {
                if self.deferred_error.is_none() {
                    self.deferred_error = Some(err);
                }
                self
            }
        }
    }

    /// Set the parallel execution hint (only honored with the `parallel` feature).
    pub fn parallel(mut self, parallel: bool) -> Self {
        if self.parallel.is_some() {
            self.duplicate_param = Some("parallel");
        }
        self.parallel = Some(parallel);
        self
    }
}

/// Trait for transitioning from a generic builder to an execution builder.
pub trait LwlsAdapter<T: FloatLinalg + SolverLinalg + Debug + Send + Sync> {
    /// The output execution builder.
    type Output;

    /// Convert a generic [`LwlsBuilder`] into a specialized execution builder.
    fn convert(builder: LwlsBuilder<T>) -> Self::Output;
}

/// Marker for smoothing onto a rectangular grid.
#[derive(Debug, Clone, Copy)]
pub struct Grid;

impl<T: FloatLinalg + SolverLinalg + Debug + Send + Sync> LwlsAdapter<T> for Grid {
    type Output = GridSmootherBuilder<T>;

    fn convert(builder: LwlsBuilder<T>) -> Self::Output {
        let mut result = GridSmootherBuilder::default();

        result.bandwidth = builder.bandwidth;
        if let Some(kernel) = builder.kernel {
            result.kernel = kernel;
        }
        if let Some(degree) = builder.polynomial_degree {
            result.polynomial_degree = degree;
        }
        if let Some(parallel) = builder.parallel {
            result.parallel = parallel;
        }

        result.deferred_error = builder.deferred_error;
        result.duplicate_param = builder.duplicate_param;
        result
    }
}

/// Marker for smoothing in 45-degree rotated coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Rotated;

impl<T: FloatLinalg + SolverLinalg + Debug + Send + Sync> LwlsAdapter<T> for Rotated {
    type Output = RotatedSmootherBuilder<T>;

    fn convert(builder: LwlsBuilder<T>) -> Self::Output {
        let mut result = RotatedSmootherBuilder::default();

        result.bandwidth = builder.bandwidth;
        if let Some(kernel) = builder.kernel {
            result.kernel = kernel;
        }
        if let Some(degree) = builder.polynomial_degree {
            result.polynomial_degree = degree;
        }
        if let Some(parallel) = builder.parallel {
            result.parallel = parallel;
        }

        result.deferred_error = builder.deferred_error;
        result.duplicate_param = builder.duplicate_param;
        result
    }
}

// ============================================================================
// Flat Entry Points
// ============================================================================

/// Bilinear interpolation of a gridded surface at paired query coordinates.
///
/// `zin` is row-major: `zin[i * yin.len() + j]` is the value at `(xin[i], yin[j])`.
/// Queries outside the grid are clamped to its boundary.
pub fn interp2lin<T: Float>(
    xin: &[T],
    yin: &[T],
    zin: &[T],
    xou: &[T],
    you: &[T],
) -> Result<Vec<T>, LwlsError> {
    GridInterpolator::new(xin, yin, zin)?.interpolate_many(xou, you)
}

/// Local linear smoothing of scattered samples onto the grid `xgrid` x `ygrid`.
///
/// Cells without sufficient local support hold NaN.
pub fn mullwlsk<T: FloatLinalg + SolverLinalg + Debug + Send + Sync>(
    bandwidth: [T; 2],
    kernel: &str,
    t_pairs: &[T],
    values: &[T],
    weights: &[T],
    xgrid: &[T],
    ygrid: &[T],
) -> Result<SmoothedSurface<T>, LwlsError> {
    LwlsBuilder::new()
        .bandwidth(bandwidth[0], bandwidth[1])
        .kernel_name(kernel)
        .adapter(Grid)
        .build()?
        .fit(t_pairs, values, weights, xgrid, ygrid)
}

/// Check whether `bandwidth` gives every cell of `xgrid` x `ygrid` local support.
pub fn mullwlsk_bandwidth_check<T: FloatLinalg + SolverLinalg + Debug + Send + Sync>(
    bandwidth: [T; 2],
    kernel: &str,
    t_pairs: &[T],
    values: &[T],
    weights: &[T],
    xgrid: &[T],
    ygrid: &[T],
) -> Result<BandwidthCheck, LwlsError> {
    LwlsBuilder::new()
        .bandwidth(bandwidth[0], bandwidth[1])
        .kernel_name(kernel)
        .adapter(Grid)
        .build()?
        .check_bandwidth(t_pairs, values, weights, xgrid, ygrid)
}

/// Local polynomial smoothing in 45-degree rotated coordinates at the query
/// points `xygrid` (flattened `(x, y)` pairs), with `npoly` of 1 or 2.
pub fn rotatedmullwlsk<T: FloatLinalg + SolverLinalg + Debug + Send + Sync>(
    bandwidth: [T; 2],
    kernel: &str,
    t_pairs: &[T],
    values: &[T],
    weights: &[T],
    xygrid: &[T],
    npoly: usize,
) -> Result<Vec<T>, LwlsError> {
    LwlsBuilder::new()
        .bandwidth(bandwidth[0], bandwidth[1])
        .kernel_name(kernel)
        .polynomial_order(npoly)
        .adapter(Rotated)
        .build()?
        .fit(t_pairs, values, weights, xygrid)
}

/// Check whether `bandwidth` gives every rotated query point local support.
pub fn rotatedmullwlsk_bandwidth_check<T: FloatLinalg + SolverLinalg + Debug + Send + Sync>(
    bandwidth: [T; 2],
    kernel: &str,
    t_pairs: &[T],
    values: &[T],
    weights: &[T],
    xygrid: &[T],
    npoly: usize,
) -> Result<BandwidthCheck, LwlsError> {
    LwlsBuilder::new()
        .bandwidth(bandwidth[0], bandwidth[1])
        .kernel_name(kernel)
        .polynomial_order(npoly)
        .adapter(Rotated)
        .build()?
        .check_bandwidth(t_pairs, values, weights, xygrid)
}
