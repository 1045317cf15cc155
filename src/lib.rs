//! # LWLS: Two-dimensional Local Weighted Least Squares for Rust
//!
//! Kernel-weighted local polynomial smoothing of scattered two-dimensional data
//! onto output grids, with bilinear grid interpolation for resampling the result.
//!
//! ## What is LWLS?
//!
//! Local weighted least squares estimates a surface at a query point by fitting
//! a low-order polynomial to the samples inside a kernel window around the
//! point. Samples closer to the query get larger kernel weights, and each sample
//! can carry its own observation weight. The fitted intercept is the estimate.
//!
//! **Typical application:** smoothing the raw covariance pairs of functional
//! data onto a grid before an eigen-decomposition. The rotated smoother aligns
//! the window with the diagonal `x = y`, so the diagonal of the covariance
//! surface can be estimated even when the raw pairs exclude it.
//!
//! **How it works:**
//!
//! 1. For each query point, select the samples within one bandwidth on each axis.
//! 2. Weight them by the product kernel `K(u) * K(v)` times their observation weight.
//! 3. Fit `[1, u, v]` (or `[1, u, v, u^2, uv, v^2]`) by weighted least squares.
//! 4. Report the intercept, or NaN if the window cannot support the fit.
//!
//! ## Quick Start
//!
//! ```rust
//! use lwls_rs::prelude::*;
//!
//! // Samples of z = 1 + x + 2y on a 6 x 6 grid
//! let mut t_pairs = Vec::new();
//! let mut values = Vec::new();
//! for i in 0..6 {
//!     for j in 0..6 {
//!         let (x, y) = (i as f64 * 0.2, j as f64 * 0.2);
//!         t_pairs.extend_from_slice(&[x, y]);
//!         values.push(1.0 + x + 2.0 * y);
//!     }
//! }
//! let weights = vec![1.0; values.len()];
//!
//! let model = Lwls::new()
//!     .bandwidth(0.3, 0.3)
//!     .kernel(Epanechnikov)
//!     .adapter(Grid)
//!     .build()?;
//!
//! let grid = [0.2, 0.5, 0.8];
//! let surface = model.fit(&t_pairs, &values, &weights, &grid, &grid)?;
//!
//! assert!(surface.is_fully_supported());
//! assert!((surface.get(1, 1) - 2.5).abs() < 1e-9);
//! println!("{}", surface);
//! # Result::<(), LwlsError>::Ok(())
//! ```
//!
//! ## Flat Functions
//!
//! The same operations are available as plain functions taking kernel names:
//!
//! ```rust
//! use lwls_rs::prelude::*;
//!
//! let z = interp2lin(
//!     &[0.0, 1.0],
//!     &[0.0, 1.0],
//!     &[0.0, 1.0, 1.0, 2.0],
//!     &[0.5],
//!     &[0.5],
//! )?;
//! assert_eq!(z, vec![1.0]);
//! # Result::<(), LwlsError>::Ok(())
//! ```
//!
//! * [`interp2lin`](prelude::interp2lin): bilinear interpolation, clamped at the grid boundary.
//! * [`mullwlsk`](prelude::mullwlsk): local linear smoothing onto `xgrid` x `ygrid`.
//! * [`rotatedmullwlsk`](prelude::rotatedmullwlsk): local linear or quadratic
//!   smoothing in rotated coordinates at arbitrary points.
//! * `*_bandwidth_check`: report whether a bandwidth supports every query point,
//!   without computing any estimate.
//!
//! ## Kernels
//!
//! | Name      | Aliases        | Variant        | Support |
//! |-----------|----------------|----------------|---------|
//! | `epan`    | `epanechnikov` | `Epanechnikov` | 1       |
//! | `rect`    | `uniform`      | `Uniform`      | 1       |
//! | `gauss`   | `gaussian`     | `Gaussian`     | 6       |
//! | `gausvar` |                | `GaussianVar`  | sqrt(5) |
//! | `quar`    | `quartic`      | `Quartic`      | 1       |
//! | `tria`    | `triangular`   | `Triangular`   | 1       |
//!
//! ## Unsupported Points
//!
//! A query point without enough local data (fewer distinct sample locations
//! than coefficients, or an ill-conditioned local system) is not an error. Its
//! estimate is NaN and the rest of the output is unaffected. Use the bandwidth
//! checks to find the first such point up front.
//!
//! ## Features
//!
//! * `std` (default): standard library support. Disable for `no_std` + `alloc`.
//! * `parallel`: distribute query points across a rayon thread pool.
//! * `dev`: expose internal modules for white-box testing.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the error type, the sorted sample index used for window
// prefiltering, and reusable fitting buffers.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains kernel functions, the 45-degree rotation, and the dense
// linear algebra behind the local normal equations.
mod math;

// Layer 3: Algorithms - core LWLS algorithms.
//
// Contains local regression (via `RegressionContext`) and bilinear
// grid interpolation.
mod algorithms;

// Layer 4: Engine - orchestration and execution control.
//
// Contains input validation, the per-query smoothing and probe passes,
// and result types.
mod engine;

// Layer 5: Adapters - execution mode adapters.
//
// Contains the grid smoother and the rotated-coordinate smoother.
mod adapters;

// High-level fluent API for LWLS smoothing.
//
// Provides the `Lwls` builder and the flat entry points.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard LWLS prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use lwls_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        Adapter::{Grid, Rotated},
        BandwidthCheck, GridInterpolator, GridSmoother, KernelFunction,
        KernelFunction::{Epanechnikov, Gaussian, GaussianVar, Quartic, Triangular, Uniform},
        LwlsBuilder as Lwls, LwlsError,
        PolynomialDegree::{Linear, Quadratic},
        RotatedSmoother, SmoothedSurface, interp2lin, mullwlsk, mullwlsk_bandwidth_check,
        rotatedmullwlsk, rotatedmullwlsk_bandwidth_check,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal adapters.
    pub mod adapters {
        pub use crate::adapters::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
