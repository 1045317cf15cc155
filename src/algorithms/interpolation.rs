//! Bilinear interpolation on a rectangular grid.
//!
//! ## Purpose
//!
//! This module resamples a surface known on a rectangular grid (for example a
//! smoothed covariance surface) at arbitrary query coordinates.
//!
//! ## Design notes
//!
//! * **Lookup**: Bracketing cells are found by binary search on each axis.
//! * **Clamping**: Queries on or beyond the grid bounds use the boundary cell
//!   with the interpolation weight clamped to [0, 1]; values are held, never
//!   extrapolated.
//! * **Order**: Interpolates along `y` at the two bracketing rows, then along `x`.
//!
//! ## Key concepts
//!
//! * **Layout**: Values are row-major, `z[i * ny + j]` is the value at `(x[i], y[j])`.
//! * **Degenerate axes**: A length-1 axis makes the surface constant along it.
//!
//! ## Invariants
//!
//! * Exact at grid nodes: querying `(x[i], y[j])` returns `z[i * ny + j]`.
//! * NaN cells (no-estimate markers) only affect queries whose cell touches them.
//!
//! ## Non-goals
//!
//! * This module does not provide higher-order interpolation.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::LwlsError;

// ============================================================================
// Grid Interpolator
// ============================================================================

/// Bilinear interpolator over a borrowed rectangular grid.
#[derive(Debug, Clone, Copy)]
pub struct GridInterpolator<'a, T> {
    x: &'a [T],
    y: &'a [T],
    z: &'a [T],
}

impl<'a, T: Float> GridInterpolator<'a, T> {
    /// Create an interpolator after validating axes and value layout.
    pub fn new(x: &'a [T], y: &'a [T], z: &'a [T]) -> Result<Self, LwlsError> {
        Validator::validate_axis("xin", x)?;
        Validator::validate_axis("yin", y)?;
        Validator::validate_matrix("zin", z, x.len(), y.len())?;
        Ok(Self { x, y, z })
    }

    /// Interpolate the surface at a single point.
    ///
    /// A NaN coordinate yields NaN.
    pub fn interpolate(&self, qx: T, qy: T) -> T {
        let (i0, i1, tx) = locate(self.x, qx);
        let (j0, j1, ty) = locate(self.y, qy);
        let ny = self.y.len();

        let lower = lerp(self.z[i0 * ny + j0], self.z[i0 * ny + j1], ty);
        let upper = lerp(self.z[i1 * ny + j0], self.z[i1 * ny + j1], ty);
        lerp(lower, upper, tx)
    }

    /// Interpolate the surface at paired query coordinates.
    pub fn interpolate_many(&self, xou: &[T], you: &[T]) -> Result<Vec<T>, LwlsError> {
        Validator::validate_query_vectors(xou, you)?;
        Ok(xou
            .iter()
            .zip(you.iter())
            .map(|(&qx, &qy)| self.interpolate(qx, qy))
            .collect())
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Find the bracketing interval of `q` on `axis` and the weight of the upper node.
#[inline]
fn locate<T: Float>(axis: &[T], q: T) -> (usize, usize, T) {
    if q.is_nan() {
        return (0, 0, T::nan());
    }
    let n = axis.len();
    if n == 1 {
        return (0, 0, T::zero());
    }
    if q <= axis[0] {
        return (0, 1, T::zero());
    }
    if q >= axis[n - 1] {
        return (n - 2, n - 1, T::one());
    }

    // axis[0] < q < axis[n - 1], so the partition point lies in [1, n - 1].
    let upper = axis.partition_point(|&a| a <= q);
    let lower = upper - 1;
    let t = (q - axis[lower]) / (axis[upper] - axis[lower]);
    (lower, upper, t)
}

/// Linear blend that returns the endpoints exactly at t = 0 and t = 1.
#[inline]
fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    if t <= T::zero() {
        a
    } else if t >= T::one() {
        b
    } else {
        a + (b - a) * t
    }
}
