//! 45-degree coordinate rotation.
//!
//! ## Purpose
//!
//! Covariance surfaces are symmetric about the diagonal `x = y`, and the
//! samples closest to it are often missing or excluded. Smoothing in rotated
//! coordinates aligns the window with the diagonal:
//!
//! ```text
//! u = (x + y) / sqrt(2)    (along the diagonal)
//! v = (y - x) / sqrt(2)    (across the diagonal)
//! ```
//!
//! ## Invariants
//!
//! * The rotation is orthonormal: distances are preserved.
//! * Points on the diagonal map to `v = 0`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::f64::consts::FRAC_1_SQRT_2;
use num_traits::Float;

/// Rotate a single point by 45 degrees.
#[inline]
pub fn rotate<T: Float>(x: T, y: T) -> (T, T) {
    let c = T::from(FRAC_1_SQRT_2).unwrap();
    ((x + y) * c, (y - x) * c)
}

/// Rotate flattened row-major `(x, y)` pairs.
pub fn rotate_pairs<T: Float>(pairs: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(pairs.len());
    for p in pairs.chunks_exact(2) {
        let (u, v) = rotate(p[0], p[1]);
        out.push(u);
        out.push(v);
    }
    out
}
