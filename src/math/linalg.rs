//! Linear algebra backend for local normal equations.
//!
//! ## Purpose
//!
//! This module provides a trait-based abstraction over the two dense operations
//! a local fit needs: estimating the conditioning of the normal matrix X'WX and
//! solving X'WX * beta = X'Wy. Both delegate to nalgebra.
//!
//! ## Design notes
//!
//! * Conditioning is measured as the ratio of the smallest to the largest
//!   singular value (reciprocal condition number).
//! * Uses QR decomposition (Householder reflections) for the solve.
//! * Generic over `FloatLinalg` types (f32 and f64) which delegate to nalgebra.
//!
//! ## Invariants
//!
//! * Matrices are passed row-major as `n * n` slices; X'WX is symmetric so the
//!   layout only matters for callers that inspect the buffers.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// FloatLinalg Trait
// ============================================================================

/// Helper trait to bridge generic Float types to the nalgebra backend.
pub trait FloatLinalg: Float + 'static {
    /// Reciprocal condition number of the `n x n` matrix `a` (0 when singular).
    fn reciprocal_condition(a: &[Self], n: usize) -> Self;
    /// Solve normal equations X'WX * beta = X'Wy.
    fn solve_normal(a: &[Self], b: &[Self], n: usize) -> Option<Vec<Self>>;
}

impl FloatLinalg for f64 {
    #[inline]
    fn reciprocal_condition(a: &[Self], n: usize) -> Self {
        nalgebra_backend::reciprocal_condition(a, n)
    }
    #[inline]
    fn solve_normal(a: &[Self], b: &[Self], n: usize) -> Option<Vec<Self>> {
        nalgebra_backend::solve_normal_equations(a, b, n)
    }
}

impl FloatLinalg for f32 {
    #[inline]
    fn reciprocal_condition(a: &[Self], n: usize) -> Self {
        nalgebra_backend::reciprocal_condition(a, n)
    }
    #[inline]
    fn solve_normal(a: &[Self], b: &[Self], n: usize) -> Option<Vec<Self>> {
        nalgebra_backend::solve_normal_equations(a, b, n)
    }
}

// ============================================================================
// Nalgebra Backend Implementation
// ============================================================================

/// Nalgebra-based linear algebra operations.
pub mod nalgebra_backend {
    use super::*;
    use nalgebra::{DMatrix, DVector, RealField};

    /// Ratio of the smallest to the largest singular value of `a`.
    pub fn reciprocal_condition<R: RealField + Copy>(a: &[R], n: usize) -> R {
        let matrix = DMatrix::from_row_slice(n, n, a);
        let singular = matrix.singular_values();

        let mut largest = R::zero();
        let mut smallest: Option<R> = None;
        for &s in singular.iter() {
            if s > largest {
                largest = s;
            }
            smallest = match smallest {
                Some(current) if current <= s => Some(current),
                _ => Some(s),
            };
        }

        match smallest {
            Some(s) if largest > R::zero() => s / largest,
            _ => R::zero(),
        }
    }

    /// Solve X'WX * beta = X'Wy by QR decomposition.
    pub fn solve_normal_equations<R: RealField + Copy>(
        xtw_x: &[R],
        xtw_y: &[R],
        n_coeffs: usize,
    ) -> Option<Vec<R>> {
        let matrix = DMatrix::from_row_slice(n_coeffs, n_coeffs, xtw_x);
        let rhs = DVector::from_column_slice(xtw_y);

        matrix
            .qr()
            .solve(&rhs)
            .map(|solution| solution.as_slice().to_vec())
    }
}
