//! Regression Types
//!
//! ## Purpose
//!
//! This module defines the local polynomial degree used by the smoothers and
//! the design-row (term) generation for two-dimensional offsets.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::LwlsError;

// ============================================================================
// Polynomial Degree
// ============================================================================

/// Polynomial degree for local regression fitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PolynomialDegree {
    /// Degree 1: local linear regression, design row [1, u, v] (default).
    #[default]
    Linear,

    /// Degree 2: local quadratic regression, design row [1, u, v, u^2, uv, v^2].
    Quadratic,
}

impl PolynomialDegree {
    /// Parse a numeric polynomial order (`npoly`).
    pub fn from_order(order: usize) -> Result<Self, LwlsError> {
        match order {
            1 => Ok(PolynomialDegree::Linear),
            2 => Ok(PolynomialDegree::Quadratic),
            _ => Err(LwlsError::InvalidPolynomialOrder(order)),
        }
    }

    /// Get the numeric degree value.
    #[inline]
    pub const fn value(&self) -> usize {
        match self {
            PolynomialDegree::Linear => 1,
            PolynomialDegree::Quadratic => 2,
        }
    }

    /// Number of coefficients of the two-dimensional design row.
    ///
    /// This is also the minimum number of distinct sample locations a window
    /// needs before a fit is attempted.
    #[inline]
    pub const fn n_coeffs(&self) -> usize {
        match self {
            PolynomialDegree::Linear => 3,
            PolynomialDegree::Quadratic => 6,
        }
    }

    /// Write the design row for offsets `(u, v)` into `terms`.
    ///
    /// Returns the number of terms written.
    #[inline]
    pub fn build_terms<T: Float>(&self, u: T, v: T, terms: &mut [T]) -> usize {
        terms[0] = T::one();
        terms[1] = u;
        terms[2] = v;
        if *self == PolynomialDegree::Linear {
            return 3;
        }

        terms[3] = u * u;
        terms[4] = u * v;
        terms[5] = v * v;
        6
    }
}
