//! Input validation for LWLS configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for smoother configuration and
//! input data. Every structural problem is reported here, before any local fit
//! runs, so a call either fails as a whole or produces a complete result.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Shapes**: Coordinates are flattened `(x, y)` pairs, so their length is
//!   twice the number of samples.
//! * **Axes**: Grid axes must be non-empty and strictly increasing.
//! * **Finite Checks**: Coordinates, values, weights, and queries must be finite.
//!   Interpolation values may hold NaN no-estimate markers.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not perform the smoothing itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::LwlsError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for LWLS configuration and input data.
///
/// Provides static methods for validating parameters and input data. All
/// methods fail fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Sample Validation
    // ========================================================================

    /// Validate the sample arrays shared by both smoothers.
    pub fn validate_samples<T: Float>(
        t_pairs: &[T],
        values: &[T],
        weights: &[T],
    ) -> Result<(), LwlsError> {
        // Check 1: Non-empty arrays
        if values.is_empty() || t_pairs.is_empty() {
            return Err(LwlsError::EmptyInput);
        }

        // Check 2: Matching shapes
        let n = values.len();
        if t_pairs.len() != 2 * n {
            return Err(LwlsError::DimensionMismatch {
                what: "t_pairs",
                expected: 2 * n,
                got: t_pairs.len(),
            });
        }
        if weights.len() != n {
            return Err(LwlsError::DimensionMismatch {
                what: "weights",
                expected: n,
                got: weights.len(),
            });
        }

        // Check 3: Finite values
        Self::validate_finite("t_pairs", t_pairs)?;
        Self::validate_finite("values", values)?;
        Self::validate_finite("weights", weights)?;

        // Check 4: Nonnegative weights
        for (index, &w) in weights.iter().enumerate() {
            if w < T::zero() {
                return Err(LwlsError::NegativeWeight {
                    index,
                    value: w.to_f64().unwrap_or(f64::NAN),
                });
            }
        }

        Ok(())
    }

    /// Validate that every element of `data` is finite.
    pub fn validate_finite<T: Float>(name: &str, data: &[T]) -> Result<(), LwlsError> {
        for (i, &val) in data.iter().enumerate() {
            if !val.is_finite() {
                return Err(LwlsError::InvalidNumericValue(format!(
                    "{}[{}]={}",
                    name,
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    // ========================================================================
    // Grid Validation
    // ========================================================================

    /// Validate a grid axis: non-empty, finite, strictly increasing.
    pub fn validate_axis<T: Float>(name: &str, axis: &[T]) -> Result<(), LwlsError> {
        if axis.is_empty() {
            return Err(LwlsError::InvalidGrid(format!("{} is empty", name)));
        }
        Self::validate_finite(name, axis)?;
        for (i, pair) in axis.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(LwlsError::InvalidGrid(format!(
                    "{} is not strictly increasing at index {}",
                    name,
                    i + 1
                )));
            }
        }
        Ok(())
    }

    /// Validate that a flattened row-major matrix has `rows * cols` elements.
    pub fn validate_matrix<T>(
        name: &'static str,
        data: &[T],
        rows: usize,
        cols: usize,
    ) -> Result<(), LwlsError> {
        if data.len() != rows * cols {
            return Err(LwlsError::DimensionMismatch {
                what: name,
                expected: rows * cols,
                got: data.len(),
            });
        }
        Ok(())
    }

    /// Validate a flattened set of `(x, y)` query points.
    pub fn validate_query_pairs<T: Float>(
        name: &'static str,
        pairs: &[T],
    ) -> Result<(), LwlsError> {
        if pairs.is_empty() {
            return Err(LwlsError::EmptyInput);
        }
        if pairs.len() % 2 != 0 {
            return Err(LwlsError::DimensionMismatch {
                what: name,
                expected: pairs.len() + 1,
                got: pairs.len(),
            });
        }
        Self::validate_finite(name, pairs)
    }

    /// Validate paired query coordinate vectors for interpolation.
    pub fn validate_query_vectors<T: Float>(xou: &[T], you: &[T]) -> Result<(), LwlsError> {
        if xou.len() != you.len() {
            return Err(LwlsError::DimensionMismatch {
                what: "you",
                expected: xou.len(),
                got: you.len(),
            });
        }
        Self::validate_finite("xou", xou)?;
        Self::validate_finite("you", you)
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the per-axis bandwidth.
    pub fn validate_bandwidth<T: Float>(bandwidth: [T; 2]) -> Result<(), LwlsError> {
        for bw in bandwidth {
            if !bw.is_finite() || bw <= T::zero() {
                return Err(LwlsError::InvalidBandwidth(
                    bw.to_f64().unwrap_or(f64::NAN),
                ));
            }
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), LwlsError> {
        if let Some(param) = duplicate_param {
            return Err(LwlsError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
