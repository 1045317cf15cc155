//! Error types for LWLS smoothing and grid interpolation.
//!
//! ## Purpose
//!
//! This module defines the structural and configuration failures that can occur
//! before any smoothing or interpolation work starts: inconsistent array shapes,
//! unknown kernel names, invalid bandwidths, and unsupported polynomial orders.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., expected vs. actual lengths).
//! * **Whole-call**: Every variant aborts the whole call; no partial results exist.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Shape validation**: Sample arrays, grids, and query sets must agree in length.
//! 2. **Configuration validation**: Kernel name, bandwidth, and polynomial order.
//! 3. **Numeric validation**: Non-finite coordinates and negative weights.
//!
//! ## Invariants
//!
//! * Insufficient local data is never an error; it is reported per cell as NaN.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for LWLS smoothing and interpolation.
#[derive(Debug, Clone, PartialEq)]
pub enum LwlsError {
    /// Sample or query arrays are empty.
    EmptyInput,

    /// Two arrays that must agree in shape do not.
    DimensionMismatch {
        /// Name of the offending array.
        what: &'static str,
        /// Expected number of elements.
        expected: usize,
        /// Number of elements provided.
        got: usize,
    },

    /// Kernel name is not part of the supported set.
    UnknownKernel(String),

    /// Bandwidth must be strictly positive and finite.
    InvalidBandwidth(f64),

    /// Local polynomial order must be 1 (linear) or 2 (quadratic).
    InvalidPolynomialOrder(usize),

    /// A grid axis is empty or not strictly increasing.
    InvalidGrid(String),

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// Observation weights must be nonnegative.
    NegativeWeight {
        /// Position of the offending weight.
        index: usize,
        /// The weight provided.
        value: f64,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for LwlsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input arrays are empty"),
            Self::DimensionMismatch {
                what,
                expected,
                got,
            } => {
                write!(
                    f,
                    "Dimension mismatch: {what} has {got} elements, expected {expected}"
                )
            }
            Self::UnknownKernel(name) => write!(
                f,
                "Unknown kernel: '{name}' (expected one of epan, rect, gauss, gausvar, quar, tria)"
            ),
            Self::InvalidBandwidth(bw) => {
                write!(f, "Invalid bandwidth: {bw} (must be > 0 and finite)")
            }
            Self::InvalidPolynomialOrder(order) => {
                write!(f, "Invalid polynomial order: {order} (must be 1 or 2)")
            }
            Self::InvalidGrid(msg) => write!(f, "Invalid grid: {msg}"),
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::NegativeWeight { index, value } => {
                write!(f, "Negative weight: weights[{index}]={value} (must be >= 0)")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for LwlsError {}
