//! Output types for LWLS smoothing.
//!
//! ## Purpose
//!
//! This module defines the `SmoothedSurface` returned by the grid smoother and
//! the `BandwidthCheck` returned by the validity probes of both smoothers.
//!
//! ## Design notes
//!
//! * **Layout**: Surface values are row-major, row `i` belongs to `x_grid[i]`.
//! * **Sentinel**: Cells the data cannot support hold NaN.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * `values.len() == x_grid.len() * y_grid.len()`.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations beyond resampling through the
//!   interpolator.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::interpolation::GridInterpolator;
use crate::primitives::errors::LwlsError;

// ============================================================================
// Smoothed Surface
// ============================================================================

/// Smoothed estimates on a rectangular output grid.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothedSurface<T> {
    /// Output grid along x (rows).
    pub x_grid: Vec<T>,

    /// Output grid along y (columns).
    pub y_grid: Vec<T>,

    /// Row-major estimates; NaN marks cells without sufficient local support.
    pub values: Vec<T>,
}

impl<T: Float> SmoothedSurface<T> {
    /// Number of rows (length of the x grid).
    #[inline]
    pub fn rows(&self) -> usize {
        self.x_grid.len()
    }

    /// Number of columns (length of the y grid).
    #[inline]
    pub fn cols(&self) -> usize {
        self.y_grid.len()
    }

    /// Estimate at grid cell `(i, j)`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        self.values[i * self.cols() + j]
    }

    /// Estimates of row `i`.
    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        let cols = self.cols();
        &self.values[i * cols..(i + 1) * cols]
    }

    /// Number of cells holding the no-estimate marker.
    pub fn unsupported_cells(&self) -> usize {
        self.values.iter().filter(|v| v.is_nan()).count()
    }

    /// Returns `true` if every cell holds an estimate.
    pub fn is_fully_supported(&self) -> bool {
        self.values.iter().all(|v| !v.is_nan())
    }

    /// Resample the surface at paired query coordinates by bilinear interpolation.
    ///
    /// The grid and value layout are checked first, since the fields are public.
    pub fn resample(&self, xou: &[T], you: &[T]) -> core::result::Result<Vec<T>, LwlsError> {
        GridInterpolator::new(&self.x_grid, &self.y_grid, &self.values)?.interpolate_many(xou, you)
    }
}

impl<T: Float + Display + Debug> Display for SmoothedSurface<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Grid:        {} x {}", self.rows(), self.cols())?;
        writeln!(f, "  Unsupported: {}", self.unsupported_cells())?;
        writeln!(f)?;

        writeln!(f, "Smoothed Surface:")?;
        write!(f, "{:>10}", "x \\ y")?;
        for y in &self.y_grid {
            write!(f, " {:>10.4}", y)?;
        }
        writeln!(f)?;

        for (i, x) in self.x_grid.iter().enumerate() {
            write!(f, "{:>10.4}", x)?;
            for v in self.row(i) {
                if v.is_nan() {
                    write!(f, " {:>10}", "-")?;
                } else {
                    write!(f, " {:>10.5}", v)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ============================================================================
// Bandwidth Check
// ============================================================================

/// Outcome of a bandwidth validity probe.
///
/// The check looks at sample locations and weights only and never solves a
/// local system. `Supported` therefore guarantees a NaN-free fit for any
/// values whose weighted sums stay finite; values near the floating-point
/// limit can still overflow to NaN cells in the fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandwidthCheck {
    /// Every query point has sufficient local support.
    Supported,

    /// The probe stopped at the first query point without support.
    Unsupported {
        /// Position of that query point (row-major cell index for grids).
        index: usize,
    },
}

impl BandwidthCheck {
    /// Returns `true` if the bandwidth supports every query point.
    #[inline]
    pub fn is_supported(&self) -> bool {
        matches!(self, BandwidthCheck::Supported)
    }

    /// First unsupported query point, if any.
    #[inline]
    pub fn first_unsupported(&self) -> Option<usize> {
        match self {
            BandwidthCheck::Supported => None,
            BandwidthCheck::Unsupported { index } => Some(*index),
        }
    }
}
