//! Regression Context and Fitting Logic
//!
//! ## Purpose
//!
//! This module defines the `RegressionContext`, which captures everything a
//! local fit needs (samples, kernel, degree, bandwidth) and implements the two
//! per-query operations built on it: the full fit and the support probe.
//!
//! ## Design notes
//!
//! * **Shared window logic**: `fit` and `is_supported` run the same window
//!   selection and normal-equation accumulation; only the final step differs.
//! * **Normalized design**: Offsets are divided by the bandwidth before they
//!   enter the design row, so the conditioning test is unit-free.
//! * **Sentinel, not error**: An unsupported query returns `None`.
//!
//! ## Key concepts
//!
//! * **Window**: samples with |u| and |v| within the kernel support radius
//!   (plus `WINDOW_EDGE_TOLERANCE`), where u, v are the normalized offsets.
//! * **Support**: at least `n_coeffs` distinct sample locations with positive
//!   weight, and a normal matrix whose reciprocal condition number is at least
//!   `MIN_RECIPROCAL_CONDITION`.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::kernel::KernelFunction;
use crate::math::linalg::FloatLinalg;
use crate::primitives::buffer::FittingBuffer;
use crate::primitives::window::SampleIndex;

// Module dependencies
use super::accumulators::{SolverLinalg, accumulate_normal_equations};
use super::types::PolynomialDegree;

// ============================================================================
// Tunable Constants
// ============================================================================

/// Smallest reciprocal condition number of X'WX accepted for a local fit.
///
/// The effective threshold is never below 16 machine epsilons of the working
/// precision, so `f32` fits use a correspondingly looser bound.
pub const MIN_RECIPROCAL_CONDITION: f64 = 1e-10;

/// Slack, in normalized units, for samples sitting exactly on the window edge.
pub const WINDOW_EDGE_TOLERANCE: f64 = 1e-9;

/// Effective conditioning threshold for precision `T`.
#[inline]
pub fn min_reciprocal_condition<T: Float>() -> T {
    let configured = T::from(MIN_RECIPROCAL_CONDITION).unwrap_or_else(T::epsilon);
    let floor = T::epsilon() * T::from(16.0).unwrap_or_else(T::one);
    configured.max(floor)
}

// ============================================================================
// Regression Context
// ============================================================================

/// Context containing all data needed to fit any query point of one pass.
#[derive(Debug, Clone, Copy)]
pub struct RegressionContext<'a, T> {
    /// Sample coordinates in the smoothing frame (flattened row-major pairs).
    pub coords: &'a [T],
    /// Observed values.
    pub values: &'a [T],
    /// Observation weights.
    pub weights: &'a [T],
    /// Samples sorted by first frame coordinate.
    pub index: &'a SampleIndex<T>,
    /// Kernel function.
    pub kernel: KernelFunction,
    /// Degree of the local polynomial.
    pub degree: PolynomialDegree,
    /// Bandwidth along each frame axis.
    pub bandwidth: [T; 2],
}

impl<'a, T: FloatLinalg + SolverLinalg> RegressionContext<'a, T> {
    /// Returns the local estimate at `query`, or `None` if the window cannot
    /// support the fit.
    pub fn fit(&self, query: [T; 2], buffer: &mut FittingBuffer<T>) -> Option<T> {
        if !self.prepare(query, buffer) {
            return None;
        }

        let n_coeffs = self.degree.n_coeffs();
        let beta = T::solve_normal(&buffer.xtw_x, &buffer.xtw_y, n_coeffs)?;
        let estimate = beta[0];
        if estimate.is_finite() {
            Some(estimate)
        } else {
            None
        }
    }

    /// Returns `true` if the window around `query` supports a fit, without
    /// solving the system.
    ///
    /// Support depends only on sample locations and weights. A supported
    /// query can still yield `None` from [`fit`](Self::fit) when the values
    /// are large enough for X'Wy to overflow.
    pub fn is_supported(&self, query: [T; 2], buffer: &mut FittingBuffer<T>) -> bool {
        self.prepare(query, buffer)
    }

    /// Load the window, accumulate the normal equations, and test conditioning.
    fn prepare(&self, query: [T; 2], buffer: &mut FittingBuffer<T>) -> bool {
        if !self.load_window(query, buffer) {
            return false;
        }
        self.accumulate(buffer);

        let n_coeffs = self.degree.n_coeffs();
        let rcond = T::reciprocal_condition(&buffer.xtw_x, n_coeffs);
        rcond >= min_reciprocal_condition::<T>()
    }

    /// Collect the weighted window samples around `query` into `buffer`.
    ///
    /// Returns `true` when at least `n_coeffs` distinct sample locations
    /// carry positive weight.
    pub fn load_window(&self, query: [T; 2], buffer: &mut FittingBuffer<T>) -> bool {
        buffer.clear();

        let radius = T::from(self.kernel.support_radius()).unwrap_or_else(T::one);
        let reach = radius + T::from(WINDOW_EDGE_TOLERANCE).unwrap_or_else(T::zero);
        let [bw_a, bw_b] = self.bandwidth;
        let needed = self.degree.n_coeffs();
        let mut n_distinct = 0;

        let candidates = self.index.range(query[0], reach * bw_a);
        buffer.reserve_window(candidates.len());

        for &i in candidates {
            let a = self.coords[2 * i];
            let b = self.coords[2 * i + 1];
            let u = (a - query[0]) / bw_a;
            let v = (b - query[1]) / bw_b;
            if u.abs() > reach || v.abs() > reach {
                continue;
            }

            // Edge samples are evaluated at the support boundary.
            let u = u.max(-radius).min(radius);
            let v = v.max(-radius).min(radius);
            let w = self.kernel.evaluate_2d(u, v) * self.weights[i];
            if w <= T::zero() {
                continue;
            }

            buffer.offsets.push(u);
            buffer.offsets.push(v);
            buffer.values.push(self.values[i]);
            buffer.weights.push(w);

            if n_distinct < needed {
                let seen = buffer
                    .distinct
                    .chunks_exact(2)
                    .any(|p| p[0] == a && p[1] == b);
                if !seen {
                    buffer.distinct.push(a);
                    buffer.distinct.push(b);
                    n_distinct += 1;
                }
            }
        }

        n_distinct >= needed
    }

    /// Accumulate X'WX and X'Wy of the loaded window into `buffer`.
    fn accumulate(&self, buffer: &mut FittingBuffer<T>) {
        let n_coeffs = self.degree.n_coeffs();
        buffer.xtw_x.clear();
        buffer.xtw_x.resize(n_coeffs * n_coeffs, T::zero());
        buffer.xtw_y.clear();
        buffer.xtw_y.resize(n_coeffs, T::zero());

        match self.degree {
            PolynomialDegree::Linear => {
                let mut xtwx = [T::zero(); 9];
                let mut xtwy = [T::zero(); 3];
                T::accumulate_linear(
                    &buffer.offsets,
                    &buffer.values,
                    &buffer.weights,
                    &mut xtwx,
                    &mut xtwy,
                );
                buffer.xtw_x.copy_from_slice(&xtwx);
                buffer.xtw_y.copy_from_slice(&xtwy);
            }
            PolynomialDegree::Quadratic => accumulate_normal_equations(
                &buffer.offsets,
                &buffer.values,
                &buffer.weights,
                self.degree,
                &mut buffer.xtw_x,
                &mut buffer.xtw_y,
            ),
        }
    }
}
