//! Normal-Equation Accumulators
//!
//! ## Purpose
//!
//! This module builds the weighted normal equations X'WX and X'Wy of a local
//! window. The local linear case (three coefficients) has a specialized scalar
//! accumulator and an `f64x2` SIMD accumulator; the quadratic case goes through
//! the generic term-based accumulator.
//!
//! ## Design notes
//!
//! * Offsets are already centered on the query point and normalized by the
//!   bandwidth, so the accumulators never see the query coordinates.
//! * Matrices are written row-major and are fully symmetric on return.

// External dependencies
use num_traits::Float;
use wide::f64x2;

// Module dependencies
use super::types::PolynomialDegree;

// ============================================================================
// Specialized Solvers Trait
// ============================================================================

/// Trait for the specialized local linear accumulation.
pub trait SolverLinalg: Float + 'static {
    /// Accumulate Normal Equations for the 2D Linear Case.
    fn accumulate_linear(
        offsets: &[Self],
        values: &[Self],
        weights: &[Self],
        xtwx: &mut [Self; 9],
        xtwy: &mut [Self; 3],
    );
}

impl SolverLinalg for f64 {
    #[inline]
    fn accumulate_linear(
        offsets: &[f64],
        values: &[f64],
        weights: &[f64],
        xtwx: &mut [f64; 9],
        xtwy: &mut [f64; 3],
    ) {
        accumulate_linear_simd(offsets, values, weights, xtwx, xtwy)
    }
}

impl SolverLinalg for f32 {
    #[inline]
    fn accumulate_linear(
        offsets: &[f32],
        values: &[f32],
        weights: &[f32],
        xtwx: &mut [f32; 9],
        xtwy: &mut [f32; 3],
    ) {
        accumulate_linear_scalar(offsets, values, weights, xtwx, xtwy)
    }
}

// ============================================================================
// Specialized Accumulation Functions
// ============================================================================

/// Store the nine running sums of the linear case into the output arrays.
#[allow(clippy::too_many_arguments)]
#[inline]
fn store_linear<T: Float>(
    s_w: T,
    s_u: T,
    s_v: T,
    s_uu: T,
    s_uv: T,
    s_vv: T,
    s_wz: T,
    s_uz: T,
    s_vz: T,
    xtwx: &mut [T; 9],
    xtwy: &mut [T; 3],
) {
    *xtwx = [s_w, s_u, s_v, s_u, s_uu, s_uv, s_v, s_uv, s_vv];
    *xtwy = [s_wz, s_uz, s_vz];
}

/// Optimized accumulation for the 2D Linear Case (Scalar).
pub fn accumulate_linear_scalar<T: Float>(
    offsets: &[T],
    values: &[T],
    weights: &[T],
    xtwx: &mut [T; 9],
    xtwy: &mut [T; 3],
) {
    let mut s_w = T::zero();
    let mut s_u = T::zero();
    let mut s_v = T::zero();
    let mut s_uu = T::zero();
    let mut s_uv = T::zero();
    let mut s_vv = T::zero();
    let mut s_wz = T::zero();
    let mut s_uz = T::zero();
    let mut s_vz = T::zero();

    for (k, (&w, &z)) in weights.iter().zip(values.iter()).enumerate() {
        let u = offsets[2 * k];
        let v = offsets[2 * k + 1];
        let wu = w * u;
        let wv = w * v;
        s_w = s_w + w;
        s_u = s_u + wu;
        s_v = s_v + wv;
        s_uu = s_uu + wu * u;
        s_uv = s_uv + wu * v;
        s_vv = s_vv + wv * v;
        s_wz = s_wz + w * z;
        s_uz = s_uz + wu * z;
        s_vz = s_vz + wv * z;
    }

    store_linear(
        s_w, s_u, s_v, s_uu, s_uv, s_vv, s_wz, s_uz, s_vz, xtwx, xtwy,
    );
}

/// Optimized accumulation for the 2D Linear Case using SIMD.
pub fn accumulate_linear_simd(
    offsets: &[f64],
    values: &[f64],
    weights: &[f64],
    xtwx: &mut [f64; 9],
    xtwy: &mut [f64; 3],
) {
    let n = weights.len();
    let mut i = 0;

    let mut s_w = f64x2::splat(0.0);
    let mut s_u = f64x2::splat(0.0);
    let mut s_v = f64x2::splat(0.0);
    let mut s_uu = f64x2::splat(0.0);
    let mut s_uv = f64x2::splat(0.0);
    let mut s_vv = f64x2::splat(0.0);
    let mut s_wz = f64x2::splat(0.0);
    let mut s_uz = f64x2::splat(0.0);
    let mut s_vz = f64x2::splat(0.0);

    while i + 2 <= n {
        let w = f64x2::new([weights[i], weights[i + 1]]);
        let u = f64x2::new([offsets[2 * i], offsets[2 * i + 2]]);
        let v = f64x2::new([offsets[2 * i + 1], offsets[2 * i + 3]]);
        let z = f64x2::new([values[i], values[i + 1]]);

        let wu = w * u;
        let wv = w * v;

        s_w += w;
        s_u += wu;
        s_v += wv;
        s_uu += wu * u;
        s_uv += wu * v;
        s_vv += wv * v;
        s_wz += w * z;
        s_uz += wu * z;
        s_vz += wv * z;

        i += 2;
    }

    let mut a_w = s_w.reduce_add();
    let mut a_u = s_u.reduce_add();
    let mut a_v = s_v.reduce_add();
    let mut a_uu = s_uu.reduce_add();
    let mut a_uv = s_uv.reduce_add();
    let mut a_vv = s_vv.reduce_add();
    let mut a_wz = s_wz.reduce_add();
    let mut a_uz = s_uz.reduce_add();
    let mut a_vz = s_vz.reduce_add();

    // Odd tail
    if i < n {
        let w = weights[i];
        let u = offsets[2 * i];
        let v = offsets[2 * i + 1];
        let z = values[i];
        let wu = w * u;
        let wv = w * v;
        a_w += w;
        a_u += wu;
        a_v += wv;
        a_uu += wu * u;
        a_uv += wu * v;
        a_vv += wv * v;
        a_wz += w * z;
        a_uz += wu * z;
        a_vz += wv * z;
    }

    store_linear(
        a_w, a_u, a_v, a_uu, a_uv, a_vv, a_wz, a_uz, a_vz, xtwx, xtwy,
    );
}

// ============================================================================
// Generic Accumulation
// ============================================================================

/// Accumulate Normal Equations for any supported degree.
///
/// `xtwx` must hold `n_coeffs * n_coeffs` elements and `xtwy` `n_coeffs`
/// elements; both are overwritten.
pub fn accumulate_normal_equations<T: Float>(
    offsets: &[T],
    values: &[T],
    weights: &[T],
    degree: PolynomialDegree,
    xtwx: &mut [T],
    xtwy: &mut [T],
) {
    let n_coeffs = degree.n_coeffs();
    xtwx.iter_mut().for_each(|a| *a = T::zero());
    xtwy.iter_mut().for_each(|b| *b = T::zero());

    let mut terms = [T::zero(); 6];

    for (k, (&w, &z)) in weights.iter().zip(values.iter()).enumerate() {
        degree.build_terms(offsets[2 * k], offsets[2 * k + 1], &mut terms);

        for j in 0..n_coeffs {
            let w_tj = w * terms[j];
            for l in j..n_coeffs {
                xtwx[j * n_coeffs + l] = xtwx[j * n_coeffs + l] + w_tj * terms[l];
            }
            xtwy[j] = xtwy[j] + w_tj * z;
        }
    }

    // Fill symmetric part of xtwx
    for j in 0..n_coeffs {
        for l in 0..j {
            xtwx[j * n_coeffs + l] = xtwx[l * n_coeffs + j];
        }
    }
}
