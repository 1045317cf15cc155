#![cfg(feature = "dev")]
//! Tests for local regression.
//!
//! ## Test Organization
//!
//! 1. **Polynomial Degree** - Order parsing and design rows
//! 2. **Accumulators** - Specialized vs. generic normal equations
//! 3. **Regression Context** - Window loading, support, and fitting

use approx::assert_relative_eq;

use lwls_rs::internals::algorithms::regression::{
    PolynomialDegree, RegressionContext, accumulate_linear_scalar, accumulate_linear_simd,
    accumulate_normal_equations, min_reciprocal_condition,
};
use lwls_rs::internals::math::kernel::KernelFunction;
use lwls_rs::internals::primitives::buffer::FittingBuffer;
use lwls_rs::internals::primitives::errors::LwlsError;
use lwls_rs::internals::primitives::window::SampleIndex;

// ============================================================================
// Helper Functions
// ============================================================================

/// Samples of `f` on the regular grid `step * (0..n)` squared.
fn grid_samples(n: usize, step: f64, f: impl Fn(f64, f64) -> f64) -> (Vec<f64>, Vec<f64>) {
    let mut coords = Vec::with_capacity(2 * n * n);
    let mut values = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            let (x, y) = (i as f64 * step, j as f64 * step);
            coords.push(x);
            coords.push(y);
            values.push(f(x, y));
        }
    }
    (coords, values)
}

fn context<'a>(
    coords: &'a [f64],
    values: &'a [f64],
    weights: &'a [f64],
    index: &'a SampleIndex<f64>,
    kernel: KernelFunction,
    degree: PolynomialDegree,
    bandwidth: [f64; 2],
) -> RegressionContext<'a, f64> {
    RegressionContext {
        coords,
        values,
        weights,
        index,
        kernel,
        degree,
        bandwidth,
    }
}

// ============================================================================
// Polynomial Degree
// ============================================================================

#[test]
fn test_degree_from_order() {
    assert_eq!(PolynomialDegree::from_order(1), Ok(PolynomialDegree::Linear));
    assert_eq!(PolynomialDegree::from_order(2), Ok(PolynomialDegree::Quadratic));
    assert_eq!(
        PolynomialDegree::from_order(0),
        Err(LwlsError::InvalidPolynomialOrder(0))
    );
    assert_eq!(
        PolynomialDegree::from_order(3),
        Err(LwlsError::InvalidPolynomialOrder(3))
    );
}

#[test]
fn test_degree_sizes() {
    assert_eq!(PolynomialDegree::Linear.value(), 1);
    assert_eq!(PolynomialDegree::Linear.n_coeffs(), 3);
    assert_eq!(PolynomialDegree::Quadratic.value(), 2);
    assert_eq!(PolynomialDegree::Quadratic.n_coeffs(), 6);
    assert_eq!(PolynomialDegree::default(), PolynomialDegree::Linear);
}

#[test]
fn test_build_terms() {
    let mut terms = [0.0; 6];

    let n = PolynomialDegree::Linear.build_terms(2.0, 3.0, &mut terms);
    assert_eq!(n, 3);
    assert_eq!(&terms[..3], &[1.0, 2.0, 3.0]);

    let n = PolynomialDegree::Quadratic.build_terms(2.0, 3.0, &mut terms);
    assert_eq!(n, 6);
    assert_eq!(terms, [1.0, 2.0, 3.0, 4.0, 6.0, 9.0]);
}

// ============================================================================
// Accumulators
// ============================================================================

#[test]
fn test_simd_matches_scalar_accumulation() {
    // Odd count exercises the SIMD tail
    let offsets = [0.1, -0.2, 0.5, 0.3, -0.7, 0.0, 0.2, 0.9, -0.4, -0.6];
    let values = [1.0, 2.0, -1.0, 0.5, 3.0];
    let weights = [0.5, 1.0, 0.25, 0.8, 0.1];

    let mut xtwx_scalar = [0.0; 9];
    let mut xtwy_scalar = [0.0; 3];
    accumulate_linear_scalar(&offsets, &values, &weights, &mut xtwx_scalar, &mut xtwy_scalar);

    let mut xtwx_simd = [0.0; 9];
    let mut xtwy_simd = [0.0; 3];
    accumulate_linear_simd(&offsets, &values, &weights, &mut xtwx_simd, &mut xtwy_simd);

    for k in 0..9 {
        assert_relative_eq!(xtwx_scalar[k], xtwx_simd[k], epsilon = 1e-14);
    }
    for k in 0..3 {
        assert_relative_eq!(xtwy_scalar[k], xtwy_simd[k], epsilon = 1e-14);
    }
}

#[test]
fn test_generic_matches_specialized_linear() {
    let offsets = [0.1, -0.2, 0.5, 0.3, -0.7, 0.0, 0.2, 0.9];
    let values = [1.0, 2.0, -1.0, 0.5];
    let weights = [0.5, 1.0, 0.25, 0.8];

    let mut xtwx = [0.0; 9];
    let mut xtwy = [0.0; 3];
    accumulate_linear_scalar(&offsets, &values, &weights, &mut xtwx, &mut xtwy);

    let mut xtwx_generic = vec![0.0; 9];
    let mut xtwy_generic = vec![0.0; 3];
    accumulate_normal_equations(
        &offsets,
        &values,
        &weights,
        PolynomialDegree::Linear,
        &mut xtwx_generic,
        &mut xtwy_generic,
    );

    for k in 0..9 {
        assert_relative_eq!(xtwx[k], xtwx_generic[k], epsilon = 1e-14);
    }
    for k in 0..3 {
        assert_relative_eq!(xtwy[k], xtwy_generic[k], epsilon = 1e-14);
    }
}

#[test]
fn test_quadratic_normal_matrix_is_symmetric() {
    let offsets = [0.1, -0.2, 0.5, 0.3, -0.7, 0.0, 0.2, 0.9, -0.4, -0.6, 0.8, 0.1];
    let values = [1.0, 2.0, -1.0, 0.5, 3.0, 0.0];
    let weights = [0.5, 1.0, 0.25, 0.8, 0.1, 0.6];

    let mut xtwx = vec![f64::NAN; 36];
    let mut xtwy = vec![f64::NAN; 6];
    accumulate_normal_equations(
        &offsets,
        &values,
        &weights,
        PolynomialDegree::Quadratic,
        &mut xtwx,
        &mut xtwy,
    );

    let total_weight: f64 = weights.iter().sum();
    assert_relative_eq!(xtwx[0], total_weight, epsilon = 1e-14);
    for j in 0..6 {
        for l in 0..6 {
            assert_eq!(xtwx[j * 6 + l], xtwx[l * 6 + j]);
        }
        assert!(xtwy[j].is_finite());
    }
}

// ============================================================================
// Regression Context
// ============================================================================

#[test]
fn test_fit_reproduces_plane() {
    let plane = |x: f64, y: f64| 2.0 - 1.5 * x + 0.75 * y;
    let (coords, values) = grid_samples(11, 0.1, plane);
    let weights = vec![1.0; values.len()];
    let index = SampleIndex::new(&coords);
    let ctx = context(
        &coords,
        &values,
        &weights,
        &index,
        KernelFunction::Epanechnikov,
        PolynomialDegree::Linear,
        [0.25, 0.25],
    );

    let mut buffer = FittingBuffer::new(16, 3);
    for query in [[0.5, 0.5], [0.33, 0.71], [0.0, 0.0], [1.0, 0.45]] {
        let estimate = ctx.fit(query, &mut buffer).unwrap();
        assert_relative_eq!(estimate, plane(query[0], query[1]), epsilon = 1e-10);
    }
}

#[test]
fn test_fit_reproduces_quadratic_surface() {
    let surface = |x: f64, y: f64| 1.0 + x - 2.0 * y + 3.0 * x * x - x * y + 0.5 * y * y;
    let (coords, values) = grid_samples(11, 0.1, surface);
    let weights = vec![1.0; values.len()];
    let index = SampleIndex::new(&coords);
    let ctx = context(
        &coords,
        &values,
        &weights,
        &index,
        KernelFunction::Quartic,
        PolynomialDegree::Quadratic,
        [0.35, 0.35],
    );

    let mut buffer = FittingBuffer::new(16, 6);
    let estimate = ctx.fit([0.42, 0.57], &mut buffer).unwrap();
    assert_relative_eq!(estimate, surface(0.42, 0.57), epsilon = 1e-9);
}

#[test]
fn test_two_distinct_locations_are_unsupported() {
    // Many repeats of only two locations
    let coords = [0.4, 0.5, 0.6, 0.5, 0.4, 0.5, 0.6, 0.5, 0.4, 0.5];
    let values = [1.0, 2.0, 1.1, 2.1, 0.9];
    let weights = [1.0; 5];
    let index = SampleIndex::new(&coords);
    let ctx = context(
        &coords,
        &values,
        &weights,
        &index,
        KernelFunction::Epanechnikov,
        PolynomialDegree::Linear,
        [0.5, 0.5],
    );

    let mut buffer = FittingBuffer::new(8, 3);
    assert!(!ctx.load_window([0.5, 0.5], &mut buffer));
    assert_eq!(buffer.values.len(), 5);
    assert!(!ctx.is_supported([0.5, 0.5], &mut buffer));
    assert!(ctx.fit([0.5, 0.5], &mut buffer).is_none());
}

#[test]
fn test_collinear_window_is_unsupported() {
    let coords = [0.4, 0.5, 0.5, 0.5, 0.6, 0.5, 0.45, 0.5];
    let values = [1.0, 2.0, 3.0, 1.5];
    let weights = [1.0; 4];
    let index = SampleIndex::new(&coords);
    let ctx = context(
        &coords,
        &values,
        &weights,
        &index,
        KernelFunction::Epanechnikov,
        PolynomialDegree::Linear,
        [0.3, 0.3],
    );

    let mut buffer = FittingBuffer::new(8, 3);
    // Enough distinct locations, but the system is singular
    assert!(ctx.load_window([0.5, 0.5], &mut buffer));
    assert!(!ctx.is_supported([0.5, 0.5], &mut buffer));
    assert!(ctx.fit([0.5, 0.5], &mut buffer).is_none());
}

#[test]
fn test_zero_weights_do_not_count() {
    let coords = [0.4, 0.4, 0.6, 0.4, 0.5, 0.6];
    let values = [1.0, 2.0, 3.0];
    let index = SampleIndex::new(&coords);

    let mut buffer = FittingBuffer::new(8, 3);
    let weights = [1.0, 1.0, 1.0];
    let ctx = context(
        &coords,
        &values,
        &weights,
        &index,
        KernelFunction::Epanechnikov,
        PolynomialDegree::Linear,
        [0.3, 0.3],
    );
    assert!(ctx.is_supported([0.5, 0.5], &mut buffer));

    let weights = [1.0, 0.0, 1.0];
    let ctx = context(
        &coords,
        &values,
        &weights,
        &index,
        KernelFunction::Epanechnikov,
        PolynomialDegree::Linear,
        [0.3, 0.3],
    );
    assert!(!ctx.is_supported([0.5, 0.5], &mut buffer));
}

#[test]
fn test_window_excludes_far_samples() {
    let coords = [0.5, 0.5, 0.9, 0.5, 0.5, 0.9];
    let values = [1.0, 2.0, 3.0];
    let weights = [1.0; 3];
    let index = SampleIndex::new(&coords);
    let ctx = context(
        &coords,
        &values,
        &weights,
        &index,
        KernelFunction::Uniform,
        PolynomialDegree::Linear,
        [0.2, 0.2],
    );

    let mut buffer = FittingBuffer::new(8, 3);
    ctx.load_window([0.5, 0.5], &mut buffer);
    assert_eq!(buffer.values.len(), 1);
    assert_eq!(&buffer.offsets[..], &[0.0, 0.0]);
}

#[test]
fn test_uniform_kernel_keeps_boundary_samples() {
    // Offsets of exactly one bandwidth up to rounding
    let coords = [0.5, 0.5, 0.6, 0.5, 0.5, 0.6];
    let values = [1.0, 2.0, 3.0];
    let weights = [1.0; 3];
    let index = SampleIndex::new(&coords);
    let ctx = context(
        &coords,
        &values,
        &weights,
        &index,
        KernelFunction::Uniform,
        PolynomialDegree::Linear,
        [0.1, 0.1],
    );

    let mut buffer = FittingBuffer::new(8, 3);
    assert!(ctx.load_window([0.5, 0.5], &mut buffer));
    assert_eq!(buffer.values.len(), 3);
    for &w in buffer.weights.iter() {
        assert_relative_eq!(w, 0.25);
    }
}

#[test]
fn test_observation_weights_scale_kernel_weights() {
    let coords = [0.5, 0.5, 0.6, 0.5, 0.5, 0.6];
    let values = [1.0, 2.0, 3.0];
    let weights = [2.0, 1.0, 0.5];
    let index = SampleIndex::new(&coords);
    let ctx = context(
        &coords,
        &values,
        &weights,
        &index,
        KernelFunction::Epanechnikov,
        PolynomialDegree::Linear,
        [0.2, 0.2],
    );

    let mut buffer = FittingBuffer::new(8, 3);
    ctx.load_window([0.5, 0.5], &mut buffer);
    assert_eq!(buffer.values.len(), 3);
    let center = buffer
        .offsets
        .chunks_exact(2)
        .position(|p| p[0] == 0.0 && p[1] == 0.0)
        .unwrap();
    assert_relative_eq!(buffer.weights[center], 2.0 * 0.75 * 0.75);
}

#[test]
fn test_min_reciprocal_condition_by_precision() {
    assert_relative_eq!(min_reciprocal_condition::<f64>(), 1e-10);
    assert_relative_eq!(min_reciprocal_condition::<f32>(), 16.0 * f32::EPSILON);
}
