//! Regression Module
//!
//! ## Purpose
//!
//! This module provides the core functionality for local regression fitting,
//! including the `RegressionContext` struct and the `SolverLinalg` trait.
//!
//! ## Features
//!
//! - Local linear and local quadratic fits in two dimensions.
//! - Specialized (SIMD) accumulation for the local linear case.
//! - A support probe sharing the fit's window and design logic.

/// Regression Context
mod context;

/// Normal-Equation Accumulators
mod accumulators;

/// Regression Types
mod types;

/// Re-exports
pub use accumulators::{
    SolverLinalg, accumulate_linear_scalar, accumulate_linear_simd, accumulate_normal_equations,
};
pub use context::{
    MIN_RECIPROCAL_CONDITION, RegressionContext, WINDOW_EDGE_TOLERANCE, min_reciprocal_condition,
};
pub use types::PolynomialDegree;
