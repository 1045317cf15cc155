//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer contains the numerical algorithms of the crate:
//! - Local weighted least-squares regression (`RegressionContext`)
//! - Bilinear grid interpolation (`GridInterpolator`)
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Bilinear grid interpolation.
pub mod interpolation;

/// Local weighted least-squares regression.
pub mod regression;
