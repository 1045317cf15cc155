//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates smoothing passes:
//! - Input validation before any fit runs
//! - The executor running one local fit (or support probe) per query point
//! - Output types (`SmoothedSurface`, `BandwidthCheck`)
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Input validation.
pub mod validator;

/// Smoothing and probe passes over query points.
pub mod executor;

/// Result types.
pub mod output;
