//! Layer 5: Adapters
//!
//! # Purpose
//!
//! This layer provides the execution adapters:
//! - `Grid`: local linear smoothing onto a rectangular output grid
//! - `Rotated`: local linear or quadratic smoothing in 45-degree rotated
//!   coordinates at arbitrary query points
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Rectangular grid smoother.
pub mod grid;

/// Rotated-coordinate smoother.
pub mod rotated;
