//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used throughout LWLS:
//! - Kernel functions for distance-based weighting
//! - The 45-degree coordinate rotation
//! - Dense linear algebra for local normal equations
//!
//! These are reusable mathematical building blocks with no algorithm-specific logic.
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
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Kernel (weight) functions for distance-based weighting.
pub mod kernel;

/// 45-degree coordinate rotation.
pub mod rotation;

/// Linear algebra backend (nalgebra).
pub mod linalg;
