//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the basic data structures shared by every other layer:
//! - Error types
//! - The sorted sample index used for window prefiltering
//! - Reusable fitting buffers
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types.
pub mod errors;

/// Sorted sample index for window prefiltering.
pub mod window;

/// Reusable buffers for local fits.
pub mod buffer;
