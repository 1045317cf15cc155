//! Reusable scratch space for local fits.
//!
//! ## Purpose
//!
//! Each smoothing pass performs one weighted least-squares fit per query point.
//! This module provides the per-worker scratch buffers (`FittingBuffer`) that
//! hold the window's offsets, values, weights, and normal equations, so the
//! hot loop does not allocate.
//!
//! ## Design notes
//!
//! * **Lazy Expansion**: Buffers grow on demand and are never shrunk, stabilizing
//!   at the largest window seen in the pass.
//! * **Ownership**: One buffer per worker; parallel passes create one per thread.
//!
//! ## Invariants
//!
//! * Buffers are only logically cleared (`vec.clear()`), not deallocated, between fits.
//! * `offsets.len() == 2 * values.len() == 2 * weights.len()` after a window is loaded.
//!
//! ## Non-goals
//!
//! * Thread-local automatic caching (buffers are passed explicitly).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::{Deref, DerefMut};

// ============================================================================
// Slot - Unified Vector Abstraction
// ============================================================================

/// A reusable vector slot with automatic capacity management.
#[derive(Debug, Clone)]
pub struct Slot<T>(Vec<T>);

impl<T> Slot<T> {
    /// Create a new slot with the given initial capacity.
    #[inline]
    pub fn new(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Ensure the slot has at least the given capacity. Never shrinks.
    #[inline]
    pub fn ensure_capacity(&mut self, capacity: usize) {
        if self.0.capacity() < capacity {
            self.0.reserve(capacity - self.0.len());
        }
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> Deref for Slot<T> {
    type Target = Vec<T>;
    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Slot<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

// ============================================================================
// Fitting Buffer
// ============================================================================

/// Persistent buffers for one local regression.
#[derive(Debug, Clone)]
pub struct FittingBuffer<T> {
    /// Bandwidth-normalized offsets `(u, v)` of the window samples, flattened.
    pub offsets: Slot<T>,
    /// Observed values of the window samples.
    pub values: Slot<T>,
    /// Combined kernel and observation weights of the window samples.
    pub weights: Slot<T>,
    /// Distinct offsets found so far (support counting).
    pub distinct: Slot<T>,
    /// Normal matrix X'WX, row-major.
    pub xtw_x: Slot<T>,
    /// Normal vector X'WY.
    pub xtw_y: Slot<T>,
}

impl<T> FittingBuffer<T> {
    /// Create a new fitting buffer for windows of about `k` samples.
    pub fn new(k: usize, n_coeffs: usize) -> Self {
        Self {
            offsets: Slot::new(2 * k),
            values: Slot::new(k),
            weights: Slot::new(k),
            distinct: Slot::new(2 * n_coeffs),
            xtw_x: Slot::new(n_coeffs * n_coeffs),
            xtw_y: Slot::new(n_coeffs),
        }
    }

    /// Clear the window buffers for the next query point.
    #[inline]
    pub fn clear(&mut self) {
        self.offsets.clear();
        self.values.clear();
        self.weights.clear();
        self.distinct.clear();
    }

    /// Reserve room for a window of up to `candidates` samples.
    #[inline]
    pub fn reserve_window(&mut self, candidates: usize) {
        self.offsets.ensure_capacity(2 * candidates);
        self.values.ensure_capacity(candidates);
        self.weights.ensure_capacity(candidates);
    }
}
