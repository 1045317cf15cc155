//! Kernel (weight) functions for LWLS smoothing.
//!
//! ## Purpose
//!
//! This module maps normalized offsets `u = (coordinate - center) / bandwidth`
//! to kernel weights. The two-dimensional weight of an observation is the
//! product of the per-axis evaluations scaled by the observation's own weight.
//!
//! ## Design notes
//!
//! * **Closed set**: Kernels form a small enum parsed once per call from a name.
//! * **Support**: Every kernel has a finite support radius, which also drives the
//!   window prefilter. The Gaussian is truncated at `GAUSSIAN_CUTOFF`.
//! * **Normalization**: Per-axis kernels integrate to one on their support; the
//!   constant does not affect local fits but keeps weights comparable.
//!
//! ## Key concepts
//!
//! | Kernel       | Names                  | K(u)                             | Support      |
//! |--------------|------------------------|----------------------------------|--------------|
//! | Epanechnikov | `epan`, `epanechnikov` | 3/4 (1 - u^2)                    | \|u\| <= 1    |
//! | Uniform      | `rect`, `uniform`      | 1/2                              | \|u\| <= 1    |
//! | Gaussian     | `gauss`, `gaussian`    | exp(-u^2/2) / sqrt(2 pi)         | \|u\| <= 6    |
//! | GaussianVar  | `gausvar`              | exp(-u^2/2) / sqrt(2 pi) (5 - u^2)/4 | \|u\| <= sqrt(5) |
//! | Quartic      | `quar`, `quartic`      | 15/16 (1 - u^2)^2                | \|u\| <= 1    |
//! | Triangular   | `tria`, `triangular`   | 1 - \|u\|                        | \|u\| <= 1    |
//!
//! Names are case-sensitive.
//!
//! ## Invariants
//!
//! * Kernels are non-negative (K(u) >= 0) and symmetric (K(u) = K(-u)).
//! * Kernels return exactly zero outside their support.
//!
//! ## Non-goals
//!
//! * This module does not select bandwidths.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::ToString;
#[cfg(feature = "std")]
use std::string::ToString;

// External dependencies
use core::str::FromStr;
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::LwlsError;

// ============================================================================
// Mathematical Constants
// ============================================================================

/// 1 / sqrt(2*pi), the Gaussian normalizing constant.
const INV_SQRT_2PI: f64 = 0.398_942_280_401_432_677_939_946_059_934_381_868_5_f64;

/// Cutoff for Gaussian kernel evaluation.
///
/// Beyond this normalized distance the Gaussian weight is below 1e-8 of its
/// peak (exp(-18) approx 1.5e-8), so samples further away are not visited.
const GAUSSIAN_CUTOFF: f64 = 6.0;

/// Root of the Gaussian-variant polynomial factor (5 - u^2) / 4.
const GAUSVAR_CUTOFF: f64 = 2.236_067_977_499_789_696_409_173_668_731_276_2_f64;

// ============================================================================
// Kernel Enum
// ============================================================================

/// Kernel function for LWLS smoothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KernelFunction {
    /// Epanechnikov kernel: K(u) = 3/4 (1 - u^2) for |u| <= 1.
    #[default]
    Epanechnikov,

    /// Uniform (rectangular) kernel: K(u) = 1/2 for |u| <= 1.
    Uniform,

    /// Gaussian kernel: K(u) = exp(-u^2 / 2) / sqrt(2 pi), truncated at |u| = 6.
    Gaussian,

    /// Gaussian kernel with a variance-correcting factor (5 - u^2) / 4,
    /// truncated at its root |u| = sqrt(5).
    GaussianVar,

    /// Quartic (biweight) kernel: K(u) = 15/16 (1 - u^2)^2 for |u| <= 1.
    Quartic,

    /// Triangular kernel: K(u) = 1 - |u| for |u| <= 1.
    Triangular,
}

impl KernelFunction {
    /// Canonical short name, as accepted by [`FromStr`].
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            KernelFunction::Epanechnikov => "epan",
            KernelFunction::Uniform => "rect",
            KernelFunction::Gaussian => "gauss",
            KernelFunction::GaussianVar => "gausvar",
            KernelFunction::Quartic => "quar",
            KernelFunction::Triangular => "tria",
        }
    }

    /// Half-width of the kernel's support in normalized units.
    #[inline]
    pub fn support_radius(&self) -> f64 {
        match self {
            KernelFunction::Gaussian => GAUSSIAN_CUTOFF,
            KernelFunction::GaussianVar => GAUSVAR_CUTOFF,
            _ => 1.0,
        }
    }

    // ========================================================================
    // Weight Computation
    // ========================================================================

    /// Evaluate the one-dimensional kernel at normalized offset `u`.
    #[inline]
    pub fn evaluate<T: Float>(&self, u: T) -> T {
        let abs_u = u.abs();
        let radius = T::from(self.support_radius()).unwrap_or_else(T::one);
        if abs_u > radius {
            return T::zero();
        }
        let one = T::one();
        let u2 = abs_u * abs_u;

        match self {
            KernelFunction::Epanechnikov => T::from(0.75).unwrap() * (one - u2),

            KernelFunction::Uniform => T::from(0.5).unwrap(),

            KernelFunction::Gaussian => {
                T::from(INV_SQRT_2PI).unwrap() * (T::from(-0.5).unwrap() * u2).exp()
            }

            KernelFunction::GaussianVar => {
                let gauss = T::from(INV_SQRT_2PI).unwrap() * (T::from(-0.5).unwrap() * u2).exp();
                let factor = (T::from(5.0).unwrap() - u2) / T::from(4.0).unwrap();
                (gauss * factor).max(T::zero())
            }

            KernelFunction::Quartic => {
                let tmp = one - u2;
                T::from(0.9375).unwrap() * tmp * tmp
            }

            KernelFunction::Triangular => one - abs_u,
        }
    }

    /// Product kernel weight for normalized offsets `(u, v)`.
    #[inline]
    pub fn evaluate_2d<T: Float>(&self, u: T, v: T) -> T {
        let wu = self.evaluate(u);
        if wu <= T::zero() {
            return T::zero();
        }
        wu * self.evaluate(v)
    }
}

// ============================================================================
// Parsing
// ============================================================================

impl FromStr for KernelFunction {
    type Err = LwlsError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "epan" | "epanechnikov" => Ok(KernelFunction::Epanechnikov),
            "rect" | "uniform" => Ok(KernelFunction::Uniform),
            "gauss" | "gaussian" => Ok(KernelFunction::Gaussian),
            "gausvar" => Ok(KernelFunction::GaussianVar),
            "quar" | "quartic" => Ok(KernelFunction::Quartic),
            "tria" | "triangular" => Ok(KernelFunction::Triangular),
            _ => Err(LwlsError::UnknownKernel(name.to_string())),
        }
    }
}
