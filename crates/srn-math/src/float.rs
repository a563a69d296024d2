//! Float extensions for builds without the standard library
//!
//! `f64::sqrt` is an inherent method supplied by `std`, not `core`, so it
//! disappears when the crate is built with default features off. The
//! [`FloatExt`] trait fills that gap with a software fallback.

use crate::Float;

/// Square root for [`Float`] in environments without `std`
///
/// Call sites import this trait only when `std` is off; with `std` enabled
/// the inherent `f64::sqrt` is resolved instead and the fallback never runs.
pub trait FloatExt {
    /// Square root; NaN for negative inputs
    fn sqrt(self) -> Self;
}

impl FloatExt for Float {
    fn sqrt(self) -> Self {
        sqrt_approx(self)
    }
}

/// Newton-Raphson square root seeded from the exponent bits
///
/// Relative error stays below 1e-14 for normal positive inputs, ample for
/// the summary statistics built on top of it.
pub fn sqrt_approx(x: Float) -> Float {
    if x < 0.0 {
        return Float::NAN;
    }
    // sqrt(0) = 0; NaN and +inf pass through unchanged
    if x == 0.0 || !x.is_finite() {
        return x;
    }

    // Halving the exponent lands within ~6% of the root
    let mut y = Float::from_bits((x.to_bits() >> 1) + 0x1ff8_0000_0000_0000);
    for _ in 0..4 {
        y = 0.5 * (y + x / y);
    }
    y
}
