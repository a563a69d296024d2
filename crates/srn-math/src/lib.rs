//! Zero-dependency numeric substrate for stochastic reaction network models
//!
//! This crate provides the dense vector and matrix types shared by simulation
//! engines and the reaction network model contract, together with the small
//! set of summary statistics the test suites lean on. Values are stored as
//! [`Float`] (`f64`): species counts are integers carried in floating point,
//! and `f64` keeps them exact far beyond any realistic population size.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![warn(clippy::all)]

#[cfg(not(feature = "std"))]
extern crate alloc;

use core::fmt;

pub mod float;
pub mod matrix;
pub mod stats;
pub mod vector;

pub use matrix::Matrix;
pub use vector::Vector;

/// Scalar type used throughout the numeric substrate
pub type Float = f64;

/// Result type for math operations
pub type Result<T> = core::result::Result<T, MathError>;

/// Errors produced by vector and matrix operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// Operand length or shape does not match what the operation requires
    DimensionMismatch {
        /// Element count the operation expected
        expected: usize,
        /// Element count it received
        got: usize,
    },
    /// Element access outside the valid range
    IndexOutOfBounds {
        /// Offending index
        index: usize,
        /// Number of addressable elements
        len: usize,
    },
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::DimensionMismatch { expected, got } => {
                write!(f, "dimension mismatch: expected {}, got {}", expected, got)
            }
            MathError::IndexOutOfBounds { index, len } => {
                write!(f, "index {} out of bounds for length {}", index, len)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MathError {}

/// Numeric constants shared by the crate and its consumers
pub mod constants {
    use super::Float;

    /// Tolerance for floating-point equality checks in tests and diagnostics
    pub const EPSILON: Float = 1e-12;
}

/// Math crate version for compatibility checking
pub const MATH_VERSION: u32 = 1;
