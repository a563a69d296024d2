//! Error types for the reaction network model contract

use core::fmt;
use thiserror::Error;

/// Result type for model operations
pub type Result<T> = std::result::Result<T, ModelError>;

/// Argument role named by a dimension-mismatch error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorRole {
    /// State vector X; length must equal the species count
    State,
    /// Parameter vector θ; length must equal rate constants plus inputs
    Parameters,
    /// Propensity buffer a; length must equal the reaction count
    Propensities,
    /// Output projection matrix; shape must equal outputs × species
    Output,
}

impl fmt::Display for VectorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorRole::State => write!(f, "state vector"),
            VectorRole::Parameters => write!(f, "parameter vector"),
            VectorRole::Propensities => write!(f, "propensity vector"),
            VectorRole::Output => write!(f, "output matrix"),
        }
    }
}

/// Errors that can occur in model contract operations
///
/// The taxonomy is deliberately closed at two kinds: every contract
/// violation is either a size mismatch on an argument or an out-of-range
/// reaction index, detected before any output argument is touched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelError {
    /// Vector or matrix argument has the wrong length or shape
    #[error("{argument} dimension mismatch: expected {expected} elements, got {got}")]
    DimensionMismatch {
        /// Which argument failed the size check
        argument: VectorRole,
        /// Element count required by the model dimensions
        expected: usize,
        /// Element count actually supplied
        got: usize,
    },

    /// Reaction index at or beyond the reaction count
    #[error("invalid reaction index {index}: model has {count} reactions")]
    InvalidReaction {
        /// Offending index
        index: usize,
        /// Number of reactions in the model
        count: usize,
    },
}

impl ModelError {
    /// Create a dimension mismatch error
    pub fn dimension_mismatch(argument: VectorRole, expected: usize, got: usize) -> Self {
        Self::DimensionMismatch {
            argument,
            expected,
            got,
        }
    }

    /// Create an invalid reaction index error
    pub fn invalid_reaction(index: usize, count: usize) -> Self {
        Self::InvalidReaction { index, count }
    }
}
