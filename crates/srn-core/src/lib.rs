//! Pluggable reaction network models for stochastic simulation engines
//!
//! This crate defines the model side of a discrete-state stochastic
//! simulation: each reaction network exposes propensity evaluation, sparse
//! state updates, initial-condition sampling, and a fixed output projection
//! behind the [`ReactionNetwork`] trait, sized by immutable [`NetworkDims`].
//! Engines own time, random numbers, and trajectory storage; models own
//! chemistry. Buffers are caller-allocated and reused, so the per-step path
//! never allocates.

#![deny(missing_docs)]
#![warn(clippy::all)]

// Re-export the numeric kernel types models are written against
pub use srn_math::{Float, Matrix, Vector};

// Core modules
pub mod dims;
pub mod error;
pub mod network;
pub mod prior;
pub mod rate;
pub mod stoichiometry;

// Re-export essential types
pub use dims::NetworkDims;
pub use error::{ModelError, Result, VectorRole};
pub use network::{BirthDeath, LacGfp8, ModelInfo, NetworkRegistry, ReactionNetwork};
pub use prior::{PriorTable, SpeciesPrior};
pub use rate::{Coefficient, RateLaw, RateRule, RateTable};
pub use stoichiometry::{SpeciesChange, StoichiometryTable};

/// Model contract version for compatibility checking
pub const CORE_VERSION: u32 = 1;

/// Logger plumbing for binaries and integration tests
#[cfg(feature = "logging")]
pub mod logging {
    /// Initialize env_logger from `RUST_LOG`, ignoring repeat calls
    pub fn init() {
        let _ = env_logger::Builder::from_default_env().try_init();
    }
}
