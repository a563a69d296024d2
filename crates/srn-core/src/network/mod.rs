//! The pluggable reaction network contract
//!
//! This module defines the capability set a simulation engine consumes: a
//! fixed-shape numeric interface for propensity evaluation, state update,
//! initial-state sampling, and output projection, plus the dimensional
//! metadata needed to size buffers. The engine is written once against
//! [`ReactionNetwork`]; each concrete network is one implementing type,
//! installed by name in a [`registry::NetworkRegistry`].

use crate::dims::NetworkDims;
use crate::error::Result;
use rand::RngCore;
use srn_math::{Matrix, Vector};

pub mod birth_death;
pub mod lacgfp8;
pub mod registry;

pub use birth_death::BirthDeath;
pub use lacgfp8::LacGfp8;
pub use registry::NetworkRegistry;

/// Static metadata describing an installed model
///
/// Read once at model-load time; immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelInfo {
    /// Human-readable model name
    pub name: String,
    /// Dimensional constants
    pub dims: NetworkDims,
}

/// Capability set every reaction network implements
///
/// All operations are pure functions of their explicit inputs (plus the
/// random source for sampling): no I/O, no blocking, no hidden state, no
/// heap allocation, O(species + reactions) time. Implementations are
/// `Send + Sync`, so one instance serves any number of concurrent
/// trajectories as long as each trajectory owns its state, parameter, and
/// propensity buffers and its random source.
///
/// Every operation validates argument sizes against [`NetworkDims`] before
/// touching anything and returns a [`crate::ModelError`] without partial
/// mutation on violation. Contract violations are programmer errors: the
/// engine should treat them as fatal to the run, not retry.
pub trait ReactionNetwork: Send + Sync {
    /// Human-readable model name
    fn name(&self) -> &str;

    /// Dimensional constants of this network
    fn dims(&self) -> NetworkDims;

    /// Evaluate every reaction propensity into `out`
    ///
    /// Sizes are checked in argument order (state, then parameters, then
    /// `out`); on mismatch `out` is untouched. On success `out[r]` holds
    /// reaction r's instantaneous rate for (`state`, `params`). Rates are
    /// non-negative for non-negative inputs; nothing re-checks the sign of
    /// what the rate laws produce.
    fn propensities(&self, state: &Vector, params: &Vector, out: &mut Vector) -> Result<()>;

    /// Apply one fired reaction's stoichiometric deltas to `state` in place
    ///
    /// Checks the state length, then that `reaction` is within range; the
    /// state is untouched on either failure. Does not re-validate
    /// non-negativity after the update — driving the state correctly is the
    /// engine's job.
    fn apply_reaction(&self, state: &mut Vector, reaction: usize) -> Result<()>;

    /// Sample a fresh initial state into `state` from the network's prior
    ///
    /// Draws come only from `rng`, a fixed number per species in ascending
    /// species order, so a seeded source makes the draw reproducible. On a
    /// length mismatch the state is unspecified.
    fn sample_initial(&self, state: &mut Vector, rng: &mut dyn RngCore) -> Result<()>;

    /// Fill `out` with the fixed state-to-observables projection
    ///
    /// The projection is static; callers may cache it. On a shape mismatch
    /// `out` is untouched.
    fn output_projection(&self, out: &mut Matrix) -> Result<()>;

    /// Metadata snapshot for engine-side bookkeeping
    fn info(&self) -> ModelInfo {
        ModelInfo {
            name: self.name().to_string(),
            dims: self.dims(),
        }
    }
}
