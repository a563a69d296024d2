//! Dimensional configuration carried by every model instance
//!
//! A reaction network's five dimensional constants travel with the model as
//! an immutable [`NetworkDims`] value, so networks of different shapes can
//! coexist behind one engine. Every contract operation runs the matching
//! `check_*` precondition here before touching any argument.

use crate::error::{ModelError, Result, VectorRole};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Dimensional constants of one reaction network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NetworkDims {
    /// Number of chemical species N
    pub species: usize,
    /// Number of reaction channels R
    pub reactions: usize,
    /// Number of rate parameters L
    pub rate_params: usize,
    /// Number of exogenous inputs Z
    pub inputs: usize,
    /// Number of observed outputs P
    pub outputs: usize,
}

impl NetworkDims {
    /// Create a new dimension record
    pub const fn new(
        species: usize,
        reactions: usize,
        rate_params: usize,
        inputs: usize,
        outputs: usize,
    ) -> Self {
        Self {
            species,
            reactions,
            rate_params,
            inputs,
            outputs,
        }
    }

    /// Full parameter vector length: rate constants followed by inputs
    pub const fn param_len(&self) -> usize {
        self.rate_params + self.inputs
    }

    /// Check a state vector length against the species count
    pub fn check_state(&self, len: usize) -> Result<()> {
        if len != self.species {
            return Err(ModelError::dimension_mismatch(
                VectorRole::State,
                self.species,
                len,
            ));
        }
        Ok(())
    }

    /// Check a parameter vector length against rate constants plus inputs
    pub fn check_params(&self, len: usize) -> Result<()> {
        if len != self.param_len() {
            return Err(ModelError::dimension_mismatch(
                VectorRole::Parameters,
                self.param_len(),
                len,
            ));
        }
        Ok(())
    }

    /// Check a propensity buffer length against the reaction count
    pub fn check_propensities(&self, len: usize) -> Result<()> {
        if len != self.reactions {
            return Err(ModelError::dimension_mismatch(
                VectorRole::Propensities,
                self.reactions,
                len,
            ));
        }
        Ok(())
    }

    /// Check an output matrix shape against outputs × species
    ///
    /// The error carries flattened element counts; both actual dimensions
    /// take part in the comparison.
    pub fn check_output(&self, rows: usize, cols: usize) -> Result<()> {
        if rows != self.outputs || cols != self.species {
            return Err(ModelError::dimension_mismatch(
                VectorRole::Output,
                self.outputs * self.species,
                rows * cols,
            ));
        }
        Ok(())
    }

    /// Check a reaction index against the reaction count
    pub fn check_reaction(&self, index: usize) -> Result<()> {
        if index >= self.reactions {
            return Err(ModelError::invalid_reaction(index, self.reactions));
        }
        Ok(())
    }
}
