//! Sparse stoichiometric delta tables and the shared update routine
//!
//! Firing a reaction changes a handful of species counts by fixed integer
//! amounts. The table stores those deltas as data, one sparse row per
//! reaction, and [`StoichiometryTable::apply`] is the single routine that
//! mutates state on behalf of every network. Keeping stoichiometry as data
//! makes it independently auditable: tests can sum deltas per reaction
//! without firing anything.

use crate::dims::NetworkDims;
use crate::error::{ModelError, Result, VectorRole};
use smallvec::SmallVec;
use srn_math::{Float, Vector};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One species' integer count change when a reaction fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpeciesChange {
    /// Species index
    pub species: usize,
    /// Signed count change
    pub delta: i32,
}

impl SpeciesChange {
    /// Create a new species change
    pub const fn new(species: usize, delta: i32) -> Self {
        Self { species, delta }
    }
}

/// Reactions touch at most a few species; rows stay inline at this capacity.
type Row = SmallVec<[SpeciesChange; 4]>;

/// Validated sparse delta table, one row per reaction
#[derive(Debug, Clone)]
pub struct StoichiometryTable {
    species: usize,
    rows: Vec<Row>,
}

impl StoichiometryTable {
    /// Build a table, validating row count and species indices against `dims`
    ///
    /// The table must carry exactly one row per reaction, and no entry may
    /// reference a species past the state length `dims` declares.
    pub fn new(dims: &NetworkDims, rows: Vec<Vec<SpeciesChange>>) -> Result<Self> {
        if rows.len() != dims.reactions {
            return Err(ModelError::dimension_mismatch(
                VectorRole::Propensities,
                dims.reactions,
                rows.len(),
            ));
        }
        for row in &rows {
            for change in row {
                if change.species >= dims.species {
                    return Err(ModelError::dimension_mismatch(
                        VectorRole::State,
                        change.species + 1,
                        dims.species,
                    ));
                }
            }
        }
        Ok(Self {
            species: dims.species,
            rows: rows.into_iter().map(SmallVec::from_vec).collect(),
        })
    }

    /// Number of reactions covered
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Delta list for one reaction
    pub fn changes(&self, reaction: usize) -> Option<&[SpeciesChange]> {
        self.rows.get(reaction).map(|row| row.as_slice())
    }

    /// Net count change a reaction applies to one species
    pub fn net_change(&self, reaction: usize, species: usize) -> Option<i32> {
        self.rows.get(reaction).map(|row| {
            row.iter()
                .filter(|change| change.species == species)
                .map(|change| change.delta)
                .sum()
        })
    }

    /// Apply one reaction's deltas to the state in place
    ///
    /// Checks the state length first, then the reaction index; the state is
    /// untouched on either failure. Deltas are exact: integer-valued entries
    /// stay integer-valued.
    pub fn apply(&self, state: &mut Vector, reaction: usize) -> Result<()> {
        if state.len() != self.species {
            return Err(ModelError::dimension_mismatch(
                VectorRole::State,
                self.species,
                state.len(),
            ));
        }
        let row = match self.rows.get(reaction) {
            Some(row) => row,
            None => return Err(ModelError::invalid_reaction(reaction, self.rows.len())),
        };

        let data = state.data_mut();
        for change in row {
            data[change.species] += change.delta as Float;
        }
        Ok(())
    }
}
