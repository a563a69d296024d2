//! Minimal birth-death process
//!
//! One species, two channels: zero-order birth at k1 and first-order death
//! at k2·X. The stationary law is Poisson with mean k1/k2, which makes this
//! the standard end-to-end check for any engine built on the model
//! contract. It is also the smallest possible demonstration that engines
//! written against [`ReactionNetwork`](crate::ReactionNetwork) handle
//! networks of different shapes.

use crate::dims::NetworkDims;
use crate::error::Result;
use crate::network::ReactionNetwork;
use crate::prior::{PriorTable, SpeciesPrior};
use crate::rate::{RateRule, RateTable};
use crate::stoichiometry::{SpeciesChange, StoichiometryTable};
use log::debug;
use rand::RngCore;
use srn_math::{Matrix, Vector};

const NAME: &str = "Birth-death process (BIRTHDEATH)";
const DIMS: NetworkDims = NetworkDims::new(1, 2, 2, 0, 1);

/// Single-species birth-death model
#[derive(Debug, Clone)]
pub struct BirthDeath {
    rates: RateTable,
    stoichiometry: StoichiometryTable,
    prior: PriorTable,
}

impl BirthDeath {
    /// Build the model's rate, stoichiometry, and prior tables
    pub fn new() -> Result<Self> {
        let rates = RateTable::new(
            &DIMS,
            vec![
                // r0: birth at rate k1
                RateRule::constant(0),
                // r1: death at rate k2·X
                RateRule::linear(1, 0),
            ],
        )?;

        let stoichiometry = StoichiometryTable::new(
            &DIMS,
            vec![
                vec![SpeciesChange::new(0, 1)],
                vec![SpeciesChange::new(0, -1)],
            ],
        )?;

        let prior = PriorTable::new(&DIMS, vec![SpeciesPrior::Fixed(0.0)])?;

        debug!("built {}", NAME);

        Ok(Self {
            rates,
            stoichiometry,
            prior,
        })
    }
}

impl ReactionNetwork for BirthDeath {
    fn name(&self) -> &str {
        NAME
    }

    fn dims(&self) -> NetworkDims {
        DIMS
    }

    fn propensities(&self, state: &Vector, params: &Vector, out: &mut Vector) -> Result<()> {
        DIMS.check_state(state.len())?;
        DIMS.check_params(params.len())?;
        DIMS.check_propensities(out.len())?;
        self.rates.evaluate(state, params, out);
        Ok(())
    }

    fn apply_reaction(&self, state: &mut Vector, reaction: usize) -> Result<()> {
        self.stoichiometry.apply(state, reaction)
    }

    fn sample_initial(&self, state: &mut Vector, rng: &mut dyn RngCore) -> Result<()> {
        self.prior.sample(state, rng)
    }

    fn output_projection(&self, out: &mut Matrix) -> Result<()> {
        let (rows, cols) = out.shape();
        DIMS.check_output(rows, cols)?;
        out.fill(0.0);
        out[(0, 0)] = 1.0;
        Ok(())
    }
}
