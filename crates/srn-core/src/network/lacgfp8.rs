//! Lac-GFP gene expression construct, model version 8
//!
//! Eight-species model of a GFP reporter under LacI repression. LacI is
//! constitutively expressed, dimerizes, and the dimer occupies the Lac
//! operator; transcription of gfp runs fast from the free promoter and
//! leaks slowly from the occupied one. The IPTG input accelerates LacI
//! monomer degradation, relieving repression. GFP matures from a dark
//! to a fluorescent form, and only the mature form is observed.

use crate::dims::NetworkDims;
use crate::error::Result;
use crate::network::ReactionNetwork;
use crate::prior::{PriorTable, SpeciesPrior};
use crate::rate::{RateRule, RateTable};
use crate::stoichiometry::{SpeciesChange, StoichiometryTable};
use log::debug;
use rand::RngCore;
use srn_math::{Matrix, Vector};

/// Species indices of the Lac-GFP construct state vector
pub mod species {
    /// lacI mRNA
    pub const LACI_MRNA: usize = 0;
    /// LacI protein monomer
    pub const LACI: usize = 1;
    /// LacI dimer
    pub const LACI2: usize = 2;
    /// Unoccupied (active) Lac promoter
    pub const PLAC: usize = 3;
    /// Promoter with a LacI dimer bound at the operator
    pub const O2LAC: usize = 4;
    /// gfp mRNA
    pub const GFP_MRNA: usize = 5;
    /// Dark (immature) GFP protein
    pub const GFP_DARK: usize = 6;
    /// Mature fluorescent GFP protein
    pub const GFP_MATURE: usize = 7;
}

/// Index of the IPTG concentration inside the parameter vector
///
/// The single input sits after the fifteen rate constants.
pub const INPUT_IPTG: usize = 15;

const NAME: &str = "Lac-GFP construct model v8 (LACGFP8)";
const DIMS: NetworkDims = NetworkDims::new(8, 15, 15, 1, 1);

/// Stochastic model of the Lac-GFP gene expression construct
///
/// Fifteen reaction channels, indexed in parameter order:
///
/// | r  | reaction                        | propensity            |
/// |----|---------------------------------|-----------------------|
/// | 0  | ∅ → lacI mRNA                  | k1                    |
/// | 1  | lacI mRNA → ∅                  | k2·X0                 |
/// | 2  | lacI mRNA → lacI mRNA + LacI   | k3·X0                 |
/// | 3  | LacI → ∅                       | (k4 + k5·u1)·X1       |
/// | 4  | 2 LacI → LacI2                 | k6·X1·(X1 − 1)        |
/// | 5  | LacI2 → 2 LacI                 | k7·X2                 |
/// | 6  | LacI2 + PLac → O2Lac           | k8·X2·X3              |
/// | 7  | O2Lac → LacI2 + PLac           | k9·X4                 |
/// | 8  | PLac → PLac + gfp mRNA         | k10·X3                |
/// | 9  | O2Lac → O2Lac + gfp mRNA       | k11·X4                |
/// | 10 | gfp mRNA → ∅                   | k12·X5                |
/// | 11 | gfp mRNA → gfp mRNA + GFP      | k13·X5                |
/// | 12 | GFP → ∅                        | k14·X6                |
/// | 13 | GFP → mGFP                     | k15·X6                |
/// | 14 | mGFP → ∅                       | k14·X7                |
///
/// Both GFP forms degrade at the shared constant k14; k15 is the
/// maturation rate. The output projection observes mature GFP only.
#[derive(Debug, Clone)]
pub struct LacGfp8 {
    rates: RateTable,
    stoichiometry: StoichiometryTable,
    prior: PriorTable,
}

impl LacGfp8 {
    /// Build the model's rate, stoichiometry, and prior tables
    pub fn new() -> Result<Self> {
        use species::*;

        let rates = RateTable::new(
            &DIMS,
            vec![
                // r0: constitutive lacI transcription
                RateRule::constant(0),
                // r1: lacI mRNA degradation
                RateRule::linear(1, LACI_MRNA),
                // r2: LacI translation
                RateRule::linear(2, LACI_MRNA),
                // r3: LacI degradation, accelerated by IPTG
                RateRule::input_scaled_linear(3, 4, INPUT_IPTG, LACI),
                // r4: LacI dimerization
                RateRule::self_pairing(5, LACI),
                // r5: LacI dimer dissociation
                RateRule::linear(6, LACI2),
                // r6: dimer binds the Lac operator
                RateRule::bimolecular(7, LACI2, PLAC),
                // r7: dimer leaves the operator
                RateRule::linear(8, O2LAC),
                // r8: gfp transcription from the free promoter
                RateRule::linear(9, PLAC),
                // r9: leaky gfp transcription from the occupied promoter
                RateRule::linear(10, O2LAC),
                // r10: gfp mRNA degradation
                RateRule::linear(11, GFP_MRNA),
                // r11: GFP translation
                RateRule::linear(12, GFP_MRNA),
                // r12: dark GFP degradation
                RateRule::linear(13, GFP_DARK),
                // r13: GFP maturation
                RateRule::linear(14, GFP_DARK),
                // r14: mature GFP degradation, same constant as r12
                RateRule::linear(13, GFP_MATURE),
            ],
        )?;

        let stoichiometry = StoichiometryTable::new(
            &DIMS,
            vec![
                vec![SpeciesChange::new(LACI_MRNA, 1)],
                vec![SpeciesChange::new(LACI_MRNA, -1)],
                vec![SpeciesChange::new(LACI, 1)],
                vec![SpeciesChange::new(LACI, -1)],
                vec![
                    SpeciesChange::new(LACI, -2),
                    SpeciesChange::new(LACI2, 1),
                ],
                vec![
                    SpeciesChange::new(LACI, 2),
                    SpeciesChange::new(LACI2, -1),
                ],
                vec![
                    SpeciesChange::new(LACI2, -1),
                    SpeciesChange::new(PLAC, -1),
                    SpeciesChange::new(O2LAC, 1),
                ],
                vec![
                    SpeciesChange::new(LACI2, 1),
                    SpeciesChange::new(PLAC, 1),
                    SpeciesChange::new(O2LAC, -1),
                ],
                vec![SpeciesChange::new(GFP_MRNA, 1)],
                vec![SpeciesChange::new(GFP_MRNA, 1)],
                vec![SpeciesChange::new(GFP_MRNA, -1)],
                vec![SpeciesChange::new(GFP_DARK, 1)],
                vec![SpeciesChange::new(GFP_DARK, -1)],
                vec![
                    SpeciesChange::new(GFP_DARK, -1),
                    SpeciesChange::new(GFP_MATURE, 1),
                ],
                vec![SpeciesChange::new(GFP_MATURE, -1)],
            ],
        )?;

        let prior = PriorTable::new(
            &DIMS,
            vec![
                SpeciesPrior::UniformInt { bound: 6 },
                SpeciesPrior::UniformInt { bound: 11 },
                SpeciesPrior::Fixed(0.0),
                // Plasmid copy number: 1 + U[0,101) + U[0,101)
                SpeciesPrior::ShiftedDoubleUniform {
                    offset: 1,
                    bound: 101,
                },
                SpeciesPrior::Fixed(0.0),
                SpeciesPrior::Fixed(0.0),
                SpeciesPrior::Fixed(0.0),
                SpeciesPrior::Fixed(0.0),
            ],
        )?;

        debug!(
            "built {}: {} species, {} reactions",
            NAME, DIMS.species, DIMS.reactions
        );

        Ok(Self {
            rates,
            stoichiometry,
            prior,
        })
    }

    /// Rate rule table, one rule per reaction
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Sparse stoichiometric delta table
    pub fn stoichiometry(&self) -> &StoichiometryTable {
        &self.stoichiometry
    }

    /// Initial-condition prior, one entry per species
    pub fn prior(&self) -> &PriorTable {
        &self.prior
    }
}

impl ReactionNetwork for LacGfp8 {
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
        out[(0, species::GFP_MATURE)] = 1.0;
        Ok(())
    }
}
