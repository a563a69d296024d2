//! Mass-action rate rules and the per-network propensity table
//!
//! Each reaction channel's propensity is an algebraic rate law scaled by a
//! coefficient. Four law shapes cover the networks in this crate: zero-order
//! production, first-order conversion/decay, second-order self-pairing
//! (dimerization without replacement), and second-order association of two
//! distinct species. Coefficients are either a plain rate constant or an
//! affine input modulation over the parameter vector's input block.
//!
//! Tables are validated against [`NetworkDims`] when the model is built, so
//! the per-step evaluation loop runs without any index checks.

use crate::dims::NetworkDims;
use crate::error::{ModelError, Result, VectorRole};
use srn_math::{Float, Vector};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rate coefficient in front of a law
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Coefficient {
    /// Plain rate constant θ[index]
    Param {
        /// Index into the parameter vector
        index: usize,
    },
    /// Affine input modulation θ[base] + θ[gain] · θ[input]
    ///
    /// `input` addresses the input block of θ (index ≥ rate constant count
    /// by convention). The computed value is used as-is: a sufficiently
    /// negative input drives the coefficient, and with it the propensity,
    /// below zero, and nothing here detects that. Callers own the sign of
    /// the inputs they supply.
    InputScaled {
        /// Index of the base rate constant
        base: usize,
        /// Index of the gain applied to the input
        gain: usize,
        /// Index of the modulating input value
        input: usize,
    },
}

impl Coefficient {
    /// Parameter vector length this coefficient requires
    fn min_param_len(&self) -> usize {
        match *self {
            Coefficient::Param { index } => index + 1,
            Coefficient::InputScaled { base, gain, input } => base.max(gain).max(input) + 1,
        }
    }

    #[inline]
    fn eval(&self, params: &Vector) -> Float {
        match *self {
            Coefficient::Param { index } => params[index],
            Coefficient::InputScaled { base, gain, input } => {
                params[base] + params[gain] * params[input]
            }
        }
    }
}

/// Algebraic shape of a mass-action rate law
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RateLaw {
    /// Zero-order: c
    Constant,
    /// First-order: c · X_i
    Linear {
        /// Reactant species index
        species: usize,
    },
    /// Second-order self-pairing: c · X_i · (X_i − 1)
    ///
    /// Counts unordered reactant pairs drawn without replacement, the
    /// combinatorial form for dimerization events.
    SelfPairing {
        /// Dimerizing species index
        species: usize,
    },
    /// Second-order association of two distinct species: c · X_a · X_b
    Bimolecular {
        /// First reactant species index
        a: usize,
        /// Second reactant species index
        b: usize,
    },
}

impl RateLaw {
    /// State vector length this law requires
    fn min_state_len(&self) -> usize {
        match *self {
            RateLaw::Constant => 0,
            RateLaw::Linear { species } | RateLaw::SelfPairing { species } => species + 1,
            RateLaw::Bimolecular { a, b } => a.max(b) + 1,
        }
    }
}

/// One reaction channel's propensity rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RateRule {
    /// Coefficient in front of the law
    pub coefficient: Coefficient,
    /// Algebraic shape of the law
    pub law: RateLaw,
}

impl RateRule {
    /// Zero-order production at rate θ[param]
    pub const fn constant(param: usize) -> Self {
        Self {
            coefficient: Coefficient::Param { index: param },
            law: RateLaw::Constant,
        }
    }

    /// First-order law θ[param] · X_species
    pub const fn linear(param: usize, species: usize) -> Self {
        Self {
            coefficient: Coefficient::Param { index: param },
            law: RateLaw::Linear { species },
        }
    }

    /// Self-pairing law θ[param] · X_species · (X_species − 1)
    pub const fn self_pairing(param: usize, species: usize) -> Self {
        Self {
            coefficient: Coefficient::Param { index: param },
            law: RateLaw::SelfPairing { species },
        }
    }

    /// Bimolecular law θ[param] · X_a · X_b
    pub const fn bimolecular(param: usize, a: usize, b: usize) -> Self {
        Self {
            coefficient: Coefficient::Param { index: param },
            law: RateLaw::Bimolecular { a, b },
        }
    }

    /// First-order law with input-modulated coefficient
    /// (θ[base] + θ[gain] · θ[input]) · X_species
    pub const fn input_scaled_linear(
        base: usize,
        gain: usize,
        input: usize,
        species: usize,
    ) -> Self {
        Self {
            coefficient: Coefficient::InputScaled { base, gain, input },
            law: RateLaw::Linear { species },
        }
    }

    /// Evaluate the rule for one state/parameter pair
    ///
    /// Indices were validated at table construction; vector lengths are the
    /// caller's contract.
    #[inline]
    pub fn propensity(&self, state: &Vector, params: &Vector) -> Float {
        let c = self.coefficient.eval(params);
        match self.law {
            RateLaw::Constant => c,
            RateLaw::Linear { species } => c * state[species],
            RateLaw::SelfPairing { species } => {
                let x = state[species];
                c * x * (x - 1.0)
            }
            RateLaw::Bimolecular { a, b } => c * state[a] * state[b],
        }
    }

    fn check(&self, dims: &NetworkDims) -> Result<()> {
        let need = self.coefficient.min_param_len();
        if need > dims.param_len() {
            return Err(ModelError::dimension_mismatch(
                VectorRole::Parameters,
                need,
                dims.param_len(),
            ));
        }
        let need = self.law.min_state_len();
        if need > dims.species {
            return Err(ModelError::dimension_mismatch(
                VectorRole::State,
                need,
                dims.species,
            ));
        }
        Ok(())
    }
}

/// Validated table of rate rules, one per reaction channel
#[derive(Debug, Clone)]
pub struct RateTable {
    rules: Vec<RateRule>,
}

impl RateTable {
    /// Build a table, validating row count and every index against `dims`
    ///
    /// The table must carry exactly one rule per reaction, and no rule may
    /// reference a species or parameter past the lengths `dims` declares.
    /// Violations reuse the dimension-mismatch kind: the error reports the
    /// length the offending rule requires against the length provided.
    pub fn new(dims: &NetworkDims, rules: Vec<RateRule>) -> Result<Self> {
        if rules.len() != dims.reactions {
            return Err(ModelError::dimension_mismatch(
                VectorRole::Propensities,
                dims.reactions,
                rules.len(),
            ));
        }
        for rule in &rules {
            rule.check(dims)?;
        }
        Ok(Self { rules })
    }

    /// Number of reaction channels covered
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule for one reaction channel
    pub fn rule(&self, reaction: usize) -> Option<&RateRule> {
        self.rules.get(reaction)
    }

    /// Evaluate every rule into the caller's buffer
    ///
    /// The buffer length was checked by the trait front door; this loop
    /// performs no further validation and allocates nothing.
    #[inline]
    pub fn evaluate(&self, state: &Vector, params: &Vector, out: &mut Vector) {
        let out = out.data_mut();
        for (r, rule) in self.rules.iter().enumerate() {
            out[r] = rule.propensity(state, params);
        }
    }
}
