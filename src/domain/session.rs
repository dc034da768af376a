//! Session state for one calculator run.
//!
//! The session is the explicit context every computation reads from; there
//! is no process-wide state. Indicators are cheap, so every accessor
//! recomputes from the current inputs instead of caching.

use serde::{Deserialize, Serialize};

use super::disassembly::{disassembly_potential, DdfSelection, FactorModel};
use super::indicators::{
    dampening_factor, derive_flows, linear_flow_index, material_circularity, project_cost,
    utility_ratio, utility_ratio_from_ratios, DomainError,
};
use super::parameters::{DirectParams, FractionParams, ParameterSet};

/// One consistent snapshot of all derived indicators.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorSet {
    pub lfi: f64,
    pub mci: f64,
    pub disassembly_potential: f64,
    pub bci: f64,
    pub project_cost: f64,
}

/// The mutable inputs of the calculator plus read accessors for every
/// derived indicator.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub params: ParameterSet,
    pub ddf: DdfSelection,
    pub factor_model: FactorModel,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore the parameter defaults of the active mode and clear the DDF
    /// selections. The factor model is configuration, not input, and stays.
    pub fn reset(&mut self) {
        self.params = match self.params {
            ParameterSet::Direct(_) => ParameterSet::Direct(DirectParams::default()),
            ParameterSet::Fraction(_) => ParameterSet::Fraction(FractionParams::default()),
        };
        self.ddf = DdfSelection::default();
    }

    /// Linear Flow Index of the current parameters.
    pub fn lfi(&self) -> Result<f64, DomainError> {
        match &self.params {
            ParameterSet::Direct(p) => linear_flow_index(p.v, p.w, p.m, p.w_f, p.w_c),
            ParameterSet::Fraction(p) => {
                let flows = derive_flows(p)?;
                linear_flow_index(
                    flows.virgin,
                    flows.waste_total,
                    p.mass,
                    flows.waste_f,
                    flows.waste_c,
                )
            }
        }
    }

    /// Material Circularity Indicator of the current parameters.
    pub fn mci(&self) -> Result<f64, DomainError> {
        let lfi = self.lfi()?;
        let x = match &self.params {
            ParameterSet::Direct(p) => {
                utility_ratio(p.l, p.l_av, p.u, p.u_av, p.m, p.m_av, &p.utility)?
            }
            ParameterSet::Fraction(p) => {
                utility_ratio_from_ratios(p.m_ratio, p.l_ratio, p.u_ratio)?
            }
        };
        let f = dampening_factor(x)?;
        Ok(material_circularity(lfi, f))
    }

    /// Mean DDF score over the enabled factors.
    pub fn disassembly_potential(&self) -> f64 {
        disassembly_potential(&self.ddf, self.factor_model)
    }

    /// Building Circularity Indicator: disassembly potential times MCI.
    pub fn bci(&self) -> Result<f64, DomainError> {
        Ok(self.disassembly_potential() * self.mci()?)
    }

    /// Project cost estimate for the active parameterization.
    pub fn project_cost(&self) -> Result<f64, DomainError> {
        project_cost(&self.params)
    }

    /// All derived indicators computed from the same input state.
    pub fn indicators(&self) -> Result<IndicatorSet, DomainError> {
        let lfi = self.lfi()?;
        let mci = self.mci()?;
        let disassembly_potential = self.disassembly_potential();
        Ok(IndicatorSet {
            lfi,
            mci,
            disassembly_potential,
            bci: disassembly_potential * mci,
            project_cost: self.project_cost()?,
        })
    }
}
