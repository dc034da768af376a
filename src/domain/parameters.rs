//! Model inputs for the circularity calculator.

use serde::{Deserialize, Serialize};

use super::indicators::{ensure_non_negative, DomainError};

/// Utility factors the user has data for. Unselected factors are neutralized
/// when the utility ratio is computed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtilitySelection {
    pub mass: bool,
    pub lifetime: bool,
    pub functional_units: bool,
}

impl Default for UtilitySelection {
    fn default() -> Self {
        Self {
            mass: true,
            lifetime: true,
            functional_units: true,
        }
    }
}

impl UtilitySelection {
    pub fn all() -> Self {
        Self::default()
    }
}

/// Direct material-flow parameterization, fed straight from the input
/// surface's sliders.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DirectParams {
    /// Product mass (t).
    pub m: f64,
    /// Virgin material mass (t).
    pub v: f64,
    /// Total waste (t).
    pub w: f64,
    /// Recycling waste before production (t).
    pub w_f: f64,
    /// Recycling waste after collection (t).
    pub w_c: f64,
    /// Product lifetime (yr).
    pub l: f64,
    /// Average product lifetime (yr).
    pub l_av: f64,
    /// Product functional units.
    pub u: f64,
    /// Average product functional units.
    pub u_av: f64,
    /// Average product mass (t).
    pub m_av: f64,
    pub utility: UtilitySelection,
}

impl Default for DirectParams {
    fn default() -> Self {
        Self {
            m: 50.0,
            v: 50.0,
            w: 50.0,
            w_f: 50.0,
            w_c: 50.0,
            l: 50.0,
            l_av: 50.0,
            u: 50.0,
            u_av: 50.0,
            m_av: 50.0,
            utility: UtilitySelection::default(),
        }
    }
}

impl DirectParams {
    /// Reject negative or non-finite inputs. Range clamping stays with the
    /// input surface; the core only refuses values no slider can produce.
    pub fn validate(&self) -> Result<(), DomainError> {
        for (name, value) in [
            ("M", self.m),
            ("V", self.v),
            ("W", self.w),
            ("W_f", self.w_f),
            ("W_c", self.w_c),
            ("L", self.l),
            ("L_av", self.l_av),
            ("U", self.u),
            ("U_av", self.u_av),
            ("M_av", self.m_av),
        ] {
            ensure_non_negative(name, value)?;
        }
        Ok(())
    }
}

/// Fraction-based parameterization. Recycling and collection shares come in
/// as percentages in [0, 100]; the utility ratios as percentages of the
/// average product (100 = parity).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FractionParams {
    /// Recycled feedstock share of the product input (%).
    pub f_r: f64,
    /// Reused feedstock share of the product input (%).
    pub f_u: f64,
    /// Share collected for recycling at end of life (%).
    pub c_r: f64,
    /// Share collected for reuse at end of life (%).
    pub c_u: f64,
    /// Recycling process efficiency (%).
    pub e: f64,
    /// Product mass against the average product (%).
    pub m_ratio: f64,
    /// Product lifetime against the average product (%).
    pub l_ratio: f64,
    /// Functional units against the average product (%).
    pub u_ratio: f64,
    /// Product mass (t).
    pub mass: f64,
}

impl Default for FractionParams {
    fn default() -> Self {
        Self {
            f_r: 0.0,
            f_u: 0.0,
            c_r: 0.0,
            c_u: 0.0,
            e: 95.0,
            m_ratio: 100.0,
            l_ratio: 100.0,
            u_ratio: 100.0,
            mass: 100.0,
        }
    }
}

impl FractionParams {
    /// Reject negative or non-finite inputs; see [`DirectParams::validate`].
    pub fn validate(&self) -> Result<(), DomainError> {
        for (name, value) in [
            ("F_R", self.f_r),
            ("F_U", self.f_u),
            ("C_R", self.c_r),
            ("C_U", self.c_u),
            ("E", self.e),
            ("M_ratio", self.m_ratio),
            ("L_ratio", self.l_ratio),
            ("U_ratio", self.u_ratio),
            ("M", self.mass),
        ] {
            ensure_non_negative(name, value)?;
        }
        Ok(())
    }
}

/// Active parameterization. The two modes carry incompatible flow and cost
/// formulas, so the choice stays explicit instead of being merged into one
/// ambiguous set of fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ParameterSet {
    Direct(DirectParams),
    Fraction(FractionParams),
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self::Direct(DirectParams::default())
    }
}

impl ParameterSet {
    pub fn validate(&self) -> Result<(), DomainError> {
        match self {
            Self::Direct(params) => params.validate(),
            Self::Fraction(params) => params.validate(),
        }
    }
}
