//! Circularity indicator formulas.
//!
//! Implements the Ellen MacArthur Foundation material circularity model:
//! linear flow index, utility ratio, dampening factor and the MCI itself,
//! plus the project cost estimate attached to each parameterization.

use thiserror::Error;

use super::parameters::{FractionParams, ParameterSet, UtilitySelection};

/// Unit price of virgin material (USD per t).
const COST_PER_UNIT_VIRGIN: f64 = 12.0;
/// Unit price of non-virgin material in the direct-mode estimate (USD per t).
const COST_PER_UNIT_OTHER: f64 = 6.0;
/// Unit price of recycled feedstock in the fraction-mode estimate (USD per t).
const COST_PER_UNIT_RECYCLED: f64 = 9.0;
/// Unit price of reused feedstock in the fraction-mode estimate (USD per t).
const COST_PER_UNIT_REUSED: f64 = 4.0;
/// Fraction-mode costs are normalized to this reference mass (t).
const REFERENCE_MASS: f64 = 1000.0;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{name} must be a non-negative finite number, got {value}")]
    InvalidInput { name: &'static str, value: f64 },
    #[error("mass balance denominator must be positive, got {0}")]
    NonPositiveDenominator(f64),
    #[error("average utility product is zero")]
    ZeroAverageUtility,
    #[error("utility ratio X is zero")]
    ZeroUtility,
    #[error("recycling efficiency E is zero")]
    ZeroEfficiency,
    #[error("project cost came out negative ({0})")]
    NegativeCost(f64),
}

pub(crate) fn ensure_non_negative(name: &'static str, value: f64) -> Result<(), DomainError> {
    if !value.is_finite() || value < 0.0 {
        return Err(DomainError::InvalidInput { name, value });
    }
    Ok(())
}

/// Linear Flow Index: the share of the product's material flow that is
/// linear (virgin in, waste out).
pub fn linear_flow_index(v: f64, w: f64, m: f64, w_f: f64, w_c: f64) -> Result<f64, DomainError> {
    for (name, value) in [("V", v), ("W", w), ("M", m), ("W_f", w_f), ("W_c", w_c)] {
        ensure_non_negative(name, value)?;
    }
    let denominator = 2.0 * m + (w_f - w_c) / 2.0;
    if denominator <= 0.0 {
        return Err(DomainError::NonPositiveDenominator(denominator));
    }
    Ok((v + w) / denominator)
}

/// Utility ratio X of the product against the industry-average product.
///
/// Factors are checked in the order mass, lifetime, functional units, and
/// only the first unselected factor is neutralized (instance and average
/// both forced to 1) even when several are unselected at once.
pub fn utility_ratio(
    l: f64,
    l_av: f64,
    u: f64,
    u_av: f64,
    m: f64,
    m_av: f64,
    selection: &UtilitySelection,
) -> Result<f64, DomainError> {
    for (name, value) in [
        ("L", l),
        ("L_av", l_av),
        ("U", u),
        ("U_av", u_av),
        ("M", m),
        ("M_av", m_av),
    ] {
        ensure_non_negative(name, value)?;
    }

    let (mut l, mut l_av, mut u, mut u_av, mut m, mut m_av) = (l, l_av, u, u_av, m, m_av);
    if !selection.mass {
        m = 1.0;
        m_av = 1.0;
    } else if !selection.lifetime {
        l = 1.0;
        l_av = 1.0;
    } else if !selection.functional_units {
        u = 1.0;
        u_av = 1.0;
    }

    let denominator = l_av * u_av * m_av;
    if denominator == 0.0 {
        return Err(DomainError::ZeroAverageUtility);
    }
    Ok((l * u * m) / denominator)
}

/// Utility ratio X from percentage ratios against the average product
/// (fraction mode carries ratios instead of per-factor values).
pub fn utility_ratio_from_ratios(
    m_ratio: f64,
    l_ratio: f64,
    u_ratio: f64,
) -> Result<f64, DomainError> {
    for (name, value) in [
        ("M_ratio", m_ratio),
        ("L_ratio", l_ratio),
        ("U_ratio", u_ratio),
    ] {
        ensure_non_negative(name, value)?;
    }
    Ok((m_ratio / 100.0) * (l_ratio / 100.0) * (u_ratio / 100.0))
}

/// Utility dampening factor F(X) = 0.9 / X.
pub fn dampening_factor(x: f64) -> Result<f64, DomainError> {
    if x == 0.0 {
        return Err(DomainError::ZeroUtility);
    }
    Ok(0.9 / x)
}

/// Material Circularity Indicator, clamped below at zero.
pub fn material_circularity(lfi: f64, f: f64) -> f64 {
    (1.0 - lfi * f).max(0.0)
}

/// Material flows derived from the fraction parameterization, expressed in
/// the units the direct parameterization uses.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaterialFlows {
    /// Virgin feedstock mass.
    pub virgin: f64,
    /// Recycling waste before production.
    pub waste_f: f64,
    /// Recycling waste after collection.
    pub waste_c: f64,
    /// Uncollected waste plus half of the recycling losses.
    pub waste_total: f64,
}

/// Derive the material flows behind the fraction parameterization. Percent
/// inputs are scaled to fractions here.
pub fn derive_flows(params: &FractionParams) -> Result<MaterialFlows, DomainError> {
    params.validate()?;

    let f_r = params.f_r / 100.0;
    let f_u = params.f_u / 100.0;
    let c_r = params.c_r / 100.0;
    let c_u = params.c_u / 100.0;
    let e = params.e / 100.0;

    if e == 0.0 {
        return Err(DomainError::ZeroEfficiency);
    }

    let virgin = params.mass * (1.0 - f_r - f_u);
    if virgin < 0.0 {
        // F_R + F_U above 100% would push the MCI past 1; refuse instead of
        // clamping.
        return Err(DomainError::InvalidInput {
            name: "F_R + F_U",
            value: params.f_r + params.f_u,
        });
    }

    let waste_zero = params.mass * (1.0 - c_r - c_u);
    let waste_f = params.mass * ((1.0 - e) / e) * f_r;
    let waste_c = params.mass * (1.0 - e) * c_r;
    let waste_total = waste_zero + (waste_f + waste_c) / 2.0;

    Ok(MaterialFlows {
        virgin,
        waste_f,
        waste_c,
        waste_total,
    })
}

/// Project cost estimate for the active parameterization.
///
/// Direct mode prices the virgin share against everything else; fraction
/// mode prices the feedstock split of a fixed reference mass.
pub fn project_cost(params: &ParameterSet) -> Result<f64, DomainError> {
    params.validate()?;
    let cost = match params {
        ParameterSet::Direct(p) => {
            p.v * COST_PER_UNIT_VIRGIN + (p.m - p.v) * COST_PER_UNIT_OTHER
        }
        ParameterSet::Fraction(p) => {
            let f_r = p.f_r / 100.0;
            let f_u = p.f_u / 100.0;
            REFERENCE_MASS
                * (f_r * COST_PER_UNIT_RECYCLED
                    + f_u * COST_PER_UNIT_REUSED
                    + (1.0 - f_r - f_u) * COST_PER_UNIT_VIRGIN)
        }
    };
    if cost < 0.0 {
        return Err(DomainError::NegativeCost(cost));
    }
    Ok(cost)
}
