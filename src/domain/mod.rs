//! Domain logic for the circularity calculator lives here.

pub mod disassembly;
pub mod indicators;
pub mod parameters;
pub mod product;
pub mod session;

pub use disassembly::{disassembly_potential, DdfFactor, DdfSelection, FactorModel};
pub use indicators::{
    dampening_factor, derive_flows, linear_flow_index, material_circularity, project_cost,
    utility_ratio, utility_ratio_from_ratios, DomainError, MaterialFlows,
};
pub use parameters::{DirectParams, FractionParams, ParameterSet, UtilitySelection};
pub use product::Product;
pub use session::{IndicatorSet, Session};
