//! Circularity and disassembly indicators for building products.
//!
//! Computes the Ellen MacArthur Foundation material circularity indicator
//! and the Durmisevic disassembly potential from user-supplied parameters,
//! and aggregates both into a building-level score. Presentation layers
//! read the [`Session`] accessors and the [`ProductStore`] table; every
//! derived value is recomputed from current state on each read, so no stale
//! result can outlive an input change.

pub mod domain;
pub mod infra;

pub use domain::{
    DdfFactor, DdfSelection, DirectParams, DomainError, FactorModel, FractionParams, IndicatorSet,
    ParameterSet, Product, Session, UtilitySelection,
};
pub use infra::{maintenance, ProductStore, StoreError};
