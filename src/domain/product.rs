//! Product records tracked in the building store.

use serde::{Deserialize, Serialize};

/// Per-product shares of the four circularity strategies. Names carry no
/// uniqueness constraint; rows are kept in insertion order and never updated
/// in place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub virgin: f64,
    pub reused: f64,
    pub recycled: f64,
    pub repurposed: f64,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        virgin: f64,
        reused: f64,
        recycled: f64,
        repurposed: f64,
    ) -> Self {
        Self {
            name: name.into(),
            virgin,
            reused,
            recycled,
            repurposed,
        }
    }

    /// True when every strategy share is exactly zero; such rows are the
    /// cleanup job's targets.
    pub fn is_all_zero(&self) -> bool {
        self.virgin == 0.0 && self.reused == 0.0 && self.recycled == 0.0 && self.repurposed == 0.0
    }

    /// (strategy label, share) pairs in table order, for per-product charts.
    pub fn strategy_shares(&self) -> [(&'static str, f64); 4] {
        [
            ("Virgin", self.virgin),
            ("Reused", self.reused),
            ("Recycled", self.recycled),
            ("Repurposed", self.repurposed),
        ]
    }

    pub(crate) fn non_finite_field(&self) -> Option<(&'static str, f64)> {
        self.strategy_shares()
            .into_iter()
            .find(|(_, value)| !value.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_zero_detection_is_exact() {
        assert!(Product::new("Product 4", 0.0, 0.0, 0.0, 0.0).is_all_zero());
        assert!(!Product::new("Product 5", 0.0, 0.0, 1e-9, 0.0).is_all_zero());
    }

    #[test]
    fn non_finite_fields_are_reported_by_name() {
        let product = Product::new("Bad", 0.1, f64::INFINITY, 0.2, 0.3);
        assert_eq!(product.non_finite_field().map(|(name, _)| name), Some("Reused"));
        assert!(Product::new("Ok", 0.1, 0.2, 0.3, 0.4).non_finite_field().is_none());
    }
}
