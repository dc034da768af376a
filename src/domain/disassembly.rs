//! Durmisevic disassembly scoring.
//!
//! Each determining disassembly factor (DDF) maps a qualitative category to
//! a fixed ordinal score; the disassembly potential is the equally weighted
//! mean over the factors the active model enables.

use serde::{Deserialize, Serialize};

/// One qualitative disassembly dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DdfFactor {
    Accessibility,
    ConnectionType,
    Independency,
    FabricationMethod,
    RelationalPattern,
}

impl DdfFactor {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Accessibility => "Accessibility to connection",
            Self::ConnectionType => "Type of connection",
            Self::Independency => "Independency",
            Self::FabricationMethod => "Method of fabrication",
            Self::RelationalPattern => "Type of relational pattern",
        }
    }

    /// Ordinal score table for this dimension, best to worst.
    pub fn score_table(&self) -> &'static [(&'static str, f64)] {
        match self {
            Self::Accessibility => &[
                ("Accessible", 1.0),
                (
                    "Accessible with additional operation which causes no damage",
                    0.8,
                ),
                (
                    "Accessible with additional operation which is reparable damage",
                    0.6,
                ),
                (
                    "Accessible with additional operation which causes damage",
                    0.4,
                ),
                ("Not accessible, total damage", 0.1),
            ],
            Self::ConnectionType => &[
                ("Accessory external connection or connection system", 1.0),
                ("Direct connection with additional fixing devices", 0.8),
                ("Direct integral connection with inserts (pin)", 0.6),
                ("Filled soft chemical connection", 0.2),
                ("Filled hard chemical connection", 0.1),
                ("Direct chemical connection", 0.1),
            ],
            Self::Independency => &[
                ("Modular zoning", 1.0),
                ("Planned interpenetrating", 0.8),
                ("Planned for one solution", 0.6),
                ("Unplanned interpenetrating", 0.2),
                ("Total dependence", 0.1),
            ],
            Self::FabricationMethod => &[
                ("Pre-made geometry", 1.0),
                ("Half standardized geometry", 0.8),
                ("Geometry made on construction site", 0.6),
            ],
            Self::RelationalPattern => &[
                ("One or two connections", 1.0),
                ("Three connections", 0.8),
                ("Four connections", 0.6),
                ("Five or more connections", 0.2),
            ],
        }
    }

    /// Score for a selected category label. Unknown or unset selections
    /// score zero rather than failing.
    pub fn score(&self, selection: Option<&str>) -> f64 {
        let Some(selection) = selection else {
            return 0.0;
        };
        self.score_table()
            .iter()
            .find(|(label, _)| *label == selection)
            .map(|(_, score)| *score)
            .unwrap_or(0.0)
    }
}

/// Which DDF dimensions feed the disassembly potential.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FactorModel {
    /// All five Durmisevic factors, equally weighted.
    #[default]
    Full,
    /// Accessibility and connection type only.
    Reduced,
}

impl FactorModel {
    pub fn factors(&self) -> &'static [DdfFactor] {
        match self {
            Self::Full => &[
                DdfFactor::Accessibility,
                DdfFactor::ConnectionType,
                DdfFactor::Independency,
                DdfFactor::FabricationMethod,
                DdfFactor::RelationalPattern,
            ],
            Self::Reduced => &[DdfFactor::Accessibility, DdfFactor::ConnectionType],
        }
    }
}

/// Selected category label per dimension. `None` means nothing picked yet.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DdfSelection {
    pub accessibility: Option<String>,
    pub connection_type: Option<String>,
    pub independency: Option<String>,
    pub fabrication_method: Option<String>,
    pub relational_pattern: Option<String>,
}

impl DdfSelection {
    pub fn get(&self, factor: DdfFactor) -> Option<&str> {
        match factor {
            DdfFactor::Accessibility => self.accessibility.as_deref(),
            DdfFactor::ConnectionType => self.connection_type.as_deref(),
            DdfFactor::Independency => self.independency.as_deref(),
            DdfFactor::FabricationMethod => self.fabrication_method.as_deref(),
            DdfFactor::RelationalPattern => self.relational_pattern.as_deref(),
        }
    }

    /// (factor, score) rows for the factors the model enables, in table
    /// order, for display alongside the potential.
    pub fn scores(&self, model: FactorModel) -> Vec<(DdfFactor, f64)> {
        model
            .factors()
            .iter()
            .map(|&factor| (factor, factor.score(self.get(factor))))
            .collect()
    }
}

/// Mean DDF score over the enabled factors; every factor carries equal
/// weight.
pub fn disassembly_potential(selection: &DdfSelection, model: FactorModel) -> f64 {
    let factors = model.factors();
    let sum: f64 = factors
        .iter()
        .map(|&factor| factor.score(selection.get(factor)))
        .sum();
    sum / factors.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_categories_map_to_their_scores() {
        assert_eq!(DdfFactor::Accessibility.score(Some("Accessible")), 1.0);
        assert_eq!(
            DdfFactor::ConnectionType.score(Some("Direct chemical connection")),
            0.1
        );
        assert_eq!(DdfFactor::Independency.score(Some("Modular zoning")), 1.0);
        assert_eq!(
            DdfFactor::RelationalPattern.score(Some("Five or more connections")),
            0.2
        );
    }

    #[test]
    fn unknown_or_unset_categories_score_zero() {
        assert_eq!(DdfFactor::Accessibility.score(Some("Bolted somehow")), 0.0);
        assert_eq!(DdfFactor::FabricationMethod.score(None), 0.0);
    }

    #[test]
    fn scoring_is_deterministic() {
        let selection = Some("Half standardized geometry");
        let first = DdfFactor::FabricationMethod.score(selection);
        let second = DdfFactor::FabricationMethod.score(selection);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_selection_yields_zero_potential() {
        let selection = DdfSelection::default();
        assert_eq!(disassembly_potential(&selection, FactorModel::Full), 0.0);
        assert_eq!(disassembly_potential(&selection, FactorModel::Reduced), 0.0);
    }

    #[test]
    fn best_case_full_model_scores_one() {
        let selection = DdfSelection {
            accessibility: Some("Accessible".into()),
            connection_type: Some("Accessory external connection or connection system".into()),
            independency: Some("Modular zoning".into()),
            fabrication_method: Some("Pre-made geometry".into()),
            relational_pattern: Some("One or two connections".into()),
        };
        assert_eq!(disassembly_potential(&selection, FactorModel::Full), 1.0);
    }

    #[test]
    fn reduced_model_averages_two_factors() {
        let selection = DdfSelection {
            accessibility: Some("Accessible".into()),
            connection_type: Some("Direct chemical connection".into()),
            ..DdfSelection::default()
        };
        let potential = disassembly_potential(&selection, FactorModel::Reduced);
        assert!((potential - 0.55).abs() < 1e-12);

        // The other three factors do not contribute to the reduced model.
        assert_eq!(selection.scores(FactorModel::Reduced).len(), 2);
        assert_eq!(selection.scores(FactorModel::Full).len(), 5);
    }
}
