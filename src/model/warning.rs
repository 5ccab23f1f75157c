//! Diagnostics collected while pricing a quote.

use serde::{Deserialize, Serialize};

/// A data gap the calculator tolerated instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuoteWarning {
    /// An optimization result references a material missing from the catalog.
    MaterialNotFound { material_id: String },
    /// A panel edge references an unknown edge material.
    EdgeMaterialNotFound {
        material_id: String,
        edge_material_name: String,
    },
    /// A material has a zero or negative board area.
    ZeroBoardArea { material_id: String },
    /// The material catalog is empty, so the quote has no currency.
    EmptyCatalog,
    /// Catalog materials use more than one currency.
    MixedCurrencies { reported: String, other: String },
}

impl std::fmt::Display for QuoteWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuoteWarning::MaterialNotFound { material_id } => {
                write!(f, "Material {} not found in catalog, skipped", material_id)
            }
            QuoteWarning::EdgeMaterialNotFound {
                material_id,
                edge_material_name,
            } => write!(
                f,
                "Material {}: edge material '{}' not found, not charged",
                material_id, edge_material_name
            ),
            QuoteWarning::ZeroBoardArea { material_id } => {
                write!(f, "Material {}: board area is zero", material_id)
            }
            QuoteWarning::EmptyCatalog => write!(f, "Material catalog is empty"),
            QuoteWarning::MixedCurrencies { reported, other } => write!(
                f,
                "Catalog mixes currencies: quote reported in {}, but {} also present",
                reported, other
            ),
        }
    }
}
