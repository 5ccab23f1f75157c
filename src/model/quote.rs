//! Quote output tree: per-board, per-edge, cutting and service line items
//! rolled up per material and for the whole quote.

use super::QuoteWarning;
use serde::{Deserialize, Serialize};

/// How a board line was charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingMethod {
    /// Used area times the waste multiplier.
    PanelArea,
    /// The whole board.
    FullBoard,
}

impl std::fmt::Display for PricingMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PricingMethod::PanelArea => write!(f, "panel_area"),
            PricingMethod::FullBoard => write!(f, "full_board"),
        }
    }
}

/// Price of one physical board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardPricing {
    pub board_id: u32,
    /// Board utilization in percent.
    pub usage_percentage: f64,
    /// Area actually covered by parts, m².
    pub area_m2: f64,
    /// Area billed, m².
    pub charged_area_m2: f64,
    pub net_price: f64,
    pub vat_amount: f64,
    pub gross_price: f64,
    pub pricing_method: PricingMethod,
}

/// Price of one edge banding material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeMaterialPricing {
    pub edge_material_name: String,
    /// Number of edge pieces.
    pub total_quantity: u64,
    /// Banded length without overhang, m.
    pub total_length_m: f64,
    /// Overhang allowance, m.
    pub overhang_length_m: f64,
    /// Billed length, m.
    pub length_with_overhang_m: f64,
    pub price_per_m: f64,
    pub net_price: f64,
    pub vat_amount: f64,
    pub gross_price: f64,
    pub currency: String,
}

/// Saw cutting charge for one material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CuttingCostPricing {
    pub total_cut_length_m: f64,
    pub fee_per_meter: f64,
    pub net_price: f64,
    pub vat_amount: f64,
    pub gross_price: f64,
    pub currency: String,
}

/// Unit a service is billed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceUnit {
    /// Pieces (holes or panels).
    #[serde(rename = "db")]
    Piece,
    /// Square metres.
    #[serde(rename = "m2")]
    SquareMeter,
}

impl ServiceUnit {
    /// Short display label.
    pub fn label(&self) -> &'static str {
        match self {
            ServiceUnit::Piece => "db",
            ServiceUnit::SquareMeter => "m2",
        }
    }
}

/// One priced panel service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServicePricing {
    pub quantity: f64,
    pub unit: ServiceUnit,
    pub unit_price: f64,
    pub net_price: f64,
    pub vat_amount: f64,
    pub gross_price: f64,
}

/// Drilling, doubling and angle cutting for one material.
///
/// A service is `None` when nothing requested it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdditionalServicesPricing {
    #[serde(rename = "panthelyfuras")]
    pub drilling: Option<ServicePricing>,
    #[serde(rename = "duplungolas")]
    pub doubling: Option<ServicePricing>,
    #[serde(rename = "szogvagas")]
    pub angle_cut: Option<ServicePricing>,
    pub total_net: f64,
    pub total_vat: f64,
    pub total_gross: f64,
    pub currency: String,
}

impl AdditionalServicesPricing {
    /// Iterate over the services that were priced, with their wire names.
    pub fn priced(&self) -> impl Iterator<Item = (&'static str, &ServicePricing)> {
        [
            ("panthelyfuras", self.drilling.as_ref()),
            ("duplungolas", self.doubling.as_ref()),
            ("szogvagas", self.angle_cut.as_ref()),
        ]
        .into_iter()
        .filter_map(|(name, service)| service.map(|s| (name, s)))
    }
}

/// Fully itemized price of one material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialPricing {
    pub material_id: String,
    pub material_name: String,
    pub on_stock: bool,
    pub currency: String,

    pub boards: Vec<BoardPricing>,
    pub total_material_net: f64,
    pub total_material_vat: f64,
    pub total_material_gross: f64,

    pub edge_materials: Vec<EdgeMaterialPricing>,
    pub total_edge_net: f64,
    pub total_edge_vat: f64,
    pub total_edge_gross: f64,

    pub cutting_cost: Option<CuttingCostPricing>,
    pub total_cutting_net: f64,
    pub total_cutting_vat: f64,
    pub total_cutting_gross: f64,

    pub additional_services: Option<AdditionalServicesPricing>,
    pub total_services_net: f64,
    pub total_services_vat: f64,
    pub total_services_gross: f64,

    pub total_net: f64,
    pub total_vat: f64,
    pub total_gross: f64,
}

impl MaterialPricing {
    /// Number of board lines (physical boards billed).
    pub fn board_count(&self) -> usize {
        self.boards.len()
    }
}

/// Complete quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteResult {
    pub materials: Vec<MaterialPricing>,
    pub grand_total_net: f64,
    pub grand_total_vat: f64,
    pub grand_total_gross: f64,
    /// Currency of the first catalog material.
    pub currency: String,
    /// Permissive decisions taken while pricing.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<QuoteWarning>,
}

impl QuoteResult {
    /// Total number of boards billed across all materials.
    pub fn total_boards(&self) -> usize {
        self.materials.iter().map(MaterialPricing::board_count).sum()
    }

    /// Find the pricing of a material by id.
    pub fn material(&self, material_id: &str) -> Option<&MaterialPricing> {
        self.materials.iter().find(|m| m.material_id == material_id)
    }
}
