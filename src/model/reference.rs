//! Reference pricing data: materials, edge banding, processing fees and
//! per-panel service requests.

use crate::config::{DEFAULT_CURRENCY, MM2_PER_M2};
use serde::{Deserialize, Serialize};

/// Stock board material with its pricing policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialInfo {
    /// Catalog id, matched against `OptimizationResult::material_id`.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Board width in mm.
    pub width_mm: f64,
    /// Board length in mm.
    pub length_mm: f64,
    /// Stock board (priced per board cut) or made to order (priced per lot).
    pub on_stock: bool,
    /// Board utilization threshold (0-1) for full board charging.
    pub usage_limit: f64,
    /// Net price per m².
    pub price_per_sqm: f64,
    /// VAT rate as a fraction (0.27 = 27%).
    pub vat_rate: f64,
    /// Multiplier applied to the used area of under-threshold boards.
    pub waste_multi: f64,
    /// Currency code.
    pub currency: String,
}

impl MaterialInfo {
    /// Board area in mm².
    pub fn board_area_mm2(&self) -> f64 {
        self.width_mm * self.length_mm
    }

    /// Board area in m².
    pub fn board_area_m2(&self) -> f64 {
        self.board_area_mm2() / MM2_PER_M2
    }
}

impl Default for MaterialInfo {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            width_mm: 0.0,
            length_mm: 0.0,
            on_stock: true,
            usage_limit: crate::config::DEFAULT_USAGE_LIMIT,
            price_per_sqm: 0.0,
            vat_rate: crate::config::DEFAULT_VAT_RATE,
            waste_multi: crate::config::DEFAULT_WASTE_MULTI,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

/// Edge banding material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeMaterialInfo {
    /// Name, the grouping key for panel edges.
    pub name: String,
    /// Net price per metre.
    pub price_per_m: f64,
    /// VAT rate as a fraction.
    pub vat_rate: f64,
    /// Extra length added per edge piece for trimming.
    pub overhang_mm: f64,
    /// Currency code.
    pub currency: String,
}

/// One edge banding requirement: a panel side length and how many panels
/// carry it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelEdge {
    /// Edge material name.
    pub edge_material_name: String,
    /// Length of one edge in mm.
    pub length_mm: f64,
    /// Number of panels using this edge.
    pub quantity: u32,
}

impl PanelEdge {
    /// Create an edge row.
    pub fn new(edge_material_name: impl Into<String>, length_mm: f64, quantity: u32) -> Self {
        Self {
            edge_material_name: edge_material_name.into(),
            length_mm,
            quantity,
        }
    }
}

/// Global processing fee table: cutting plus the extra panel services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CuttingFeeInfo {
    /// Net fee per metre of saw cut.
    pub fee_per_meter: f64,
    /// Net fee per drilled hinge hole.
    #[serde(rename = "panthelyfuras_fee_per_hole")]
    pub drilling_fee_per_hole: f64,
    /// Net fee per m² of doubled (laminated together) panel.
    #[serde(rename = "duplungolas_fee_per_sqm")]
    pub doubling_fee_per_sqm: f64,
    /// Net fee per angle-cut panel.
    #[serde(rename = "szogvagas_fee_per_panel")]
    pub angle_cut_fee_per_panel: f64,
    /// VAT rate shared by cutting and all services.
    pub vat_rate: f64,
    /// Currency code.
    pub currency: String,
}

/// A distinct panel specification and the services it requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelWithServices {
    /// Panel width in mm.
    pub width_mm: f64,
    /// Panel height in mm.
    pub height_mm: f64,
    /// Number of identical panels.
    pub quantity: u32,
    /// Hinge holes drilled per single panel.
    #[serde(rename = "panthelyfuras_quantity", default)]
    pub drill_holes: u32,
    /// Panel is doubled.
    #[serde(rename = "duplungolas", default)]
    pub doubling: bool,
    /// Panel is angle cut.
    #[serde(rename = "szogvagas", default)]
    pub angle_cut: bool,
}

impl PanelWithServices {
    /// Create a panel spec without services.
    pub fn new(width_mm: f64, height_mm: f64, quantity: u32) -> Self {
        Self {
            width_mm,
            height_mm,
            quantity,
            drill_holes: 0,
            doubling: false,
            angle_cut: false,
        }
    }

    /// Area of a single panel in m².
    pub fn area_m2(&self) -> f64 {
        self.width_mm * self.height_mm / MM2_PER_M2
    }
}
