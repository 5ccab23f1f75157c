//! Loosely typed reference rows as they come out of the database, and their
//! conversion into the typed model.
//!
//! This is the only place where missing columns receive defaults. Numeric
//! columns accept JSON numbers or numeric strings; identity columns are
//! required.

use crate::config::{DEFAULT_CURRENCY, DEFAULT_USAGE_LIMIT, DEFAULT_VAT_RATE, DEFAULT_WASTE_MULTI};
use crate::error::{QuoteError, Result};
use crate::model::{
    CuttingFeeInfo, EdgeMaterialInfo, MaterialInfo, OptimizationMetrics, OptimizationResult,
    PanelEdge, PanelWithServices, Placement,
};
use serde::Deserialize;

/// A numeric column: a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumberLike {
    Number(f64),
    Text(String),
}

/// A boolean column: a JSON bool, 0/1, or "true"/"false".
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FlagLike {
    Bool(bool),
    Number(i64),
    Text(String),
}

/// An identity column: a string or an integer key.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum KeyLike {
    Text(String),
    Number(i64),
}

impl KeyLike {
    fn into_key(self) -> String {
        match self {
            KeyLike::Text(s) => s,
            KeyLike::Number(n) => n.to_string(),
        }
    }
}

fn invalid(field: &str, expected: &str, value: impl Into<String>) -> QuoteError {
    QuoteError::InvalidValue {
        field: field.to_string(),
        expected: expected.to_string(),
        value: value.into(),
    }
}

/// Read a numeric column, falling back to `default` when absent.
pub fn number(field: &str, value: Option<NumberLike>, default: f64) -> Result<f64> {
    match value {
        None => Ok(default),
        Some(NumberLike::Number(n)) => Ok(n),
        Some(NumberLike::Text(s)) if s.trim().is_empty() => Ok(default),
        Some(NumberLike::Text(s)) => match s.trim().replace(',', ".").parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(n),
            _ => Err(invalid(field, "finite number", s)),
        },
    }
}

/// Read a non-negative integer count, falling back to `default` when absent.
pub fn count(field: &str, value: Option<NumberLike>, default: u32) -> Result<u32> {
    let n = number(field, value, f64::from(default))?;
    if n < 0.0 || n.fract() != 0.0 || n > f64::from(u32::MAX) {
        return Err(invalid(field, "non-negative integer", n.to_string()));
    }
    Ok(n as u32)
}

/// Read a boolean column, falling back to `default` when absent.
pub fn flag(field: &str, value: Option<FlagLike>, default: bool) -> Result<bool> {
    match value {
        None => Ok(default),
        Some(FlagLike::Bool(b)) => Ok(b),
        Some(FlagLike::Number(0)) => Ok(false),
        Some(FlagLike::Number(1)) => Ok(true),
        Some(FlagLike::Number(n)) => Err(invalid(field, "boolean", n.to_string())),
        Some(FlagLike::Text(s)) => match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" | "" => Ok(false),
            _ => Err(invalid(field, "boolean", s)),
        },
    }
}

fn key(section: &str, field: &str, value: Option<KeyLike>) -> Result<String> {
    value
        .map(KeyLike::into_key)
        .filter(|k| !k.trim().is_empty())
        .ok_or_else(|| QuoteError::missing(section, field))
}

fn currency(value: Option<String>) -> String {
    value
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_CURRENCY.to_string())
}

/// Optimizer plan row. Only the material key is loose; placements and
/// metrics come from the optimizer already typed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OptimizationResultRow {
    pub material_id: Option<KeyLike>,
    #[serde(default)]
    pub placements: Vec<Placement>,
    #[serde(default)]
    pub metrics: OptimizationMetrics,
}

impl OptimizationResultRow {
    /// Convert into a typed plan. `section` names the row in errors.
    pub fn into_optimization_result(self, section: &str) -> Result<OptimizationResult> {
        Ok(OptimizationResult {
            material_id: key(section, "material_id", self.material_id)?,
            placements: self.placements,
            metrics: self.metrics,
        })
    }
}

/// Material catalog row.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MaterialRow {
    pub id: Option<KeyLike>,
    pub name: Option<String>,
    pub width_mm: Option<NumberLike>,
    pub length_mm: Option<NumberLike>,
    pub on_stock: Option<FlagLike>,
    pub usage_limit: Option<NumberLike>,
    pub price_per_sqm: Option<NumberLike>,
    pub vat_rate: Option<NumberLike>,
    pub waste_multi: Option<NumberLike>,
    pub currency: Option<String>,
}

impl MaterialRow {
    /// Convert into a typed material. `section` names the row in errors.
    pub fn into_material(self, section: &str) -> Result<MaterialInfo> {
        Ok(MaterialInfo {
            id: key(section, "id", self.id)?,
            name: self.name.unwrap_or_default(),
            width_mm: number("width_mm", self.width_mm, 0.0)?,
            length_mm: number("length_mm", self.length_mm, 0.0)?,
            on_stock: flag("on_stock", self.on_stock, true)?,
            usage_limit: number("usage_limit", self.usage_limit, DEFAULT_USAGE_LIMIT)?,
            price_per_sqm: number("price_per_sqm", self.price_per_sqm, 0.0)?,
            vat_rate: number("vat_rate", self.vat_rate, DEFAULT_VAT_RATE)?,
            waste_multi: number("waste_multi", self.waste_multi, DEFAULT_WASTE_MULTI)?,
            currency: currency(self.currency),
        })
    }
}

/// Edge material row.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EdgeMaterialRow {
    pub name: Option<KeyLike>,
    pub price_per_m: Option<NumberLike>,
    pub vat_rate: Option<NumberLike>,
    pub overhang_mm: Option<NumberLike>,
    pub currency: Option<String>,
}

impl EdgeMaterialRow {
    /// Convert into a typed edge material.
    pub fn into_edge_material(self, section: &str) -> Result<EdgeMaterialInfo> {
        Ok(EdgeMaterialInfo {
            name: key(section, "name", self.name)?,
            price_per_m: number("price_per_m", self.price_per_m, 0.0)?,
            vat_rate: number("vat_rate", self.vat_rate, DEFAULT_VAT_RATE)?,
            overhang_mm: number("overhang_mm", self.overhang_mm, 0.0)?,
            currency: currency(self.currency),
        })
    }
}

/// Panel edge row.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PanelEdgeRow {
    pub edge_material_name: Option<KeyLike>,
    pub length_mm: Option<NumberLike>,
    pub quantity: Option<NumberLike>,
}

impl PanelEdgeRow {
    /// Convert into a typed panel edge.
    pub fn into_panel_edge(self, section: &str) -> Result<PanelEdge> {
        Ok(PanelEdge {
            edge_material_name: key(section, "edge_material_name", self.edge_material_name)?,
            length_mm: number("length_mm", self.length_mm, 0.0)?,
            quantity: count("quantity", self.quantity, 1)?,
        })
    }
}

/// Processing fee row.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CuttingFeeRow {
    pub fee_per_meter: Option<NumberLike>,
    pub panthelyfuras_fee_per_hole: Option<NumberLike>,
    pub duplungolas_fee_per_sqm: Option<NumberLike>,
    pub szogvagas_fee_per_panel: Option<NumberLike>,
    pub vat_rate: Option<NumberLike>,
    pub currency: Option<String>,
}

impl CuttingFeeRow {
    /// Convert into a typed fee table.
    pub fn into_cutting_fee(self) -> Result<CuttingFeeInfo> {
        Ok(CuttingFeeInfo {
            fee_per_meter: number("fee_per_meter", self.fee_per_meter, 0.0)?,
            drilling_fee_per_hole: number(
                "panthelyfuras_fee_per_hole",
                self.panthelyfuras_fee_per_hole,
                0.0,
            )?,
            doubling_fee_per_sqm: number(
                "duplungolas_fee_per_sqm",
                self.duplungolas_fee_per_sqm,
                0.0,
            )?,
            angle_cut_fee_per_panel: number(
                "szogvagas_fee_per_panel",
                self.szogvagas_fee_per_panel,
                0.0,
            )?,
            vat_rate: number("vat_rate", self.vat_rate, DEFAULT_VAT_RATE)?,
            currency: currency(self.currency),
        })
    }
}

/// Panel service row.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PanelRow {
    pub width_mm: Option<NumberLike>,
    pub height_mm: Option<NumberLike>,
    pub quantity: Option<NumberLike>,
    pub panthelyfuras_quantity: Option<NumberLike>,
    pub duplungolas: Option<FlagLike>,
    pub szogvagas: Option<FlagLike>,
}

impl PanelRow {
    /// Convert into a typed panel spec.
    pub fn into_panel(self) -> Result<PanelWithServices> {
        Ok(PanelWithServices {
            width_mm: number("width_mm", self.width_mm, 0.0)?,
            height_mm: number("height_mm", self.height_mm, 0.0)?,
            quantity: count("quantity", self.quantity, 1)?,
            drill_holes: count("panthelyfuras_quantity", self.panthelyfuras_quantity, 0)?,
            doubling: flag("duplungolas", self.duplungolas, false)?,
            angle_cut: flag("szogvagas", self.szogvagas, false)?,
        })
    }
}
