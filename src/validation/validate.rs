//! Input validation for quote calculation.
//!
//! The pricing engine tolerates incomplete data; callers that want to reject
//! bad input run these checks first.

use crate::config::EPS;
use crate::error::{QuoteError, Result};
use crate::input::QuoteInput;
use crate::model::MaterialInfo;

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }
}

/// Validate a complete quote input.
pub fn validate_input(input: &QuoteInput) -> Result<ValidationResult> {
    if input.materials.is_empty() {
        return Err(QuoteError::NoMaterials);
    }

    let mut result = ValidationResult::ok();

    for material in &input.materials {
        result.merge(validate_material(material));
    }

    if let Some(first) = input.materials.first() {
        for material in &input.materials[1..] {
            if material.currency != first.currency {
                result.add_warning(format!(
                    "Material {}: currency {} differs from quote currency {}",
                    material.id, material.currency, first.currency
                ));
            }
        }
    }

    for plan in &input.optimization_results {
        let Some(material) = input.materials.iter().find(|m| m.id == plan.material_id) else {
            result.add_warning(format!(
                "Material {}: cutting plan has no catalog entry and will not be priced",
                plan.material_id
            ));
            continue;
        };

        for (idx, placement) in plan.placements.iter().enumerate() {
            if placement.w_mm <= 0.0 || placement.h_mm <= 0.0 {
                result.add_error(format!(
                    "Material {}, Placement {}: Invalid dimensions ({}x{})",
                    plan.material_id,
                    idx + 1,
                    placement.w_mm,
                    placement.h_mm
                ));
            }
        }

        if !material.on_stock {
            if let Some(max_board) = plan.max_board_id() {
                if max_board > plan.metrics.boards_used {
                    result.add_warning(format!(
                        "Material {}: placements reference board {} but only {} board(s) used",
                        plan.material_id, max_board, plan.metrics.boards_used
                    ));
                }
            }
        }

        if plan.metrics.total_cut_length_mm < 0.0 {
            result.add_error(format!(
                "Material {}: Negative cut length {}",
                plan.material_id, plan.metrics.total_cut_length_mm
            ));
        }
    }

    for (material_id, edges) in &input.panel_edges_by_material {
        for edge in edges {
            if !input.edge_materials.contains_key(&edge.edge_material_name) {
                result.add_warning(format!(
                    "Material {}: edge material '{}' not found and will not be charged",
                    material_id, edge.edge_material_name
                ));
            }
            if edge.length_mm < 0.0 {
                result.add_error(format!(
                    "Material {}: Negative edge length {} for '{}'",
                    material_id, edge.length_mm, edge.edge_material_name
                ));
            }
        }
    }

    for edge in input.edge_materials.values() {
        if edge.price_per_m < 0.0 || edge.vat_rate < 0.0 || edge.overhang_mm < 0.0 {
            result.add_error(format!(
                "Edge material '{}': Negative price, VAT rate or overhang",
                edge.name
            ));
        }
    }

    if let Some(fee) = &input.cutting_fee {
        let fees = [
            fee.fee_per_meter,
            fee.drilling_fee_per_hole,
            fee.doubling_fee_per_sqm,
            fee.angle_cut_fee_per_panel,
            fee.vat_rate,
        ];
        if fees.iter().any(|&f| f < 0.0) {
            result.add_error("Cutting fee: Negative fee or VAT rate");
        }
    }

    Ok(result)
}

/// Validate a single catalog material.
pub fn validate_material(material: &MaterialInfo) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if material.width_mm <= 0.0 || material.length_mm <= 0.0 {
        result.add_error(format!(
            "Material {}: Invalid board dimensions ({}x{})",
            material.id, material.width_mm, material.length_mm
        ));
    }

    if material.price_per_sqm < 0.0 {
        result.add_error(format!(
            "Material {}: Negative price per m2 {}",
            material.id, material.price_per_sqm
        ));
    }

    if material.vat_rate < 0.0 {
        result.add_error(format!(
            "Material {}: Negative VAT rate {}",
            material.id, material.vat_rate
        ));
    } else if material.vat_rate > 1.0 {
        result.add_warning(format!(
            "Material {}: VAT rate {} looks like a percentage, expected a fraction",
            material.id, material.vat_rate
        ));
    }

    if material.usage_limit < 0.0 || material.usage_limit > 1.0 + EPS {
        result.add_warning(format!(
            "Material {}: Usage limit {} outside 0-1",
            material.id, material.usage_limit
        ));
    }

    if material.waste_multi < 1.0 - EPS {
        result.add_warning(format!(
            "Material {}: Waste multiplier {} below 1 discounts under-used boards",
            material.id, material.waste_multi
        ));
    }

    result
}

/// Quick validation check for the command-line --validate flag.
pub fn quick_validate(input: &QuoteInput) -> Result<()> {
    let result = validate_input(input)?;

    if !result.passed {
        return Err(QuoteError::InvalidValue {
            field: "input".to_string(),
            expected: "valid quote input".to_string(),
            value: result.errors.join("; "),
        });
    }

    Ok(())
}
