//! Quote orchestration: prices every material in the cut plan and rolls the
//! line items up into material and grand totals.

use super::{price_boards, price_cutting, price_edges, price_services, Amount};
use crate::config::PricingConfig;
use crate::model::{
    CuttingFeeInfo, EdgeMaterialInfo, MaterialInfo, MaterialPricing, OptimizationResult,
    PanelEdge, PanelWithServices, QuoteResult, QuoteWarning,
};
use std::collections::HashMap;

/// Calculate a quote with the default pricing configuration.
///
/// * `optimization_results` - one cutting plan per material in the order
/// * `materials` - material catalog; plans without a catalog entry are skipped
/// * `panel_edges_by_material` - edge banding rows keyed by material id
/// * `edge_materials` - edge material reference data keyed by name
/// * `cutting_fee` - processing fees; without it neither cutting nor services
///   are charged
/// * `panels_by_material` - panel service requests keyed by material id
///
/// The calculation never fails. Data gaps are skipped and listed in
/// `QuoteResult::warnings`.
pub fn calculate_quote(
    optimization_results: &[OptimizationResult],
    materials: &[MaterialInfo],
    panel_edges_by_material: &HashMap<String, Vec<PanelEdge>>,
    edge_materials: &HashMap<String, EdgeMaterialInfo>,
    cutting_fee: Option<&CuttingFeeInfo>,
    panels_by_material: Option<&HashMap<String, Vec<PanelWithServices>>>,
) -> QuoteResult {
    calculate_quote_with_config(
        optimization_results,
        materials,
        panel_edges_by_material,
        edge_materials,
        cutting_fee,
        panels_by_material,
        &PricingConfig::default(),
    )
}

/// Calculate a quote with an explicit pricing configuration.
pub fn calculate_quote_with_config(
    optimization_results: &[OptimizationResult],
    materials: &[MaterialInfo],
    panel_edges_by_material: &HashMap<String, Vec<PanelEdge>>,
    edge_materials: &HashMap<String, EdgeMaterialInfo>,
    cutting_fee: Option<&CuttingFeeInfo>,
    panels_by_material: Option<&HashMap<String, Vec<PanelWithServices>>>,
    config: &PricingConfig,
) -> QuoteResult {
    let mut warnings = Vec::new();
    let currency = quote_currency(materials, &mut warnings);

    let mut priced = Vec::with_capacity(optimization_results.len());
    for result in optimization_results {
        let Some(material) = materials.iter().find(|m| m.id == result.material_id) else {
            tracing::warn!(
                "Material {} not found in catalog, skipped",
                result.material_id
            );
            warnings.push(QuoteWarning::MaterialNotFound {
                material_id: result.material_id.clone(),
            });
            continue;
        };

        let edges = panel_edges_by_material
            .get(&material.id)
            .map(Vec::as_slice)
            .unwrap_or_default();
        let panels = panels_by_material
            .and_then(|map| map.get(&material.id))
            .map(Vec::as_slice)
            .unwrap_or_default();

        priced.push(price_material(
            material,
            result,
            edges,
            edge_materials,
            cutting_fee,
            panels,
            config,
            &mut warnings,
        ));
    }

    let grand: Amount = priced.iter().map(Amount::from).sum();

    tracing::debug!(
        "Quote: {} material(s), net {}, gross {} {}",
        priced.len(),
        grand.net,
        grand.gross,
        currency
    );

    QuoteResult {
        materials: priced,
        grand_total_net: grand.net,
        grand_total_vat: grand.vat,
        grand_total_gross: grand.gross,
        currency,
        warnings,
    }
}

/// The quote currency is the first catalog material's currency.
fn quote_currency(materials: &[MaterialInfo], warnings: &mut Vec<QuoteWarning>) -> String {
    let Some(first) = materials.first() else {
        warnings.push(QuoteWarning::EmptyCatalog);
        return String::new();
    };

    if let Some(other) = materials.iter().find(|m| m.currency != first.currency) {
        tracing::warn!(
            "Catalog mixes currencies {} and {}, reporting {}",
            first.currency,
            other.currency,
            first.currency
        );
        warnings.push(QuoteWarning::MixedCurrencies {
            reported: first.currency.clone(),
            other: other.currency.clone(),
        });
    }

    first.currency.clone()
}

#[allow(clippy::too_many_arguments)]
fn price_material(
    material: &MaterialInfo,
    result: &OptimizationResult,
    edges: &[PanelEdge],
    edge_materials: &HashMap<String, EdgeMaterialInfo>,
    cutting_fee: Option<&CuttingFeeInfo>,
    panels: &[PanelWithServices],
    config: &PricingConfig,
    warnings: &mut Vec<QuoteWarning>,
) -> MaterialPricing {
    let rounding = config.rounding;

    if material.board_area_mm2() <= 0.0 {
        tracing::warn!("Material {}: board area is zero", material.id);
        warnings.push(QuoteWarning::ZeroBoardArea {
            material_id: material.id.clone(),
        });
    }

    let boards = price_boards(material, result, rounding);
    let board_total: Amount = boards.iter().map(Amount::from).sum();

    let edge_materials = price_edges(&material.id, edges, edge_materials, rounding, warnings);
    let edge_total: Amount = edge_materials.iter().map(Amount::from).sum();

    let cutting_cost = cutting_fee.map(|fee| price_cutting(result, fee, rounding));
    let cutting_total = cutting_cost.as_ref().map(Amount::from).unwrap_or_default();

    let additional_services = match cutting_fee {
        Some(fee) if !panels.is_empty() => Some(price_services(panels, fee, rounding)),
        _ => None,
    };
    let services_total = additional_services.as_ref().map(Amount::from).unwrap_or_default();

    let total = board_total + edge_total + cutting_total + services_total;

    tracing::debug!(
        "Material {}: {} board(s), {} edge material(s), net {}",
        material.id,
        boards.len(),
        edge_materials.len(),
        total.net
    );

    MaterialPricing {
        material_id: material.id.clone(),
        material_name: material.name.clone(),
        on_stock: material.on_stock,
        currency: material.currency.clone(),

        boards,
        total_material_net: board_total.net,
        total_material_vat: board_total.vat,
        total_material_gross: board_total.gross,

        edge_materials,
        total_edge_net: edge_total.net,
        total_edge_vat: edge_total.vat,
        total_edge_gross: edge_total.gross,

        cutting_cost,
        total_cutting_net: cutting_total.net,
        total_cutting_vat: cutting_total.vat,
        total_cutting_gross: cutting_total.gross,

        additional_services,
        total_services_net: services_total.net,
        total_services_vat: services_total.vat,
        total_services_gross: services_total.gross,

        total_net: total.net,
        total_vat: total.vat,
        total_gross: total.gross,
    }
}
