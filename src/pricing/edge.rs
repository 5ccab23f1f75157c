//! Edge banding pricing.

use super::Amount;
use crate::config::{RoundingPolicy, MM_PER_M};
use crate::model::{EdgeMaterialInfo, EdgeMaterialPricing, PanelEdge, QuoteWarning};
use std::collections::HashMap;

/// Banded length and edge piece count of one edge material.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeTotals {
    pub edge_material_name: String,
    /// Sum of `length_mm * quantity`.
    pub total_length_mm: f64,
    /// Number of edge pieces.
    pub total_quantity: u64,
}

/// Aggregate panel edges by edge material name, keeping first-seen order.
pub fn aggregate_edges(edges: &[PanelEdge]) -> Vec<EdgeTotals> {
    let mut totals: Vec<EdgeTotals> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for edge in edges {
        let slot = *index
            .entry(edge.edge_material_name.as_str())
            .or_insert_with(|| {
                totals.push(EdgeTotals {
                    edge_material_name: edge.edge_material_name.clone(),
                    ..Default::default()
                });
                totals.len() - 1
            });

        let entry = &mut totals[slot];
        entry.total_length_mm += edge.length_mm * f64::from(edge.quantity);
        entry.total_quantity += u64::from(edge.quantity);
    }

    totals
}

/// Price the edge banding of one material.
///
/// Every edge piece gets one overhang allowance regardless of its length.
/// Edge materials missing from the reference map are skipped and reported.
pub fn price_edges(
    material_id: &str,
    edges: &[PanelEdge],
    edge_materials: &HashMap<String, EdgeMaterialInfo>,
    rounding: RoundingPolicy,
    warnings: &mut Vec<QuoteWarning>,
) -> Vec<EdgeMaterialPricing> {
    aggregate_edges(edges)
        .into_iter()
        .filter_map(|totals| {
            let Some(info) = edge_materials.get(&totals.edge_material_name) else {
                tracing::warn!(
                    "Material {}: edge material '{}' not found, not charged",
                    material_id,
                    totals.edge_material_name
                );
                warnings.push(QuoteWarning::EdgeMaterialNotFound {
                    material_id: material_id.to_string(),
                    edge_material_name: totals.edge_material_name,
                });
                return None;
            };
            Some(price_edge_material(&totals, info, rounding))
        })
        .collect()
}

fn price_edge_material(
    totals: &EdgeTotals,
    info: &EdgeMaterialInfo,
    rounding: RoundingPolicy,
) -> EdgeMaterialPricing {
    let overhang_mm = totals.total_quantity as f64 * info.overhang_mm;
    let length_with_overhang_m = (totals.total_length_mm + overhang_mm) / MM_PER_M;
    let amount = Amount::from_net(
        length_with_overhang_m * info.price_per_m,
        info.vat_rate,
        rounding,
    );

    EdgeMaterialPricing {
        edge_material_name: totals.edge_material_name.clone(),
        total_quantity: totals.total_quantity,
        total_length_m: totals.total_length_mm / MM_PER_M,
        overhang_length_m: overhang_mm / MM_PER_M,
        length_with_overhang_m,
        price_per_m: info.price_per_m,
        net_price: amount.net,
        vat_amount: amount.vat,
        gross_price: amount.gross,
        currency: info.currency.clone(),
    }
}
