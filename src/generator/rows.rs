//! Flatten a quote into the rows the surrounding application persists:
//! one line per material, with board, edge and service child rows.

use crate::model::{PricingMethod, QuoteResult, ServicePricing};
use serde::{Deserialize, Serialize};

/// Net price of one unit, zero when nothing was billed.
pub fn unit_net_price(net: f64, quantity: f64) -> f64 {
    if quantity > 0.0 {
        net / quantity
    } else {
        0.0
    }
}

/// One quote line per priced material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteLineRow {
    pub line_no: usize,
    pub material_id: String,
    pub material_name: String,
    pub board_count: usize,
    pub material_net: f64,
    pub edge_net: f64,
    pub cutting_net: f64,
    pub services_net: f64,
    pub total_net: f64,
    pub total_vat: f64,
    pub total_gross: f64,
    pub currency: String,
}

/// One billed board of a quote line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardRow {
    pub line_no: usize,
    pub board_id: u32,
    pub usage_percentage: f64,
    pub area_m2: f64,
    pub charged_area_m2: f64,
    pub pricing_method: PricingMethod,
    pub net_price: f64,
    pub vat_amount: f64,
    pub gross_price: f64,
}

/// One edge banding material of a quote line, billed per metre.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRow {
    pub line_no: usize,
    pub edge_material_name: String,
    pub length_m: f64,
    pub unit_net_price: f64,
    pub net_price: f64,
    pub vat_amount: f64,
    pub gross_price: f64,
    pub currency: String,
}

/// Processing service kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceKind {
    #[serde(rename = "cutting")]
    Cutting,
    #[serde(rename = "panthelyfuras")]
    Drilling,
    #[serde(rename = "duplungolas")]
    Doubling,
    #[serde(rename = "szogvagas")]
    AngleCut,
}

/// One processing service of a quote line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRow {
    pub line_no: usize,
    pub service: ServiceKind,
    pub quantity: f64,
    pub unit: String,
    pub unit_net_price: f64,
    pub net_price: f64,
    pub vat_amount: f64,
    pub gross_price: f64,
    pub currency: String,
}

/// All rows of a quote.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteRows {
    pub lines: Vec<QuoteLineRow>,
    pub boards: Vec<BoardRow>,
    pub edges: Vec<EdgeRow>,
    pub services: Vec<ServiceRow>,
}

fn service_row(
    line_no: usize,
    service: ServiceKind,
    pricing: &ServicePricing,
    currency: &str,
) -> ServiceRow {
    ServiceRow {
        line_no,
        service,
        quantity: pricing.quantity,
        unit: pricing.unit.label().to_string(),
        unit_net_price: pricing.unit_price,
        net_price: pricing.net_price,
        vat_amount: pricing.vat_amount,
        gross_price: pricing.gross_price,
        currency: currency.to_string(),
    }
}

/// Flatten a quote into persistence rows. Line numbers start at 1.
pub fn flatten_rows(quote: &QuoteResult) -> QuoteRows {
    let mut rows = QuoteRows::default();

    for (idx, material) in quote.materials.iter().enumerate() {
        let line_no = idx + 1;

        rows.lines.push(QuoteLineRow {
            line_no,
            material_id: material.material_id.clone(),
            material_name: material.material_name.clone(),
            board_count: material.board_count(),
            material_net: material.total_material_net,
            edge_net: material.total_edge_net,
            cutting_net: material.total_cutting_net,
            services_net: material.total_services_net,
            total_net: material.total_net,
            total_vat: material.total_vat,
            total_gross: material.total_gross,
            currency: material.currency.clone(),
        });

        rows.boards.extend(material.boards.iter().map(|board| BoardRow {
            line_no,
            board_id: board.board_id,
            usage_percentage: board.usage_percentage,
            area_m2: board.area_m2,
            charged_area_m2: board.charged_area_m2,
            pricing_method: board.pricing_method,
            net_price: board.net_price,
            vat_amount: board.vat_amount,
            gross_price: board.gross_price,
        }));

        rows.edges
            .extend(material.edge_materials.iter().map(|edge| EdgeRow {
                line_no,
                edge_material_name: edge.edge_material_name.clone(),
                length_m: edge.length_with_overhang_m,
                unit_net_price: unit_net_price(edge.net_price, edge.length_with_overhang_m),
                net_price: edge.net_price,
                vat_amount: edge.vat_amount,
                gross_price: edge.gross_price,
                currency: edge.currency.clone(),
            }));

        if let Some(cutting) = &material.cutting_cost {
            rows.services.push(ServiceRow {
                line_no,
                service: ServiceKind::Cutting,
                quantity: cutting.total_cut_length_m,
                unit: "m".to_string(),
                unit_net_price: unit_net_price(cutting.net_price, cutting.total_cut_length_m),
                net_price: cutting.net_price,
                vat_amount: cutting.vat_amount,
                gross_price: cutting.gross_price,
                currency: cutting.currency.clone(),
            });
        }

        if let Some(services) = &material.additional_services {
            let kinds = [
                (ServiceKind::Drilling, &services.drilling),
                (ServiceKind::Doubling, &services.doubling),
                (ServiceKind::AngleCut, &services.angle_cut),
            ];
            for (kind, pricing) in kinds {
                if let Some(pricing) = pricing {
                    rows.services
                        .push(service_row(line_no, kind, pricing, &services.currency));
                }
            }
        }
    }

    rows
}
