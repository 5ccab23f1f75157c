//! Plain-text quote summary.

use super::format::format_price;
use crate::model::{MaterialPricing, QuoteResult};
use std::fmt::Write;

/// Render a quote as a plain-text summary.
pub fn render_summary(quote: &QuoteResult) -> String {
    let mut output = String::new();

    for material in &quote.materials {
        render_material(&mut output, material);
    }

    writeln!(
        output,
        "Grand total net:   {}",
        format_price(quote.grand_total_net, &quote.currency)
    )
    .unwrap();
    writeln!(
        output,
        "Grand total VAT:   {}",
        format_price(quote.grand_total_vat, &quote.currency)
    )
    .unwrap();
    writeln!(
        output,
        "Grand total gross: {}",
        format_price(quote.grand_total_gross, &quote.currency)
    )
    .unwrap();

    if !quote.warnings.is_empty() {
        writeln!(output).unwrap();
        writeln!(output, "Warnings:").unwrap();
        for warning in &quote.warnings {
            writeln!(output, "  - {}", warning).unwrap();
        }
    }

    output
}

fn render_material(output: &mut String, material: &MaterialPricing) {
    let stock = if material.on_stock {
        "stock"
    } else {
        "made to order"
    };
    writeln!(
        output,
        "[{}] {} ({})",
        material.material_id, material.material_name, stock
    )
    .unwrap();

    let currency = material.currency.as_str();
    for board in &material.boards {
        writeln!(
            output,
            "  Board {}: {:.1}% used, {} {:.3} m2, {}",
            board.board_id,
            board.usage_percentage,
            board.pricing_method,
            board.charged_area_m2,
            format_price(board.net_price, currency)
        )
        .unwrap();
    }

    for edge in &material.edge_materials {
        writeln!(
            output,
            "  Edge {}: {:.2} m, {}",
            edge.edge_material_name,
            edge.length_with_overhang_m,
            format_price(edge.net_price, &edge.currency)
        )
        .unwrap();
    }

    if let Some(cutting) = &material.cutting_cost {
        writeln!(
            output,
            "  Cutting: {:.2} m, {}",
            cutting.total_cut_length_m,
            format_price(cutting.net_price, &cutting.currency)
        )
        .unwrap();
    }

    if let Some(services) = &material.additional_services {
        for (name, service) in services.priced() {
            writeln!(
                output,
                "  Service {}: {} {}, {}",
                name,
                service.quantity,
                service.unit.label(),
                format_price(service.net_price, &services.currency)
            )
            .unwrap();
        }
    }

    writeln!(
        output,
        "  Net {} / VAT {} / Gross {}",
        format_price(material.total_net, currency),
        format_price(material.total_vat, currency),
        format_price(material.total_gross, currency)
    )
    .unwrap();
    writeln!(output).unwrap();
}
