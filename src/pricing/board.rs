//! Board pricing for stock and made-to-order materials.

use super::Amount;
use crate::config::{RoundingPolicy, MM2_PER_M2};
use crate::model::{BoardPricing, MaterialInfo, OptimizationResult, Placement, PricingMethod};
use std::collections::BTreeMap;

/// Price the boards of one material according to its stock policy.
pub fn price_boards(
    material: &MaterialInfo,
    result: &OptimizationResult,
    rounding: RoundingPolicy,
) -> Vec<BoardPricing> {
    if material.on_stock {
        price_stock_boards(material, &result.placements, rounding)
    } else {
        price_board_lot(material, result, rounding)
    }
}

/// Group placements by the board they were nested on, ordered by board id.
pub fn group_by_board(placements: &[Placement]) -> BTreeMap<u32, Vec<&Placement>> {
    let mut groups: BTreeMap<u32, Vec<&Placement>> = BTreeMap::new();
    for placement in placements {
        groups.entry(placement.board_id).or_default().push(placement);
    }
    groups
}

/// Board utilization as a ratio. A board without area reports zero usage.
fn usage_ratio(used_mm2: f64, board_mm2: f64) -> f64 {
    if board_mm2 > 0.0 {
        used_mm2 / board_mm2
    } else {
        0.0
    }
}

/// Stock boards: one line per physical board actually cut.
///
/// Below the usage limit only the used area is billed, inflated by the waste
/// multiplier. At or above the limit the whole board is billed.
fn price_stock_boards(
    material: &MaterialInfo,
    placements: &[Placement],
    rounding: RoundingPolicy,
) -> Vec<BoardPricing> {
    let board_mm2 = material.board_area_mm2();
    let board_m2 = material.board_area_m2();

    group_by_board(placements)
        .into_iter()
        .map(|(board_id, parts)| {
            let used_mm2: f64 = parts.iter().map(|p| p.area_mm2()).sum();
            let used_m2 = used_mm2 / MM2_PER_M2;
            let usage = usage_ratio(used_mm2, board_mm2);

            let (charged_m2, method) = if usage < material.usage_limit {
                (used_m2 * material.waste_multi, PricingMethod::PanelArea)
            } else {
                (board_m2, PricingMethod::FullBoard)
            };

            let amount = Amount::from_net(
                charged_m2 * material.price_per_sqm,
                material.vat_rate,
                rounding,
            );

            tracing::debug!(
                "Material {} board {}: usage {:.2}%, {} on {:.3} m2",
                material.id,
                board_id,
                usage * 100.0,
                method,
                charged_m2
            );

            BoardPricing {
                board_id,
                usage_percentage: usage * 100.0,
                area_m2: used_m2,
                charged_area_m2: charged_m2,
                net_price: amount.net,
                vat_amount: amount.vat,
                gross_price: amount.gross,
                pricing_method: method,
            }
        })
        .collect()
}

/// Made-to-order boards: the lot of `boards_used` boards is priced once and
/// spread evenly over one line per purchased board.
///
/// Individual boards are not distinguished, so every line reports the
/// aggregate usage of the lot and an even share of the used area.
fn price_board_lot(
    material: &MaterialInfo,
    result: &OptimizationResult,
    rounding: RoundingPolicy,
) -> Vec<BoardPricing> {
    let boards_used = result.metrics.boards_used;
    if boards_used == 0 {
        return Vec::new();
    }

    let board_m2 = material.board_area_m2();
    let used_mm2 = result.used_area_mm2();
    let lot_mm2 = f64::from(boards_used) * material.board_area_mm2();
    let usage = usage_ratio(used_mm2, lot_mm2);
    let used_m2_per_board = used_mm2 / MM2_PER_M2 / f64::from(boards_used);

    let lot = Amount::from_net(
        f64::from(boards_used) * board_m2 * material.price_per_sqm,
        material.vat_rate,
        rounding,
    );

    tracing::debug!(
        "Material {}: lot of {} boards, usage {:.2}%, net {}",
        material.id,
        boards_used,
        usage * 100.0,
        lot.net
    );

    lot.split(boards_used)
        .into_iter()
        .zip(1..)
        .map(|(share, board_id)| BoardPricing {
            board_id,
            usage_percentage: usage * 100.0,
            area_m2: used_m2_per_board,
            charged_area_m2: board_m2,
            net_price: share.net,
            vat_amount: share.vat,
            gross_price: share.gross,
            pricing_method: PricingMethod::FullBoard,
        })
        .collect()
}
