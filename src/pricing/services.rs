//! Additional panel services: hinge drilling, doubling and angle cutting.

use super::Amount;
use crate::config::RoundingPolicy;
use crate::model::{
    AdditionalServicesPricing, CuttingFeeInfo, PanelWithServices, ServicePricing, ServiceUnit,
};

/// Requested service quantities for one material.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceTotals {
    /// Drilled holes across all panels.
    pub drill_holes: u64,
    /// Doubled panel area in m².
    pub doubling_area_m2: f64,
    /// Number of angle-cut panels.
    pub angle_cut_panels: u64,
}

impl ServiceTotals {
    /// Sum service requests over panel specs.
    pub fn from_panels(panels: &[PanelWithServices]) -> Self {
        let mut totals = Self::default();
        for panel in panels {
            let quantity = u64::from(panel.quantity);
            totals.drill_holes += u64::from(panel.drill_holes) * quantity;
            if panel.doubling {
                totals.doubling_area_m2 += panel.area_m2() * f64::from(panel.quantity);
            }
            if panel.angle_cut {
                totals.angle_cut_panels += quantity;
            }
        }
        totals
    }
}

/// Price a service, or `None` when nothing was requested.
fn price_service(
    quantity: f64,
    unit: ServiceUnit,
    unit_price: f64,
    vat_rate: f64,
    rounding: RoundingPolicy,
) -> Option<ServicePricing> {
    if quantity <= 0.0 {
        return None;
    }

    let amount = Amount::from_net(quantity * unit_price, vat_rate, rounding);
    Some(ServicePricing {
        quantity,
        unit,
        unit_price,
        net_price: amount.net,
        vat_amount: amount.vat,
        gross_price: amount.gross,
    })
}

/// Price the additional services of one material.
///
/// All services share the fee table's VAT rate and currency.
pub fn price_services(
    panels: &[PanelWithServices],
    fee: &CuttingFeeInfo,
    rounding: RoundingPolicy,
) -> AdditionalServicesPricing {
    let totals = ServiceTotals::from_panels(panels);

    let drilling = price_service(
        totals.drill_holes as f64,
        ServiceUnit::Piece,
        fee.drilling_fee_per_hole,
        fee.vat_rate,
        rounding,
    );
    let doubling = price_service(
        totals.doubling_area_m2,
        ServiceUnit::SquareMeter,
        fee.doubling_fee_per_sqm,
        fee.vat_rate,
        rounding,
    );
    let angle_cut = price_service(
        totals.angle_cut_panels as f64,
        ServiceUnit::Piece,
        fee.angle_cut_fee_per_panel,
        fee.vat_rate,
        rounding,
    );

    let total: Amount = [&drilling, &doubling, &angle_cut]
        .into_iter()
        .flatten()
        .map(Amount::from)
        .sum();

    AdditionalServicesPricing {
        drilling,
        doubling,
        angle_cut,
        total_net: total.net,
        total_vat: total.vat,
        total_gross: total.gross,
        currency: fee.currency.clone(),
    }
}
