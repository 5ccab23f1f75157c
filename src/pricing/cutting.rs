//! Saw cutting charge.

use super::Amount;
use crate::config::{RoundingPolicy, MM_PER_M};
use crate::model::{CuttingCostPricing, CuttingFeeInfo, OptimizationResult};

/// Price the saw cutting of one material from the optimizer's total cut
/// length.
pub fn price_cutting(
    result: &OptimizationResult,
    fee: &CuttingFeeInfo,
    rounding: RoundingPolicy,
) -> CuttingCostPricing {
    let total_cut_length_m = result.metrics.total_cut_length_mm / MM_PER_M;
    let amount = Amount::from_net(
        total_cut_length_m * fee.fee_per_meter,
        fee.vat_rate,
        rounding,
    );

    CuttingCostPricing {
        total_cut_length_m,
        fee_per_meter: fee.fee_per_meter,
        net_price: amount.net,
        vat_amount: amount.vat,
        gross_price: amount.gross,
        currency: fee.currency.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::float_cmp::approx_eq;

    fn fee() -> CuttingFeeInfo {
        CuttingFeeInfo {
            fee_per_meter: 300.0,
            drilling_fee_per_hole: 50.0,
            doubling_fee_per_sqm: 2000.0,
            angle_cut_fee_per_panel: 800.0,
            vat_rate: 0.27,
            currency: "HUF".to_string(),
        }
    }

    #[test]
    fn test_cutting_uses_optimizer_metric() {
        let mut result = OptimizationResult::new("mat-1");
        result.metrics.total_cut_length_mm = 12_500.0;
        let cost = price_cutting(&result, &fee(), RoundingPolicy::Exact);
        assert!(approx_eq(cost.total_cut_length_m, 12.5));
        assert!(approx_eq(cost.net_price, 3750.0));
        assert!(approx_eq(cost.vat_amount, 1012.5));
        assert!(approx_eq(cost.gross_price, 4762.5));
        assert_eq!(cost.currency, "HUF");
    }

    #[test]
    fn test_cutting_zero_length_is_zero_line() {
        let result = OptimizationResult::new("mat-1");
        let cost = price_cutting(&result, &fee(), RoundingPolicy::Exact);
        assert_eq!(cost.net_price, 0.0);
        assert_eq!(cost.gross_price, 0.0);
    }
}
