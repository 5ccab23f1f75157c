//! Net/VAT/gross amount triple shared by every line item.

use crate::config::RoundingPolicy;
use crate::model::{
    AdditionalServicesPricing, BoardPricing, CuttingCostPricing, EdgeMaterialPricing,
    MaterialPricing, ServicePricing,
};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

/// A net price with its VAT and gross.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Amount {
    pub net: f64,
    pub vat: f64,
    pub gross: f64,
}

impl Amount {
    /// Zero amount.
    pub const ZERO: Amount = Amount {
        net: 0.0,
        vat: 0.0,
        gross: 0.0,
    };

    /// Derive VAT and gross from a net price.
    ///
    /// This is the only place where rounding is applied: the policy acts on
    /// the net, VAT is taken on the rounded net, gross is their sum.
    pub fn from_net(net: f64, vat_rate: f64, rounding: RoundingPolicy) -> Self {
        let net = rounding.apply(net);
        let vat = net * vat_rate;
        Self {
            net,
            vat,
            gross: net + vat,
        }
    }

    /// Split into `parts` equal shares whose sum is exactly `self`.
    ///
    /// The last share absorbs the floating-point remainder.
    pub fn split(&self, parts: u32) -> Vec<Amount> {
        if parts == 0 {
            return Vec::new();
        }

        let n = f64::from(parts);
        let share = Amount {
            net: self.net / n,
            vat: self.vat / n,
            gross: self.gross / n,
        };

        let mut shares = vec![share; parts as usize - 1];
        let allocated: Amount = shares.iter().copied().sum();
        shares.push(*self - allocated);
        shares
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, other: Amount) -> Amount {
        Amount {
            net: self.net + other.net,
            vat: self.vat + other.vat,
            gross: self.gross + other.gross,
        }
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Amount) {
        *self = *self + other;
    }
}

impl Sub for Amount {
    type Output = Amount;

    fn sub(self, other: Amount) -> Amount {
        Amount {
            net: self.net - other.net,
            vat: self.vat - other.vat,
            gross: self.gross - other.gross,
        }
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Amount {
        iter.fold(Amount::ZERO, Add::add)
    }
}

macro_rules! amount_from_line {
    ($ty:ty, $net:ident, $vat:ident, $gross:ident) => {
        impl From<&$ty> for Amount {
            fn from(line: &$ty) -> Amount {
                Amount {
                    net: line.$net,
                    vat: line.$vat,
                    gross: line.$gross,
                }
            }
        }
    };
}

amount_from_line!(BoardPricing, net_price, vat_amount, gross_price);
amount_from_line!(EdgeMaterialPricing, net_price, vat_amount, gross_price);
amount_from_line!(CuttingCostPricing, net_price, vat_amount, gross_price);
amount_from_line!(ServicePricing, net_price, vat_amount, gross_price);
amount_from_line!(AdditionalServicesPricing, total_net, total_vat, total_gross);
amount_from_line!(MaterialPricing, total_net, total_vat, total_gross);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::float_cmp::approx_eq;

    #[test]
    fn test_from_net_exact() {
        let amount = Amount::from_net(1500.0, 0.27, RoundingPolicy::Exact);
        assert!(approx_eq(amount.net, 1500.0));
        assert!(approx_eq(amount.vat, 405.0));
        assert!(approx_eq(amount.gross, 1905.0));
    }

    #[test]
    fn test_from_net_rounds_before_vat() {
        let amount = Amount::from_net(100.4, 0.27, RoundingPolicy::WholeNet);
        assert_eq!(amount.net, 100.0);
        assert!(approx_eq(amount.vat, 27.0));
        assert!(approx_eq(amount.gross, 127.0));
    }

    #[test]
    fn test_split_even() {
        let lot = Amount::from_net(9000.0, 0.27, RoundingPolicy::Exact);
        let shares = lot.split(3);
        assert_eq!(shares.len(), 3);
        for share in &shares {
            assert_eq!(share.net, 3000.0);
        }
        let total: f64 = shares.iter().map(|s| s.net).sum();
        assert_eq!(total, 9000.0);
    }

    #[test]
    fn test_split_uneven_sums_to_total() {
        let lot = Amount::from_net(10_000.0, 0.27, RoundingPolicy::Exact);
        let shares = lot.split(7);
        let total: Amount = shares.iter().copied().sum();
        assert!(approx_eq(total.net, lot.net));
        assert!(approx_eq(total.gross, lot.gross));
    }

    #[test]
    fn test_split_zero_parts() {
        assert!(Amount::from_net(100.0, 0.27, RoundingPolicy::Exact)
            .split(0)
            .is_empty());
    }
}
