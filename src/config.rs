//! Configuration constants and settings for quote pricing.

use serde::{Deserialize, Serialize};

/// Floating-point comparison epsilon.
pub const EPS: f64 = 0.0001;

/// Millimetres per metre.
pub const MM_PER_M: f64 = 1000.0;

/// Square millimetres per square metre.
pub const MM2_PER_M2: f64 = 1_000_000.0;

/// Board id assigned to placements that carry none.
pub const DEFAULT_BOARD_ID: u32 = 1;

/// Usage threshold applied when a material row has no `usage_limit`.
pub const DEFAULT_USAGE_LIMIT: f64 = 0.65;

/// Waste multiplier applied when a material row has no `waste_multi`.
pub const DEFAULT_WASTE_MULTI: f64 = 1.0;

/// VAT rate applied when a reference row has no `vat_rate`.
pub const DEFAULT_VAT_RATE: f64 = 0.27;

/// Currency applied when a reference row has no `currency`.
pub const DEFAULT_CURRENCY: &str = "HUF";

/// Where net prices are rounded.
///
/// Rounding happens in exactly one place: when a net price is derived.
/// VAT and gross are always computed from the (possibly rounded) net.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingPolicy {
    /// Keep full floating-point precision.
    #[default]
    Exact,
    /// Round every net price to a whole currency unit before VAT.
    WholeNet,
}

impl RoundingPolicy {
    /// Apply the policy to a net amount.
    pub fn apply(&self, net: f64) -> f64 {
        match self {
            RoundingPolicy::Exact => net,
            RoundingPolicy::WholeNet => net.round(),
        }
    }
}

impl std::fmt::Display for RoundingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundingPolicy::Exact => write!(f, "exact"),
            RoundingPolicy::WholeNet => write!(f, "whole-net"),
        }
    }
}

/// Pricing configuration.
#[derive(Debug, Clone, Default)]
pub struct PricingConfig {
    /// Net price rounding policy.
    pub rounding: RoundingPolicy,
}

impl PricingConfig {
    /// Create a configuration with the given rounding policy.
    pub fn new(rounding: RoundingPolicy) -> Self {
        Self { rounding }
    }
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    /// Check if a float is approximately zero.
    #[inline]
    pub fn approx_zero(a: f64) -> bool {
        a.abs() < EPS
    }
}
