//! Data model types for quote pricing.

mod optimization;
mod quote;
mod reference;
mod warning;

pub use optimization::{OptimizationMetrics, OptimizationResult, Placement};
pub use quote::{
    AdditionalServicesPricing, BoardPricing, CuttingCostPricing, EdgeMaterialPricing,
    MaterialPricing, PricingMethod, QuoteResult, ServicePricing, ServiceUnit,
};
pub use reference::{
    CuttingFeeInfo, EdgeMaterialInfo, MaterialInfo, PanelEdge, PanelWithServices,
};
pub use warning::QuoteWarning;
