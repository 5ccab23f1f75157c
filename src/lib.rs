//! panel_quote - Quote pricing for panel cutting optimization results.
//!
//! This library turns the boards and placements produced by a panel cutting
//! optimizer, together with material, edge banding and processing fee
//! reference data, into an itemized, VAT-aware quote.
//!
//! # Example
//!
//! ```no_run
//! use panel_quote::{parse_quote_input, render_summary, PricingConfig};
//! use std::path::Path;
//!
//! let input = parse_quote_input(Path::new("quote.json")).unwrap();
//! let quote = input.calculate(&PricingConfig::default());
//! println!("{}", render_summary(&quote));
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod input;
pub mod model;
pub mod pricing;
pub mod validation;

// Re-exports for convenience
pub use config::{PricingConfig, RoundingPolicy};
pub use error::{QuoteError, Result};
pub use generator::{flatten_rows, format_price, render_summary, QuoteRows};
pub use input::{parse_quote_input, parse_quote_input_str, QuoteInput};
pub use model::{
    AdditionalServicesPricing, BoardPricing, CuttingCostPricing, CuttingFeeInfo,
    EdgeMaterialInfo, EdgeMaterialPricing, MaterialInfo, MaterialPricing, OptimizationMetrics,
    OptimizationResult, PanelEdge, PanelWithServices, Placement, PricingMethod, QuoteResult,
    QuoteWarning, ServicePricing, ServiceUnit,
};
pub use pricing::{calculate_quote, calculate_quote_with_config};
pub use validation::{validate_input, ValidationResult};

/// Price a quote input file.
///
/// This is the main high-level function that performs the full pipeline:
/// 1. Parse the input document
/// 2. Validate it
/// 3. Calculate the quote
///
/// Validation warnings are logged; validation errors abort.
pub fn quote_from_file(
    input_path: &std::path::Path,
    config: &PricingConfig,
) -> Result<QuoteResult> {
    let input = parse_quote_input(input_path)?;

    let validation = validate_input(&input)?;
    for warning in &validation.warnings {
        tracing::warn!("{}", warning);
    }
    if !validation.passed {
        return Err(QuoteError::InvalidValue {
            field: "input".to_string(),
            expected: "valid quote input".to_string(),
            value: validation.errors.join("; "),
        });
    }

    Ok(input.calculate(config))
}
