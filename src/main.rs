//! panel-quote - CLI tool to price panel cutting plans.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use panel_quote::{
    flatten_rows, format_price, parse_quote_input, render_summary, validate_input,
    PricingConfig, RoundingPolicy,
};

/// Net price rounding selectable on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Rounding {
    /// Keep full precision.
    Exact,
    /// Round net prices to whole currency units before VAT.
    WholeNet,
}

impl From<Rounding> for RoundingPolicy {
    fn from(rounding: Rounding) -> Self {
        match rounding {
            Rounding::Exact => RoundingPolicy::Exact,
            Rounding::WholeNet => RoundingPolicy::WholeNet,
        }
    }
}

/// Price panel cutting optimization results.
#[derive(Parser, Debug)]
#[command(name = "panel-quote")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input quote document (JSON)
    #[arg(short, long)]
    input: PathBuf,

    /// Output file for the JSON result (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Net price rounding policy
    #[arg(short, long, value_enum, default_value = "exact")]
    rounding: Rounding,

    /// Emit flattened persistence rows instead of the quote tree
    #[arg(long)]
    rows: bool,

    /// Print a plain-text summary
    #[arg(long)]
    summary: bool,

    /// Validate only, don't calculate
    #[arg(long)]
    validate: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Processing: {}", args.input.display());

    let input = parse_quote_input(&args.input)
        .with_context(|| format!("Failed to parse {}", args.input.display()))?;

    info!(
        "Parsed {} cutting plan(s), {} catalog material(s)",
        input.optimization_results.len(),
        input.materials.len()
    );

    // Validate
    let validation = validate_input(&input)?;

    for warning in &validation.warnings {
        warn!("{}", warning);
    }

    for err in &validation.errors {
        error!("{}", err);
    }

    if !validation.passed {
        anyhow::bail!("Validation failed");
    }

    // Validate-only mode
    if args.validate {
        info!("Validation passed");
        return Ok(());
    }

    let config = PricingConfig::new(args.rounding.into());
    let quote = input.calculate(&config);

    info!(
        "Priced {} material(s), {} board(s), gross {}",
        quote.materials.len(),
        quote.total_boards(),
        format_price(quote.grand_total_gross, &quote.currency)
    );

    if args.summary {
        eprintln!("{}", render_summary(&quote));
    }

    let json = if args.rows {
        serde_json::to_string_pretty(&flatten_rows(&quote))?
    } else {
        serde_json::to_string_pretty(&quote)?
    };

    match args.output {
        Some(output_path) => {
            std::fs::write(&output_path, &json)
                .with_context(|| format!("Failed to write {}", output_path.display()))?;
            info!("Generated: {}", output_path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
