//! Valuation System CLI
//!
//! Projects a snapshot's fundamentals over a year range under a chosen
//! scenario and prints the oscillatory score alongside the table.

use valuation_system::projection::ProjectionConfig;
use valuation_system::scenario::SENTIMENT_SENSITIVITY;
use valuation_system::scoring::{ExternalTerms, OscillatoryScorer, Outlook};
use valuation_system::snapshot::{reference_tickers, FundamentalSnapshot};
use valuation_system::{AdjustmentFactor, Scenario, ScenarioRunner};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ScenarioArg {
    Optimistic,
    Base,
    Conservative,
}

impl From<ScenarioArg> for Scenario {
    fn from(arg: ScenarioArg) -> Self {
        match arg {
            ScenarioArg::Optimistic => Scenario::Optimistic,
            ScenarioArg::Base => Scenario::Base,
            ScenarioArg::Conservative => Scenario::Conservative,
        }
    }
}

/// Project valuation metrics for one ticker under a named scenario
#[derive(Debug, Parser)]
#[command(name = "valuation_system", version)]
struct Args {
    /// Ticker symbol
    #[arg(long, default_value = "DEMO")]
    ticker: String,

    /// Current price
    #[arg(long)]
    price: Option<f64>,

    /// Trailing earnings per share
    #[arg(long)]
    eps: Option<f64>,

    /// Trailing P/E (derived from price/EPS when omitted)
    #[arg(long)]
    pe: Option<f64>,

    /// First projected year (inclusive)
    #[arg(long, default_value_t = 2025)]
    start: i32,

    /// Last projected year (inclusive)
    #[arg(long, default_value_t = 2030)]
    end: i32,

    /// Projection scenario
    #[arg(long, value_enum, default_value_t = ScenarioArg::Base)]
    scenario: ScenarioArg,

    /// Derive the factor from this sentiment score in [-1, 1] instead of
    /// using the preset scenario
    #[arg(long)]
    derived_sentiment: Option<f64>,

    /// Sector label, used to list reference peers
    #[arg(long)]
    sector: Option<String>,

    /// Inflation percent for the score's external term
    #[arg(long, default_value_t = 0.0)]
    inflation: f64,

    /// Interest rate percent for the score's external term
    #[arg(long, default_value_t = 0.0)]
    interest_rate: f64,

    /// Market sentiment in [-1, 1] for the score's external term
    #[arg(long, default_value_t = 0.0)]
    sentiment: f64,

    /// Write the projection table to this CSV file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print the projection table as JSON instead of aligned columns
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut snapshot = FundamentalSnapshot::new(args.ticker.clone(), args.price, args.eps);
    snapshot.price_to_earnings = args.pe;
    if let Some(sector) = &args.sector {
        snapshot.sector = sector.clone();
    }

    let runner = ScenarioRunner::new(ProjectionConfig::for_range(args.start, args.end));
    let table = match args.derived_sentiment {
        Some(sentiment_score) => {
            let base = AdjustmentFactor::preset(Scenario::Base).value();
            let factor = AdjustmentFactor::derived(base, sentiment_score, SENTIMENT_SENSITIVITY);
            runner.run(&snapshot, factor, "derived")
        }
        None => runner.run_preset(&snapshot, args.scenario.into()),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&table)?);
    } else {
        println!("Valuation System v0.1.0");
        println!("=======================\n");
        println!(
            "{} ({}) - scenario: {}",
            snapshot.display_name(),
            snapshot.ticker,
            table.scenario_label
        );
        println!(
            "{:>6} {:>14} {:>12} {:>10} {:>16}",
            "Year", "Price", "EPS", "P/E", "IntrinsicValue"
        );
        println!("{}", "-".repeat(62));
        for row in &table.rows {
            println!(
                "{:>6} {:>14} {:>12} {:>10} {:>16}",
                row.year,
                fmt_opt(row.projected_price, 2),
                fmt_opt(row.projected_eps, 3),
                fmt_opt(row.projected_pe, 2),
                fmt_opt(row.projected_intrinsic_value, 2),
            );
        }

        let summary = table.summary();
        println!("\nSummary:");
        println!("  Years projected: {}", summary.total_years);
        if let Some(multiple) = summary.growth_multiple {
            println!("  Growth multiple: {:.4}", multiple);
        }
    }

    // Score only when P/E and EPS are both available
    match (snapshot.derived_pe(), snapshot.eps) {
        (Some(pe), Some(eps)) => {
            let externals = ExternalTerms {
                inflation_pct: args.inflation,
                interest_rate_pct: args.interest_rate,
                sentiment: args.sentiment,
            };
            let scorer = OscillatoryScorer::default();
            let score = scorer.score_with_externals(pe, eps, &externals);
            println!(
                "\nOscillatory score ({}): {:.3} - outlook {}",
                scorer.backend_name(),
                score,
                Outlook::from_score(score).as_str()
            );
        }
        _ => {
            log::warn!("insufficient data to score {} (need P/E and EPS)", snapshot.ticker);
            println!("\nOscillatory score: unavailable (missing P/E or EPS)");
        }
    }

    let peers = reference_tickers(&snapshot.sector);
    if !peers.is_empty() {
        println!("\nSector peers ({}): {}", snapshot.sector, peers.join(", "));
    }

    if let Some(path) = &args.output {
        write_csv(path, &table).with_context(|| format!("writing {}", path.display()))?;
        println!("\nFull results written to: {}", path.display());
    }

    Ok(())
}

fn fmt_opt(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{:.*}", decimals, v),
        None => "n/a".to_string(),
    }
}

fn write_csv(path: &Path, table: &valuation_system::ProjectionTable) -> anyhow::Result<()> {
    let mut file = File::create(path)?;
    writeln!(file, "Year,Price,EPS,PE,IntrinsicValue")?;
    for row in &table.rows {
        writeln!(
            file,
            "{},{},{},{},{}",
            row.year,
            csv_opt(row.projected_price),
            csv_opt(row.projected_eps),
            csv_opt(row.projected_pe),
            csv_opt(row.projected_intrinsic_value),
        )?;
    }
    Ok(())
}

fn csv_opt(value: Option<f64>) -> String {
    value.map(|v| format!("{:.8}", v)).unwrap_or_default()
}
