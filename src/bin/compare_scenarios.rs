//! Compare all three preset scenarios side by side for one snapshot
//!
//! Usage: cargo run --bin compare_scenarios -- --price 100 --eps 5

use valuation_system::projection::ProjectionConfig;
use valuation_system::snapshot::FundamentalSnapshot;
use valuation_system::ScenarioRunner;

use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Run optimistic/base/conservative projections for one ticker
#[derive(Debug, Parser)]
#[command(name = "compare_scenarios", version)]
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

    /// First projected year (inclusive)
    #[arg(long, default_value_t = 2025)]
    start: i32,

    /// Last projected year (inclusive)
    #[arg(long, default_value_t = 2030)]
    end: i32,

    /// Write per-scenario projected prices to this CSV file
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let snapshot = FundamentalSnapshot::new(args.ticker, args.price, args.eps);
    let runner = ScenarioRunner::new(ProjectionConfig::for_range(args.start, args.end));
    let tables = runner.run_scenarios(&snapshot);

    println!("Scenario comparison for {}", snapshot.ticker);
    println!(
        "{:>6} {:>14} {:>14} {:>14}",
        "Year", "Optimistic", "Base", "Conservative"
    );
    println!("{}", "-".repeat(52));

    let years = tables[0].rows.len();
    for i in 0..years {
        println!(
            "{:>6} {:>14} {:>14} {:>14}",
            tables[0].rows[i].year,
            fmt_price(tables[0].rows[i].projected_price),
            fmt_price(tables[1].rows[i].projected_price),
            fmt_price(tables[2].rows[i].projected_price),
        );
    }

    for table in &tables {
        let summary = table.summary();
        if let Some(multiple) = summary.growth_multiple {
            println!("  {:>12}: growth multiple {:.4}", table.scenario_label, multiple);
        }
    }

    if let Some(path) = &args.output {
        let mut file =
            File::create(path).with_context(|| format!("creating {}", path.display()))?;
        writeln!(file, "Year,Optimistic,Base,Conservative")?;
        for i in 0..years {
            writeln!(
                file,
                "{},{},{},{}",
                tables[0].rows[i].year,
                csv_price(tables[0].rows[i].projected_price),
                csv_price(tables[1].rows[i].projected_price),
                csv_price(tables[2].rows[i].projected_price),
            )?;
        }
        println!("\nComparison written to: {}", path.display());
    }

    Ok(())
}

fn fmt_price(value: Option<f64>) -> String {
    value.map(|v| format!("{:.2}", v)).unwrap_or_else(|| "n/a".to_string())
}

fn csv_price(value: Option<f64>) -> String {
    value.map(|v| format!("{:.8}", v)).unwrap_or_default()
}
