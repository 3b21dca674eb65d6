//! Score every snapshot in a watchlist CSV and print a ranked table
//!
//! Usage: cargo run --bin score_watchlist -- --watchlist watchlist.csv

use valuation_system::scoring::{oscillatory_score, ExternalTerms, Outlook};
use valuation_system::snapshot::{load_watchlist, FundamentalSnapshot};

use anyhow::Context;
use clap::Parser;
use rayon::prelude::*;
use std::path::PathBuf;

/// Rank a watchlist by oscillatory score
#[derive(Debug, Parser)]
#[command(name = "score_watchlist", version)]
struct Args {
    /// Watchlist CSV (Ticker,Name,Price,EPS,PE,Currency,Sector,Country)
    #[arg(long)]
    watchlist: PathBuf,

    /// Inflation percent for the external term
    #[arg(long, default_value_t = 0.0)]
    inflation: f64,

    /// Interest rate percent for the external term
    #[arg(long, default_value_t = 0.0)]
    interest_rate: f64,

    /// Market sentiment in [-1, 1] for the external term
    #[arg(long, default_value_t = 0.0)]
    sentiment: f64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let snapshots = load_watchlist(&args.watchlist)
        .with_context(|| format!("loading {}", args.watchlist.display()))?;
    println!("Loaded {} snapshots from {}", snapshots.len(), args.watchlist.display());

    let externals = ExternalTerms {
        inflation_pct: args.inflation,
        interest_rate_pct: args.interest_rate,
        sentiment: args.sentiment,
    };

    let mut scored: Vec<(FundamentalSnapshot, f64)> = snapshots
        .into_par_iter()
        .filter_map(|snapshot| {
            let pe = snapshot.derived_pe()?;
            let eps = snapshot.eps?;
            let score = oscillatory_score(pe, eps, &externals);
            Some((snapshot, score))
        })
        .collect();

    if scored.is_empty() {
        anyhow::bail!("no scoreable snapshots (every row is missing P/E or EPS)");
    }

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).expect("scores are finite"));

    println!(
        "{:>4} {:<8} {:<24} {:>8} {:>8} {:>8}  {}",
        "Rank", "Ticker", "Name", "P/E", "EPS", "Score", "Outlook"
    );
    println!("{}", "-".repeat(76));
    for (rank, (snapshot, score)) in scored.iter().enumerate() {
        println!(
            "{:>4} {:<8} {:<24} {:>8.1} {:>8.2} {:>8.3}  {}",
            rank + 1,
            snapshot.ticker,
            snapshot.display_name(),
            snapshot.derived_pe().unwrap_or(f64::NAN),
            snapshot.eps.unwrap_or(f64::NAN),
            score,
            Outlook::from_score(*score).as_str(),
        );
    }

    Ok(())
}
