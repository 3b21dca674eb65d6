//! Load fundamental snapshots from a watchlist CSV
//!
//! Expected columns: `Ticker,Name,Price,EPS,PE,Currency,Sector,Country`.
//! Any cell other than `Ticker` may be empty; empty cells become `None`
//! (or a label default), never zero.

use super::FundamentalSnapshot;
use csv::Reader;
use std::path::Path;

/// Errors raised while loading a watchlist
#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    #[error("failed to read watchlist: {0}")]
    Csv(#[from] csv::Error),

    #[error("watchlist {path} contained no usable rows")]
    Empty { path: String },
}

/// Raw CSV row matching the watchlist columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Ticker")]
    ticker: String,
    #[serde(rename = "Name")]
    name: Option<String>,
    #[serde(rename = "Price")]
    price: Option<f64>,
    #[serde(rename = "EPS")]
    eps: Option<f64>,
    #[serde(rename = "PE")]
    pe: Option<f64>,
    #[serde(rename = "Currency")]
    currency: Option<String>,
    #[serde(rename = "Sector")]
    sector: Option<String>,
    #[serde(rename = "Country")]
    country: Option<String>,
}

impl CsvRow {
    fn into_snapshot(self) -> FundamentalSnapshot {
        let mut snap = FundamentalSnapshot::new(self.ticker, self.price, self.eps);
        snap.name = self.name.filter(|n| !n.is_empty());
        snap.price_to_earnings = self.pe;
        if let Some(currency) = self.currency.filter(|c| !c.is_empty()) {
            snap.currency = currency;
        }
        if let Some(sector) = self.sector.filter(|s| !s.is_empty()) {
            snap.sector = sector;
        }
        if let Some(country) = self.country.filter(|c| !c.is_empty()) {
            snap.country = country;
        }
        snap
    }
}

/// Load all snapshots from a watchlist CSV file.
///
/// Rows that fail to deserialize are skipped with a warning rather than
/// aborting the whole load; a file with no usable rows is an error.
pub fn load_watchlist(path: &Path) -> Result<Vec<FundamentalSnapshot>, LoaderError> {
    let mut reader = Reader::from_path(path)?;
    let mut snapshots = Vec::new();

    for (idx, record) in reader.deserialize::<CsvRow>().enumerate() {
        match record {
            Ok(row) if row.ticker.trim().is_empty() => {
                log::warn!("watchlist row {}: empty ticker, skipping", idx + 1);
            }
            Ok(row) => snapshots.push(row.into_snapshot()),
            Err(err) => {
                log::warn!("watchlist row {}: {}, skipping", idx + 1, err);
            }
        }
    }

    if snapshots.is_empty() {
        return Err(LoaderError::Empty {
            path: path.display().to_string(),
        });
    }

    Ok(snapshots)
}
