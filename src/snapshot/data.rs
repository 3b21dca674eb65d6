//! Fundamental snapshot structures matching the market-data provider format

use serde::{Deserialize, Serialize};

/// A point-in-time fundamental snapshot for one ticker.
///
/// Every market-sourced field is optional: providers routinely omit price,
/// EPS, or trailing P/E for thinly covered names. Absence is carried as
/// `None` through every downstream computation, never substituted with zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundamentalSnapshot {
    /// Ticker symbol (upper-cased)
    pub ticker: String,

    /// Display name, when the provider reports one
    pub name: Option<String>,

    /// Current price, currency-denominated
    pub price: Option<f64>,

    /// Trailing earnings per share
    pub eps: Option<f64>,

    /// Trailing price-to-earnings ratio
    pub price_to_earnings: Option<f64>,

    /// Reporting currency
    pub currency: String,

    /// Sector label
    pub sector: String,

    /// Country label
    pub country: String,
}

impl FundamentalSnapshot {
    /// Create a snapshot with only the core valuation fields set
    pub fn new(ticker: impl Into<String>, price: Option<f64>, eps: Option<f64>) -> Self {
        let ticker: String = ticker.into();
        let ticker = ticker.trim().to_uppercase();
        Self {
            ticker,
            name: None,
            price,
            eps,
            price_to_earnings: None,
            currency: "USD".to_string(),
            sector: "Unknown".to_string(),
            country: "Unknown".to_string(),
        }
    }

    /// Display name, falling back to the ticker
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.ticker)
    }

    /// Trailing P/E, derived from price / EPS when the provider omitted it
    pub fn derived_pe(&self) -> Option<f64> {
        if self.price_to_earnings.is_some() {
            return self.price_to_earnings;
        }
        match (self.price, self.eps) {
            (Some(price), Some(eps)) if eps != 0.0 => Some(price / eps),
            _ => None,
        }
    }

    /// Whether the snapshot carries enough data to score (P/E and EPS)
    pub fn is_scoreable(&self) -> bool {
        self.derived_pe().is_some() && self.eps.is_some()
    }
}

/// Reference tickers by sector, used for peer comparison tables.
///
/// Unknown sectors yield an empty slice (no peers to compare against).
pub fn reference_tickers(sector: &str) -> &'static [&'static str] {
    match sector {
        "Technology" => &["AAPL", "MSFT", "GOOGL", "AMZN", "META"],
        "Consumer Cyclical" => &["TSLA", "NFLX", "SBUX"],
        "Healthcare" => &["AMGN", "GILD", "BIIB"],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_derived_pe_prefers_reported_value() {
        let mut snap = FundamentalSnapshot::new("AAPL", Some(200.0), Some(5.0));
        snap.price_to_earnings = Some(33.0);
        assert_relative_eq!(snap.derived_pe().unwrap(), 33.0);
    }

    #[test]
    fn test_derived_pe_from_price_and_eps() {
        let snap = FundamentalSnapshot::new("AAPL", Some(200.0), Some(5.0));
        assert_relative_eq!(snap.derived_pe().unwrap(), 40.0);
    }

    #[test]
    fn test_derived_pe_zero_eps_undefined() {
        let snap = FundamentalSnapshot::new("ZERO", Some(200.0), Some(0.0));
        assert!(snap.derived_pe().is_none());
    }

    #[test]
    fn test_ticker_normalized() {
        let snap = FundamentalSnapshot::new("  amzn ", None, None);
        assert_eq!(snap.ticker, "AMZN");
        assert_eq!(snap.display_name(), "AMZN");
        assert!(!snap.is_scoreable());
    }

    #[test]
    fn test_reference_tickers() {
        assert_eq!(reference_tickers("Technology").len(), 5);
        assert!(reference_tickers("Utilities").is_empty());
    }
}
