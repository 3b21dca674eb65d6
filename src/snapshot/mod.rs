//! Fundamental snapshots and watchlist loading

mod data;
pub mod loader;

pub use data::{reference_tickers, FundamentalSnapshot};
pub use loader::{load_watchlist, LoaderError};
