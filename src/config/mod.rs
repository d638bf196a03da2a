//! Configuration module for the screener.

mod binance;
mod screener;
mod types;

pub use binance::{BINANCE, BinanceApiConfig};
pub use screener::{
    EPS, PglThresholds, SCREENER, ScreenerConfig, SummaryThresholds, TrendSettings,
};
pub use types::QuoteVol;
