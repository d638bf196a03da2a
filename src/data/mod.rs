mod klines;
mod provider;
mod rate_limiter;
mod tickers;

pub use provider::{BinanceProvider, MarketDataProvider};
pub use rate_limiter::GlobalRateLimiter;
pub use tickers::TickerRow;
