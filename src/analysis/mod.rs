//! The quantitative core: per-instrument indicators and basket summary.

mod momentum;
mod summarizer;
mod trend;

pub use momentum::{PglResult, calc_pgl};
pub use summarizer::summarize;
pub use trend::{MIN_TREND_SERIES_LEN, TrendResult, classify_trend, ema_series};
