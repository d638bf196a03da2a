use serde::{Deserialize, Serialize};

use crate::config::QuoteVol;

/// One instrument's most recent 24h ticker data, as received from the
/// exchange. Immutable once built; a refresh cycle replaces it wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickerSnapshot {
    pub symbol: String,
    pub base: String,
    pub last: f64,
    pub high: f64,
    pub low: f64,
    pub prev_close: f64,
    /// 24h price change as reported by the exchange, in percent.
    pub change_pct: f64,
    pub quote_volume: QuoteVol,
}
