//! Bulk 24h ticker snapshot over plain REST.
//!
//! Binance encodes every numeric field as a string, so the wire type keeps
//! them as strings and conversion happens in one place.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::config::{BINANCE, QuoteVol};
use crate::models::TickerSnapshot;

/// One row of `/api/v3/ticker/24hr` (full-array form).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerRow {
    pub symbol: String,
    pub last_price: String,
    pub high_price: String,
    pub low_price: String,
    pub prev_close_price: String,
    pub price_change_percent: String,
    pub quote_volume: String,
}

impl TickerRow {
    /// Numeric conversion; unparseable fields fall back to 0.0 the same way
    /// the exchange reports dead pairs (all-zero rows), which the liquidity
    /// ranking then pushes out of the basket.
    pub fn to_snapshot(&self, base: &str) -> TickerSnapshot {
        TickerSnapshot {
            symbol: self.symbol.clone(),
            base: base.to_string(),
            last: parse_or_zero(&self.last_price),
            high: parse_or_zero(&self.high_price),
            low: parse_or_zero(&self.low_price),
            prev_close: parse_or_zero(&self.prev_close_price),
            change_pct: parse_or_zero(&self.price_change_percent),
            quote_volume: QuoteVol::new(parse_or_zero(&self.quote_volume)),
        }
    }
}

fn parse_or_zero(s: &str) -> f64 {
    s.parse::<f64>().unwrap_or(0.0)
}

pub(crate) async fn fetch_ticker_rows(http: &reqwest::Client) -> Result<Vec<TickerRow>> {
    let url = format!("{}/api/v3/ticker/24hr", BINANCE.rest_base_url);
    let response = http
        .get(&url)
        .send()
        .await
        .context("24h ticker request failed")?
        .error_for_status()
        .context("24h ticker request rejected")?;

    let body = response
        .text()
        .await
        .context("24h ticker body read failed")?;
    let rows: Vec<TickerRow> =
        serde_json::from_str(&body).context("24h ticker response did not parse")?;
    Ok(rows)
}
