//! Daily close history via the Binance spot SDK.

use anyhow::{Context, Result, bail};
use binance_sdk::{
    config::ConfigurationRestApi,
    spot::{
        SpotRestApi,
        rest_api::{KlinesIntervalEnum, KlinesItemInner, KlinesParams, RestApi},
    },
};

use crate::config::BinanceApiConfig;

pub(crate) async fn configure_binance_client() -> Result<RestApi> {
    let config = BinanceApiConfig::default();
    let rest_conf = ConfigurationRestApi::builder()
        .timeout(config.timeout_ms)
        .retries(config.retries)
        .backoff(config.backoff_ms)
        .build()?;
    Ok(SpotRestApi::production(rest_conf))
}

/// Fetches up to `limit` daily closes for `symbol`, oldest first.
///
/// One request covers the whole window the screener needs (<= 250 candles),
/// so no pagination. The exchange may return fewer rows than requested for
/// young listings; the caller guards on series length.
pub(crate) async fn fetch_daily_closes(
    rest_client: &RestApi,
    symbol: &str,
    limit: usize,
) -> Result<Vec<f64>> {
    let params = KlinesParams::builder(symbol.to_string(), KlinesIntervalEnum::Interval1d)
        .limit(limit as i32)
        .build()?;

    let response = rest_client
        .klines(params)
        .await
        .with_context(|| format!("klines request failed for {symbol}"))?;
    let rows = response
        .data()
        .await
        .with_context(|| format!("klines body read failed for {symbol}"))?;

    rows.into_iter()
        .map(|row| close_price(&row))
        .collect::<Result<Vec<f64>>>()
        .with_context(|| format!("klines rows malformed for {symbol}"))
}

// Kline row layout: [open_time, open, high, low, close, volume, ...];
// prices arrive as strings.
fn close_price(row: &[KlinesItemInner]) -> Result<f64> {
    match row.get(4) {
        Some(KlinesItemInner::String(s)) => s
            .parse::<f64>()
            .with_context(|| format!("unparseable close price {s:?}")),
        other => bail!("unexpected close field: {other:?}"),
    }
}
