use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use binance_sdk::spot::rest_api::RestApi;

use crate::config::{BINANCE, BinanceApiConfig};
use crate::data::klines::{configure_binance_client, fetch_daily_closes};
use crate::data::rate_limiter::GlobalRateLimiter;
use crate::data::tickers::{TickerRow, fetch_ticker_rows};

/// Abstract interface for fetching market data.
///
/// The engine only talks to this trait; tests substitute canned data.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// The full 24h ticker table for all listed symbols.
    async fn fetch_tickers(&self) -> Result<Vec<TickerRow>>;

    /// Up to `limit` daily closes for one symbol, oldest first. May return
    /// fewer rows than requested.
    async fn fetch_daily_closes(&self, symbol: &str, limit: usize) -> Result<Vec<f64>>;
}

pub struct BinanceProvider {
    rest_client: RestApi,
    http: reqwest::Client,
    limiter: GlobalRateLimiter,
}

impl BinanceProvider {
    pub async fn connect() -> Result<Self> {
        let rest_client = configure_binance_client().await?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(BinanceApiConfig::default().timeout_ms))
            .build()?;
        Ok(Self {
            rest_client,
            http,
            limiter: GlobalRateLimiter::new(BINANCE.limits.weight_limit_minute),
        })
    }
}

#[async_trait]
impl MarketDataProvider for BinanceProvider {
    async fn fetch_tickers(&self) -> Result<Vec<TickerRow>> {
        self.limiter
            .acquire(BINANCE.limits.ticker_call_weight, "ticker/24hr")
            .await;
        fetch_ticker_rows(&self.http).await
    }

    async fn fetch_daily_closes(&self, symbol: &str, limit: usize) -> Result<Vec<f64>> {
        self.limiter
            .acquire(BINANCE.limits.kline_call_weight, symbol)
            .await;
        fetch_daily_closes(&self.rest_client, symbol, limit).await
    }
}
