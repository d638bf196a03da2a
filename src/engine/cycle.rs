//! One refresh cycle: filter, select, enrich concurrently, rank, summarize.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use futures::future::join_all;
use itertools::Itertools;
use tokio::sync::Semaphore;

use crate::analysis::{MIN_TREND_SERIES_LEN, TrendResult, calc_pgl, classify_trend, summarize};
use crate::config::{BINANCE, ScreenerConfig};
use crate::data::MarketDataProvider;
use crate::domain::{base_asset, is_valid_symbol};
use crate::models::{
    BasketSummary, ClassifiedInstrument, TickerSnapshot, by_regime_then_volume, by_volume_desc,
};

/// Everything one refresh cycle produced. Immutable; the runner swaps a new
/// result in wholesale and drops the old one, never a partial overwrite.
#[derive(Debug, Clone)]
pub struct CycleResult {
    /// Final display order: Bull -> Neutral -> Bear, then volume descending.
    pub instruments: Vec<ClassifiedInstrument>,
    pub summary: BasketSummary,
    pub generated_at: DateTime<Utc>,
}

/// Runs a full refresh cycle against `provider`.
///
/// Fails only when the ticker table itself cannot be fetched; a failed
/// per-instrument history fetch downgrades that instrument to Neutral with
/// no trend fields instead of failing the basket.
pub async fn run_cycle(
    provider: &dyn MarketDataProvider,
    config: &ScreenerConfig,
) -> Result<CycleResult> {
    let tickers = provider
        .fetch_tickers()
        .await
        .context("refresh cycle aborted: ticker snapshot unavailable")?;

    // Universe filter, then liquidity-ranked truncation to the basket.
    let basket: Vec<TickerSnapshot> = tickers
        .iter()
        .filter(|row| is_valid_symbol(&row.symbol, config))
        .filter_map(|row| base_asset(&row.symbol, config).map(|base| row.to_snapshot(base)))
        .sorted_by(by_volume_desc)
        .take(config.basket_limit)
        .collect();

    log::info!(
        "basket selected: {} of {} listed symbols",
        basket.len(),
        tickers.len()
    );

    // Per-instrument enrichment is independent, so fan out concurrently,
    // bounded by the enrichment task limit. join_all keeps input order, so
    // completion order cannot leak into the ranking below.
    let gate = Semaphore::new(BINANCE.limits.concurrent_enrich_tasks);
    let enriched = join_all(basket.into_iter().map(|snapshot| {
        let gate = &gate;
        async move {
            let _permit = gate.acquire().await.expect("semaphore never closed");
            enrich_instrument(provider, snapshot, config).await
        }
    }))
    .await;

    let instruments: Vec<ClassifiedInstrument> = enriched
        .into_iter()
        .sorted_by(by_regime_then_volume)
        .collect();

    let summary = summarize(&instruments, config);

    Ok(CycleResult {
        instruments,
        summary,
        generated_at: Utc::now(),
    })
}

async fn enrich_instrument(
    provider: &dyn MarketDataProvider,
    snapshot: TickerSnapshot,
    config: &ScreenerConfig,
) -> ClassifiedInstrument {
    let pgl = calc_pgl(
        snapshot.last,
        snapshot.prev_close,
        snapshot.high,
        snapshot.low,
        &config.pgl,
    );

    let trend = match provider
        .fetch_daily_closes(&snapshot.symbol, config.series_limit)
        .await
    {
        Ok(closes) => {
            if closes.len() < MIN_TREND_SERIES_LEN {
                log::debug!(
                    "{}: only {} daily closes, trend left unclassified",
                    snapshot.symbol,
                    closes.len()
                );
            }
            classify_trend(&closes, snapshot.last, &config.trend)
        }
        Err(err) => {
            log::warn!("{}: history fetch failed ({err:#}), defaulting to Neutral", snapshot.symbol);
            TrendResult::default()
        }
    };

    ClassifiedInstrument {
        snapshot,
        pgl,
        trend,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SCREENER;
    use crate::data::TickerRow;
    use crate::domain::Regime;
    use anyhow::anyhow;
    use async_trait::async_trait;

    struct StubProvider {
        tickers: Vec<TickerRow>,
        /// Daily closes per symbol; missing symbols error like a dead endpoint.
        closes: Vec<(&'static str, Vec<f64>)>,
    }

    #[async_trait]
    impl MarketDataProvider for StubProvider {
        async fn fetch_tickers(&self) -> Result<Vec<TickerRow>> {
            Ok(self.tickers.clone())
        }

        async fn fetch_daily_closes(&self, symbol: &str, _limit: usize) -> Result<Vec<f64>> {
            self.closes
                .iter()
                .find(|(s, _)| *s == symbol)
                .map(|(_, closes)| closes.clone())
                .ok_or_else(|| anyhow!("no history for {symbol}"))
        }
    }

    fn row(symbol: &str, last: f64, volume: f64) -> TickerRow {
        TickerRow {
            symbol: symbol.to_string(),
            last_price: last.to_string(),
            high_price: (last * 1.02).to_string(),
            low_price: (last * 0.98).to_string(),
            prev_close_price: last.to_string(),
            price_change_percent: "0.0".to_string(),
            quote_volume: volume.to_string(),
        }
    }

    fn rising(len: usize) -> Vec<f64> {
        (0..len).map(|i| 100.0 * 1.01_f64.powi(i as i32)).collect()
    }

    fn falling(len: usize) -> Vec<f64> {
        (0..len).map(|i| 100.0 * 0.99_f64.powi(i as i32)).collect()
    }

    #[tokio::test]
    async fn cycle_filters_ranks_and_summarizes() {
        let provider = StubProvider {
            tickers: vec![
                // Ticker prints sit above / below the final EMA50 of the
                // canned histories so the regimes come out Bull / Bear.
                row("BTCUSDT", 500.0, 900.0),
                row("ETHUSDT", 10.0, 500.0),
                row("SOLUSDT", 150.0, 100.0),
                // All of these must be filtered out of the universe.
                row("USDCUSDT", 1.0, 99999.0),
                row("BTCUPUSDT", 5.0, 99999.0),
                row("ETHBTC", 0.05, 99999.0),
            ],
            closes: vec![
                ("BTCUSDT", rising(150)),  // ends ~440
                ("ETHUSDT", falling(150)), // ends ~22
                ("SOLUSDT", rising(50)),   // too short: Neutral, no EMAs
            ],
        };

        let result = run_cycle(&provider, &SCREENER).await.unwrap();

        assert_eq!(result.instruments.len(), 3);
        let order: Vec<(&str, Regime)> = result
            .instruments
            .iter()
            .map(|r| (r.snapshot.base.as_str(), r.regime()))
            .collect();
        // Bull first, Neutral second, Bear last regardless of volume.
        assert_eq!(order[0].0, "BTC");
        assert_eq!(order[1], ("SOL", Regime::Neutral));
        assert_eq!(order[2], ("ETH", Regime::Bear));

        assert!(result.instruments[1].trend.ema_slow.is_none());
        assert_eq!(result.summary.total, 3);
        assert_eq!(result.summary.bear_count, 1);
    }

    #[tokio::test]
    async fn history_failure_degrades_to_neutral() {
        let provider = StubProvider {
            tickers: vec![row("ADAUSDT", 0.5, 100.0)],
            closes: vec![], // every history fetch errors
        };

        let result = run_cycle(&provider, &SCREENER).await.unwrap();
        assert_eq!(result.instruments.len(), 1);
        assert_eq!(result.instruments[0].regime(), Regime::Neutral);
        assert!(result.instruments[0].trend.slope.is_none());
    }

    #[tokio::test]
    async fn basket_truncates_to_limit_by_volume() {
        let tickers: Vec<TickerRow> = (0..40)
            .map(|i| row(&format!("A{i:02}USDT"), 1.0, (40 - i) as f64))
            .collect();
        let provider = StubProvider {
            tickers,
            closes: vec![],
        };

        let result = run_cycle(&provider, &SCREENER).await.unwrap();
        assert_eq!(result.instruments.len(), SCREENER.basket_limit);
        // Highest-volume symbol survives, lowest-volume ten do not.
        assert!(result.instruments.iter().any(|r| r.snapshot.symbol == "A00USDT"));
        assert!(!result.instruments.iter().any(|r| r.snapshot.symbol == "A39USDT"));
    }
}
