//! Screener configuration (Immutable Blueprints)
//!
//! All thresholds live in one const so tests can build a modified copy
//! instead of reaching for globals.

/// Shared epsilon for safe division on degenerate market data
/// (zero range, zero previous close).
pub const EPS: f64 = 1e-12;

/// Thresholds for the PGL momentum label.
#[derive(Debug, Clone, Copy)]
pub struct PglThresholds {
    /// Range position at or above which (with z >= 0) the label is Up.
    pub up_l: f64,
    /// Range position at or below which (with z <= 0) the label is Down.
    pub down_l: f64,
}

/// EMA trend classification settings.
#[derive(Debug, Clone, Copy)]
pub struct TrendSettings {
    pub ema_fast: usize,
    pub ema_mid: usize,
    pub ema_slow: usize,
    /// Minimum |EMA20 slope| (fraction of EMA20) for a directional call.
    pub min_slope: f64,
}

/// Cut-offs for the basket summary text.
#[derive(Debug, Clone, Copy)]
pub struct SummaryThresholds {
    /// Breadth at or above this reads as positive bias.
    pub breadth_hi: f64,
    /// Breadth at or below this reads as negative bias.
    pub breadth_lo: f64,
    /// Average 24h range (%) below this is "subdued volatility".
    pub range_subdued: f64,
    /// Average 24h range (%) above this is "elevated volatility".
    pub range_elevated: f64,
}

#[derive(Debug, Clone)]
pub struct ScreenerConfig {
    /// Quote asset every analysed symbol must end with.
    pub quote_asset: &'static str,
    /// Leveraged-product suffixes banned from the base portion.
    pub banned_suffixes: &'static [&'static str],
    /// Stablecoin bases excluded from the universe.
    pub excluded_bases: &'static [&'static str],
    /// Basket size after liquidity ranking.
    pub basket_limit: usize,
    /// Daily closes requested per instrument.
    pub series_limit: usize,
    /// Reference bases for the summary (primary first).
    pub reference_bases: &'static [&'static str],

    pub pgl: PglThresholds,
    pub trend: TrendSettings,
    pub summary: SummaryThresholds,
}

impl ScreenerConfig {
    /// The primary reference base (drives the interpretation text).
    pub fn primary_reference(&self) -> &'static str {
        self.reference_bases[0]
    }

    pub fn is_reference(&self, base: &str) -> bool {
        self.reference_bases.iter().any(|&r| r == base)
    }
}

pub const SCREENER: ScreenerConfig = ScreenerConfig {
    quote_asset: "USDT",
    banned_suffixes: &["UP", "DOWN", "BULL", "BEAR"],
    excluded_bases: &["USDC", "FDUSD", "TUSD"],
    basket_limit: 30,
    series_limit: 250,
    reference_bases: &["BTC", "ETH"],

    pgl: PglThresholds {
        up_l: 0.60,
        down_l: 0.40,
    },

    trend: TrendSettings {
        ema_fast: 20,
        ema_mid: 50,
        ema_slow: 100,
        min_slope: 0.0005, // 0.05%
    },

    summary: SummaryThresholds {
        breadth_hi: 0.60,
        breadth_lo: 0.40,
        range_subdued: 2.0,
        range_elevated: 4.0,
    },
};
