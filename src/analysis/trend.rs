//! EMA trend structure and regime classification over a trailing daily
//! close series.

use serde::{Deserialize, Serialize};

use crate::config::{EPS, TrendSettings};
use crate::domain::Regime;

/// Hard minimum of closes before any trend call is made. Not configurable:
/// an EMA100 over less history than this is still mostly seed bias.
pub const MIN_TREND_SERIES_LEN: usize = 100;

/// EMA triplet, EMA20 slope and regime for one instrument.
///
/// The EMA/slope fields stay `None` when the close series is too short for
/// a trustworthy EMA100; the regime then defaults to Neutral.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub struct TrendResult {
    pub ema_fast: Option<f64>,
    pub ema_mid: Option<f64>,
    pub ema_slow: Option<f64>,
    /// One-step EMA20 change as a fraction of the current EMA20.
    pub slope: Option<f64>,
    pub regime: Regime,
}

/// EMA over the whole series, seeded with the first close.
///
/// The first-close seed biases early values compared to a warm-up average;
/// downstream consumers depend on these exact values, so the seeding must
/// not be changed. k = 2 / (period + 1).
pub fn ema_series(closes: &[f64], period: usize) -> Vec<f64> {
    let k = 2.0 / (period as f64 + 1.0);
    let mut out = Vec::with_capacity(closes.len());
    let mut prev = match closes.first() {
        Some(&first) => first,
        None => return out,
    };
    for (i, &close) in closes.iter().enumerate() {
        if i > 0 {
            prev = close * k + prev * (1.0 - k);
        }
        out.push(prev);
    }
    out
}

/// Classifies the trailing trend of `closes` (oldest first) against the
/// current `last` price.
///
/// Series shorter than [`MIN_TREND_SERIES_LEN`] yield Neutral with all
/// fields `None` rather than a confident label from an under-seeded EMA100.
pub fn classify_trend(closes: &[f64], last: f64, settings: &TrendSettings) -> TrendResult {
    if closes.len() < MIN_TREND_SERIES_LEN {
        return TrendResult::default();
    }

    let fast = ema_series(closes, settings.ema_fast);
    let mid = ema_series(closes, settings.ema_mid);
    let slow = ema_series(closes, settings.ema_slow);

    let e_fast = fast[fast.len() - 1];
    let e_fast_prev = fast[fast.len() - 2];
    let e_mid = mid[mid.len() - 1];
    let e_slow = slow[slow.len() - 1];

    let slope = (e_fast - e_fast_prev) / e_fast.max(EPS);

    let regime = if last > e_mid && e_fast > e_mid && e_mid > e_slow && slope > settings.min_slope {
        Regime::Bull
    } else if last < e_mid && e_fast < e_mid && e_mid < e_slow && slope < -settings.min_slope {
        Regime::Bear
    } else {
        Regime::Neutral
    };

    TrendResult {
        ema_fast: Some(e_fast),
        ema_mid: Some(e_mid),
        ema_slow: Some(e_slow),
        slope: Some(slope),
        regime,
    }
}
