//! Basket-level breadth / sentiment / volatility rollup.
//!
//! The sentence ladders mirror what the dashboard shows and are decision
//! order sensitive; reordering the branches changes the output.

use crate::config::ScreenerConfig;
use crate::domain::{Momentum, Regime};
use crate::models::{BasketSummary, ClassifiedInstrument};

/// Summarizes the final ranked basket of one refresh cycle.
///
/// An empty basket degrades to all-zero ratios (divisor clamped to 1)
/// rather than erroring.
pub fn summarize(rows: &[ClassifiedInstrument], config: &ScreenerConfig) -> BasketSummary {
    let total = rows.len();
    let divisor = total.max(1) as f64;

    let bull_count = count_regime(rows, Regime::Bull);
    let bear_count = count_regime(rows, Regime::Bear);
    let neutral_count = count_regime(rows, Regime::Neutral);
    let breadth = bull_count as f64 / divisor;

    let alts: Vec<&ClassifiedInstrument> = rows
        .iter()
        .filter(|r| !config.is_reference(&r.snapshot.base))
        .collect();
    let alt_breadth = if alts.is_empty() {
        0.0
    } else {
        alts.iter().filter(|r| r.regime() == Regime::Bull).count() as f64 / alts.len() as f64
    };

    let avg_range_pct = rows.iter().map(|r| r.pgl.range_pct).sum::<f64>() / divisor;
    let up_momentum = count_momentum(rows, Momentum::Up);
    let down_momentum = count_momentum(rows, Momentum::Down);

    let sentiment = sentiment_line(
        breadth,
        bull_count as f64 / divisor,
        neutral_count as f64 / divisor,
        bear_count as f64 / divisor,
        avg_range_pct,
        config,
    );

    let signals = signal_bullets(
        rows,
        bull_count,
        total,
        alt_breadth,
        up_momentum,
        down_momentum,
        config,
    );

    let interpretation = interpretation_line(rows, alt_breadth, config);

    BasketSummary {
        total,
        bull_count,
        neutral_count,
        bear_count,
        breadth,
        alt_breadth,
        avg_range_pct,
        up_momentum,
        down_momentum,
        sentiment,
        signals,
        interpretation,
    }
}

fn count_regime(rows: &[ClassifiedInstrument], regime: Regime) -> usize {
    rows.iter().filter(|r| r.regime() == regime).count()
}

fn count_momentum(rows: &[ClassifiedInstrument], momentum: Momentum) -> usize {
    rows.iter().filter(|r| r.pgl.momentum == momentum).count()
}

fn find_base<'a>(rows: &'a [ClassifiedInstrument], base: &str) -> Option<&'a ClassifiedInstrument> {
    rows.iter().find(|r| r.snapshot.base == base)
}

fn sentiment_line(
    breadth: f64,
    bull_ratio: f64,
    neutral_ratio: f64,
    bear_ratio: f64,
    avg_range_pct: f64,
    config: &ScreenerConfig,
) -> String {
    let t = &config.summary;

    // Ladder order matters: the two strong cases win over the "slightly"
    // cases, and exactly-0.5 breadth falls through to "Mixed".
    let bias = if breadth >= t.breadth_hi {
        "Positive bias: breadth is supportive."
    } else if breadth <= t.breadth_lo {
        "Negative bias: breadth is weak."
    } else if breadth > 0.5 {
        "Slightly positive: breadth improving."
    } else if breadth < 0.5 {
        "Slightly negative: breadth softening."
    } else {
        "Mixed conditions."
    };

    let volatility = if avg_range_pct < t.range_subdued {
        "subdued volatility"
    } else if avg_range_pct > t.range_elevated {
        "elevated volatility"
    } else {
        "normal volatility"
    };

    format!(
        "{bias} {:.1}% Bull, {:.1}% Neutral, {:.1}% Bear. Average 24h range: {:.1}% ({volatility}).",
        bull_ratio * 100.0,
        neutral_ratio * 100.0,
        bear_ratio * 100.0,
        avg_range_pct,
    )
}

fn signal_bullets(
    rows: &[ClassifiedInstrument],
    bull_count: usize,
    total: usize,
    alt_breadth: f64,
    up_momentum: usize,
    down_momentum: usize,
    config: &ScreenerConfig,
) -> Vec<String> {
    let mut signals = Vec::new();

    // Reference instruments missing from the basket are silently skipped.
    for &base in config.reference_bases {
        if let Some(row) = find_base(rows, base) {
            let slope_note = row
                .trend
                .slope
                .map(|s| format!(" (EMA20 slope {:.2}%)", s * 100.0))
                .unwrap_or_default();
            signals.push(format!("{base} trend: {}{slope_note}.", row.regime()));
        }
    }

    signals.push(format!(
        "Breadth: {bull_count}/{total} assets in Bull ({:.1}% of alts).",
        alt_breadth * 100.0
    ));
    signals.push(format!(
        "Momentum pockets: {up_momentum} Up vs {down_momentum} Down (by PGL)."
    ));

    signals
}

fn interpretation_line(
    rows: &[ClassifiedInstrument],
    alt_breadth: f64,
    config: &ScreenerConfig,
) -> String {
    let primary = config.primary_reference();
    let primary_regime = find_base(rows, primary).map(|r| r.regime());

    // The bearish check is evaluated last so it wins over the constructive
    // case should both ever hold.
    let mut interp =
        "Base case: range with directional moves driven by momentum pockets; respect EMA50 flips."
            .to_string();
    if primary_regime == Some(Regime::Bull) && alt_breadth > 0.5 {
        interp = format!(
            "Base case: constructive uptrend while {primary} holds above EMA50; dips likely get bought in leaders."
        );
    }
    if primary_regime == Some(Regime::Bear) {
        interp = format!(
            "Regime context: downside bias while {primary} remains below EMA50 and breadth is weak. \
             This is screening context, not an actionable edge or a trade instruction."
        );
    }
    interp
}
