//! Terminal presentation of a finished cycle. Read-only consumer: nothing
//! here feeds back into the engine.

use chrono::Local;
use tabled::{Table, Tabled, settings::Style};

use crate::engine::CycleResult;
use crate::models::ClassifiedInstrument;

#[derive(Tabled)]
struct InstrumentRow {
    #[tabled(rename = "Asset")]
    base: String,
    #[tabled(rename = "Last")]
    last: String,
    #[tabled(rename = "24h %")]
    change_pct: String,
    #[tabled(rename = "Vol")]
    volume: String,
    #[tabled(rename = "PGL L")]
    l: String,
    #[tabled(rename = "Z")]
    z: String,
    #[tabled(rename = "Mom")]
    momentum: String,
    #[tabled(rename = "EMA20")]
    ema_fast: String,
    #[tabled(rename = "EMA50")]
    ema_mid: String,
    #[tabled(rename = "EMA100")]
    ema_slow: String,
    #[tabled(rename = "Slope20")]
    slope: String,
    #[tabled(rename = "Trend")]
    regime: String,
}

impl From<&ClassifiedInstrument> for InstrumentRow {
    fn from(row: &ClassifiedInstrument) -> Self {
        Self {
            base: row.snapshot.base.clone(),
            last: format_price(row.snapshot.last),
            change_pct: format!("{:+.2}%", row.snapshot.change_pct),
            volume: row.snapshot.quote_volume.to_string(),
            l: format!("{:.2}", row.pgl.l),
            z: format!("{:.2}", row.pgl.z),
            momentum: row.pgl.momentum.to_string(),
            ema_fast: format_opt_price(row.trend.ema_fast),
            ema_mid: format_opt_price(row.trend.ema_mid),
            ema_slow: format_opt_price(row.trend.ema_slow),
            slope: row
                .trend
                .slope
                .map(|s| format!("{:+.2}%", s * 100.0))
                .unwrap_or_else(|| "—".to_string()),
            regime: row.regime().to_string(),
        }
    }
}

/// Adaptive decimals: majors need cents, micro-caps need more digits.
fn format_price(price: f64) -> String {
    let abs = price.abs();
    if abs >= 1000.0 {
        format!("${price:.2}")
    } else if abs >= 1.0 {
        format!("${price:.4}")
    } else {
        format!("${price:.6}")
    }
}

fn format_opt_price(value: Option<f64>) -> String {
    value.map(format_price).unwrap_or_else(|| "—".to_string())
}

/// Renders the whole cycle as a printable block.
pub fn render(cycle: &CycleResult) -> String {
    let rows: Vec<InstrumentRow> = cycle.instruments.iter().map(InstrumentRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::psql());

    let summary = &cycle.summary;
    let mut out = String::new();

    out.push_str(&format!(
        "Market regime screen: {} instruments | Bull {} / Neutral {} / Bear {}\n",
        summary.total, summary.bull_count, summary.neutral_count, summary.bear_count
    ));
    out.push_str(&format!(
        "Last updated: {}\n\n",
        cycle
            .generated_at
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
    ));
    out.push_str(&table.to_string());
    out.push_str("\n\nSentiment\n  ");
    out.push_str(&summary.sentiment);
    out.push_str("\n\nSignals & triggers\n");
    for signal in &summary.signals {
        out.push_str("  - ");
        out.push_str(signal);
        out.push('\n');
    }
    out.push_str("\nInterpretation\n  ");
    out.push_str(&summary.interpretation);
    out.push('\n');

    out
}
