use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::analysis::{PglResult, TrendResult};
use crate::domain::Regime;
use crate::models::TickerSnapshot;

/// Snapshot + momentum + trend for one basket member.
///
/// Built once per refresh cycle and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedInstrument {
    pub snapshot: TickerSnapshot,
    pub pgl: PglResult,
    pub trend: TrendResult,
}

impl ClassifiedInstrument {
    pub fn regime(&self) -> Regime {
        self.trend.regime
    }
}

/// Liquidity ordering: higher quote volume first. Used for basket selection
/// before classification.
pub fn by_volume_desc(a: &TickerSnapshot, b: &TickerSnapshot) -> Ordering {
    b.quote_volume
        .value()
        .partial_cmp(&a.quote_volume.value())
        .unwrap_or(Ordering::Equal)
}

/// Display ordering: Bull before Neutral before Bear, then by descending
/// quote volume. Must be used with a stable sort so equal keys keep their
/// input order.
pub fn by_regime_then_volume(a: &ClassifiedInstrument, b: &ClassifiedInstrument) -> Ordering {
    a.regime()
        .rank()
        .cmp(&b.regime().rank())
        .then_with(|| by_volume_desc(&a.snapshot, &b.snapshot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{PglResult, TrendResult, calc_pgl};
    use crate::config::{QuoteVol, SCREENER};
    use crate::domain::Regime;

    fn snapshot(base: &str, volume: f64) -> TickerSnapshot {
        TickerSnapshot {
            symbol: format!("{base}USDT"),
            base: base.to_string(),
            last: 100.0,
            high: 110.0,
            low: 90.0,
            prev_close: 100.0,
            change_pct: 0.0,
            quote_volume: QuoteVol::new(volume),
        }
    }

    fn classified(base: &str, volume: f64, regime: Regime) -> ClassifiedInstrument {
        let snapshot = snapshot(base, volume);
        let pgl: PglResult = calc_pgl(
            snapshot.last,
            snapshot.prev_close,
            snapshot.high,
            snapshot.low,
            &SCREENER.pgl,
        );
        ClassifiedInstrument {
            snapshot,
            pgl,
            trend: TrendResult {
                regime,
                ..TrendResult::default()
            },
        }
    }

    #[test]
    fn volume_ranking_is_descending() {
        let mut rows = vec![snapshot("AAA", 10.0), snapshot("BBB", 200.0), snapshot("CCC", 50.0)];
        rows.sort_by(by_volume_desc);
        let bases: Vec<&str> = rows.iter().map(|r| r.base.as_str()).collect();
        assert_eq!(bases, ["BBB", "CCC", "AAA"]);
    }

    #[test]
    fn regime_groups_come_before_volume() {
        let mut rows = vec![
            classified("BEAR1", 1000.0, Regime::Bear),
            classified("NEUT1", 500.0, Regime::Neutral),
            classified("BULL1", 10.0, Regime::Bull),
            classified("BULL2", 300.0, Regime::Bull),
        ];
        rows.sort_by(by_regime_then_volume);
        let bases: Vec<&str> = rows.iter().map(|r| r.snapshot.base.as_str()).collect();
        assert_eq!(bases, ["BULL2", "BULL1", "NEUT1", "BEAR1"]);
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let mut rows = vec![
            classified("FIRST", 100.0, Regime::Neutral),
            classified("SECOND", 100.0, Regime::Neutral),
        ];
        rows.sort_by(by_regime_then_volume);
        assert_eq!(rows[0].snapshot.base, "FIRST");
        assert_eq!(rows[1].snapshot.base, "SECOND");
    }
}
