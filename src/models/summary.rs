use serde::{Deserialize, Serialize};

/// Cross-asset rollup of one refresh cycle. Read-only; recomputed from
/// scratch every cycle.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BasketSummary {
    pub total: usize,
    pub bull_count: usize,
    pub neutral_count: usize,
    pub bear_count: usize,
    /// Fraction of the basket classified Bull.
    pub breadth: f64,
    /// Bull fraction among non-reference instruments (0 when there are none).
    pub alt_breadth: f64,
    /// Mean of per-instrument 24h range percentages.
    pub avg_range_pct: f64,
    pub up_momentum: usize,
    pub down_momentum: usize,

    pub sentiment: String,
    pub signals: Vec<String>,
    pub interpretation: String,
}
