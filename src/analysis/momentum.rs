//! PGL momentum indicator from a single 24h snapshot.

use serde::{Deserialize, Serialize};

use crate::config::{EPS, PglThresholds};
use crate::domain::Momentum;

/// Where the last trade sits inside its 24h range, plus a z-like deviation
/// of the 24h move against that range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PglResult {
    /// Position of `last` within the high/low band. In [0, 1] for
    /// well-formed input; advisory when high/low are malformed.
    pub l: f64,
    /// Signed deviation score, unbounded.
    pub z: f64,
    pub momentum: Momentum,
    /// 24h range as a percentage of the previous close.
    pub range_pct: f64,
}

/// Computes the PGL indicator. Never fails: a degenerate snapshot
/// (high == low, zero previous close) degrades through the epsilon clamps
/// instead of dividing by zero.
pub fn calc_pgl(
    last: f64,
    prev_close: f64,
    high: f64,
    low: f64,
    thresholds: &PglThresholds,
) -> PglResult {
    let range = (high - low).max(EPS);
    let l = (last - low) / range;

    let rel_range = range / prev_close.max(EPS);
    let z = ((last / prev_close.max(EPS)) - 1.0) / rel_range.max(EPS);

    let momentum = if z >= 0.0 && l >= thresholds.up_l {
        Momentum::Up
    } else if z <= 0.0 && l <= thresholds.down_l {
        Momentum::Down
    } else {
        Momentum::Mid
    };

    PglResult {
        l,
        z,
        momentum,
        range_pct: rel_range * 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SCREENER;

    fn pgl(last: f64, prev_close: f64, high: f64, low: f64) -> PglResult {
        calc_pgl(last, prev_close, high, low, &SCREENER.pgl)
    }

    #[test]
    fn l_stays_in_unit_band_for_well_formed_input() {
        for &last in &[90.0, 95.0, 100.0, 105.0, 110.0] {
            let r = pgl(last, 100.0, 110.0, 90.0);
            assert!((0.0..=1.0).contains(&r.l), "l = {} for last {}", r.l, last);
            assert!(r.range_pct >= 0.0);
        }
    }

    #[test]
    fn flat_range_is_finite() {
        let r = pgl(100.0, 100.0, 100.0, 100.0);
        assert!(r.l.is_finite());
        assert!(r.z.is_finite());
        assert!(r.range_pct.is_finite());
    }

    #[test]
    fn zero_prev_close_is_finite() {
        let r = pgl(100.0, 0.0, 110.0, 90.0);
        assert!(r.z.is_finite());
        assert!(r.range_pct.is_finite());
    }

    #[test]
    fn label_up_needs_both_positive_z_and_high_l() {
        // Close at the top of the range after a positive move.
        assert_eq!(pgl(109.0, 100.0, 110.0, 90.0).momentum, Momentum::Up);
        // Positive move but sitting low in the range: Mid.
        let r = pgl(101.0, 95.0, 120.0, 100.0);
        assert!(r.z >= 0.0 && r.l < SCREENER.pgl.up_l);
        assert_eq!(r.momentum, Momentum::Mid);
    }

    #[test]
    fn label_down_needs_both_negative_z_and_low_l() {
        assert_eq!(pgl(91.0, 100.0, 110.0, 90.0).momentum, Momentum::Down);
        // Negative move but near the top of the range: Mid.
        let r = pgl(99.0, 100.0, 100.0, 80.0);
        assert!(r.z <= 0.0 && r.l > SCREENER.pgl.down_l);
        assert_eq!(r.momentum, Momentum::Mid);
    }

    #[test]
    fn label_grid_matches_threshold_rules() {
        // Sweep of range positions around both thresholds with both signs of z.
        for &l_target in &[0.0, 0.39, 0.40, 0.41, 0.5, 0.59, 0.60, 0.61, 1.0] {
            let low = 90.0;
            let high = 110.0;
            let last = low + l_target * (high - low);
            for &prev_close in &[last - 1.0, last + 1.0] {
                let r = pgl(last, prev_close, high, low);
                let expect = if r.z >= 0.0 && r.l >= 0.60 {
                    Momentum::Up
                } else if r.z <= 0.0 && r.l <= 0.40 {
                    Momentum::Down
                } else {
                    Momentum::Mid
                };
                assert_eq!(r.momentum, expect, "l_target {l_target}, prev {prev_close}");
            }
        }
    }

    #[test]
    fn range_pct_is_range_over_prev_close() {
        let r = pgl(100.0, 100.0, 104.0, 98.0);
        assert!((r.range_pct - 6.0).abs() < 1e-9);
    }
}
