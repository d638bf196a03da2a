//! Shared numeric newtypes (Immutable Blueprints)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct QuoteVol(f64);

impl QuoteVol {
    pub const fn new(val: f64) -> Self {
        let v = if val < 0.0 { 0.0 } else { val };
        Self(v)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for QuoteVol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let val = self.0;
        if val >= 1_000_000_000.0 {
            write!(f, "{:.1}B", val / 1_000_000_000.0)
        } else if val >= 1_000_000.0 {
            write!(f, "{:.1}M", val / 1_000_000.0)
        } else if val >= 1_000.0 {
            write!(f, "{:.0}K", val / 1_000.0)
        } else {
            write!(f, "{:.0}", val)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_vol_clamps_negative() {
        assert_eq!(QuoteVol::new(-5.0).value(), 0.0);
    }

    #[test]
    fn quote_vol_compact_display() {
        assert_eq!(QuoteVol::new(2_500_000.0).to_string(), "2.5M");
        assert_eq!(QuoteVol::new(12_000.0).to_string(), "12K");
        assert_eq!(QuoteVol::new(999.0).to_string(), "999");
    }
}
