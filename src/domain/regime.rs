use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Trailing-trend classification of a single instrument.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, Default,
)]
pub enum Regime {
    Bull,
    #[default]
    Neutral,
    Bear,
}

impl Regime {
    /// Display priority: Bull sorts first, Bear last.
    pub fn rank(self) -> u8 {
        match self {
            Regime::Bull => 0,
            Regime::Neutral => 1,
            Regime::Bear => 2,
        }
    }
}

/// Intraday momentum label from the PGL indicator.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, Default,
)]
pub enum Momentum {
    Up,
    #[default]
    Mid,
    Down,
}
