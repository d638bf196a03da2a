mod regime;
mod symbol;

pub use regime::{Momentum, Regime};
pub use symbol::{base_asset, is_valid_symbol};
