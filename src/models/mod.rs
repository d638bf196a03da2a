mod classified;
mod snapshot;
mod summary;

pub use classified::{ClassifiedInstrument, by_regime_then_volume, by_volume_desc};
pub use snapshot::TickerSnapshot;
pub use summary::BasketSummary;
