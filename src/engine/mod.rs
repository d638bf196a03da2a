mod cycle;

pub use cycle::{CycleResult, run_cycle};
