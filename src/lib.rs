#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod models;
pub mod report;

// Re-export commonly used types outside of crate
pub use domain::{Momentum, Regime};
pub use engine::{CycleResult, run_cycle};
pub use models::{BasketSummary, ClassifiedInstrument, TickerSnapshot};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Re-run a refresh cycle every N seconds instead of exiting after one
    #[arg(long)]
    pub watch: Option<u64>,

    /// Override the basket size (default 30)
    #[arg(long)]
    pub limit: Option<usize>,
}
