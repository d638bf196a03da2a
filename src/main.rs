use std::panic;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use regime_scope::config::{SCREENER, ScreenerConfig};
use regime_scope::data::{BinanceProvider, MarketDataProvider};
use regime_scope::engine::run_cycle;
use regime_scope::report::render;
use regime_scope::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        log::error!("CRITICAL PANIC:\n{}\nStack Trace:\n{}", info, backtrace);
    }));

    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Warn, log::LevelFilter::Warn)
    };
    env_logger::Builder::new()
        .filter(None, global_level)
        .filter(Some("regime_scope"), my_code_level)
        .init();

    let args = Cli::parse();

    let mut config: ScreenerConfig = SCREENER.clone();
    if let Some(limit) = args.limit {
        config.basket_limit = limit;
    }

    let provider = BinanceProvider::connect().await?;

    match args.watch {
        None => {
            let cycle = run_cycle(&provider, &config).await?;
            println!("{}", render(&cycle));
        }
        Some(secs) => {
            watch_loop(&provider, &config, Duration::from_secs(secs.max(1))).await;
        }
    }

    Ok(())
}

/// Re-runs the screen on a fixed interval. Cycles never overlap: the next
/// one is only scheduled after the current one finishes. A failed cycle
/// keeps the previous output on screen.
async fn watch_loop(provider: &dyn MarketDataProvider, config: &ScreenerConfig, every: Duration) {
    loop {
        match run_cycle(provider, config).await {
            Ok(cycle) => {
                print!("\x1B[2J\x1B[H"); // clear screen, cursor home
                println!("{}", render(&cycle));
            }
            Err(err) => {
                log::error!("refresh cycle failed, keeping previous screen: {err:#}");
            }
        }
        tokio::time::sleep(every).await;
    }
}
