use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tokio::sync::Mutex;

/// Shared request-weight budget for the Binance REST API.
///
/// Binance resets the per-minute weight counter on the wall-clock minute,
/// so saturation waits until the next :00 rather than a sliding window.
#[derive(Clone)]
pub struct GlobalRateLimiter {
    inner: Arc<Mutex<WeightWindow>>,
}

struct WeightWindow {
    used_weight: u32,
    // The minute-since-epoch index the current count belongs to.
    minute_idx: u64,
    limit: u32,
}

impl GlobalRateLimiter {
    pub fn new(limit: u32) -> Self {
        Self {
            inner: Arc::new(Mutex::new(WeightWindow {
                used_weight: 0,
                minute_idx: current_minute_idx(),
                limit,
            })),
        }
    }

    /// Waits until `cost` weight fits in the current minute, then claims it.
    pub async fn acquire(&self, cost: u32, context: &str) {
        loop {
            let wait = {
                let mut window = self.inner.lock().await;
                let now_idx = current_minute_idx();

                if now_idx > window.minute_idx {
                    window.used_weight = 0;
                    window.minute_idx = now_idx;
                }

                if window.used_weight + cost <= window.limit {
                    window.used_weight += cost;
                    return;
                }

                log::warn!(
                    "Rate limit saturated for [{}]: {}/{} weight used, waiting for next minute",
                    context,
                    window.used_weight,
                    window.limit
                );

                let seconds_into_minute = now_secs() % 60;
                // Small buffer so we land inside the next minute.
                Duration::from_secs(60 - seconds_into_minute) + Duration::from_millis(100)
            };

            tokio::time::sleep(wait).await;
        }
    }
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
        .as_secs()
}

fn current_minute_idx() -> u64 {
    now_secs() / 60
}
