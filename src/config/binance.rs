pub struct BinanceApiConfig {
    pub timeout_ms: u64,
    pub retries: u32,
    pub backoff_ms: u64,
}

impl Default for BinanceApiConfig {
    fn default() -> Self {
        Self {
            timeout_ms: BINANCE.client.timeout_ms,
            retries: BINANCE.client.retries,
            backoff_ms: BINANCE.client.backoff_ms,
        }
    }
}

/// REST constraints: weight budget, call costs, and enrichment concurrency.
pub struct RestLimits {
    pub weight_limit_minute: u32,
    pub kline_call_weight: u32,
    pub ticker_call_weight: u32,
    pub concurrent_enrich_tasks: usize,
}

pub struct ClientDefaults {
    pub timeout_ms: u64,
    pub retries: u32,
    pub backoff_ms: u64,
}

pub struct BinanceConfig {
    pub rest_base_url: &'static str,
    pub limits: RestLimits,
    pub client: ClientDefaults,
}

pub const BINANCE: BinanceConfig = BinanceConfig {
    rest_base_url: "https://api.binance.com",
    limits: RestLimits {
        weight_limit_minute: 6000,
        kline_call_weight: 2,
        // /api/v3/ticker/24hr with no symbol filter is the expensive call
        ticker_call_weight: 80,
        concurrent_enrich_tasks: 10,
    },
    client: ClientDefaults {
        timeout_ms: 5000,
        retries: 5,
        backoff_ms: 5000,
    },
};
