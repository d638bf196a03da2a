//! Symbol universe filtering.

use crate::config::ScreenerConfig;

/// Strips the quote suffix, e.g. "BTCUSDT" -> "BTC".
pub fn base_asset<'a>(symbol: &'a str, config: &ScreenerConfig) -> Option<&'a str> {
    symbol.strip_suffix(config.quote_asset)
}

/// Pure eligibility predicate over a raw exchange symbol.
///
/// Rejects non-quote pairs, leveraged tokens (e.g. "BTCUPUSDT") and
/// stablecoin-vs-stablecoin pairs.
pub fn is_valid_symbol(symbol: &str, config: &ScreenerConfig) -> bool {
    let Some(base) = base_asset(symbol, config) else {
        return false;
    };
    if base.is_empty() {
        return false;
    }
    for suffix in config.banned_suffixes {
        if base.ends_with(suffix) {
            return false;
        }
    }
    !config.excluded_bases.iter().any(|&b| b == base)
}
