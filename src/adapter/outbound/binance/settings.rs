//! Binance market data configuration.

use serde::{Deserialize, Serialize};

/// Market data provider settings (`[market]` in the config file).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinanceConfig {
    /// REST API base URL, without a trailing slash.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Quote asset the screen is restricted to.
    #[serde(default = "default_quote_asset")]
    pub quote_asset: String,
    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

fn default_api_url() -> String {
    "https://api.binance.com/api/v3".into()
}

fn default_quote_asset() -> String {
    "USDT".into()
}

const fn default_timeout_ms() -> u64 {
    10_000
}

const fn default_connect_timeout_ms() -> u64 {
    5_000
}

impl Default for BinanceConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            quote_asset: default_quote_asset(),
            timeout_ms: default_timeout_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
        }
    }
}
