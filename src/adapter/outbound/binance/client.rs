//! Binance REST client for the 24h ticker universe.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::{debug, warn};

use super::settings::BinanceConfig;
use crate::domain::ticker::TickerEntry;
use crate::error::FetchError;
use crate::port::outbound::fetcher::SnapshotFetcher;

/// Path of the rolling 24h statistics endpoint, relative to the API base.
const TICKER_24H_PATH: &str = "/ticker/24hr";

/// HTTP client for the Binance spot API.
///
/// One request per fetch; retries are left to the refresh schedule.
pub struct BinanceClient {
    http: HttpClient,
    base_url: String,
}

impl BinanceClient {
    /// Create a client with default HTTP settings.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn from_config(config: &BinanceConfig) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Full URL of the ticker endpoint.
    #[must_use]
    pub fn ticker_url(&self) -> String {
        format!("{}{}", self.base_url, TICKER_24H_PATH)
    }
}

/// Decode a ticker array body.
///
/// Only a body that is not a JSON array fails; bad elements are kept for the
/// filter to drop.
pub(crate) fn parse_tickers(body: &[u8]) -> Result<Vec<TickerEntry>, FetchError> {
    serde_json::from_slice::<Vec<TickerEntry>>(body)
        .map_err(|e| FetchError::Malformed(e.to_string()))
}

#[async_trait]
impl SnapshotFetcher for BinanceClient {
    fn name(&self) -> &'static str {
        "binance"
    }

    async fn fetch(&self) -> Result<Vec<TickerEntry>, FetchError> {
        let url = self.ticker_url();
        debug!(url = %url, "Fetching 24h tickers");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(FetchError::Transport)?;
        let tickers = parse_tickers(&body)?;
        debug!(count = tickers.len(), "Fetched tickers");

        Ok(tickers)
    }
}
