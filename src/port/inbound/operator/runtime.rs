//! Runtime control projection types for operator-facing adapters.
//!
//! Defines request and response types for the refresh loop and one-shot
//! cache refreshes.

use async_trait::async_trait;

use crate::error::Result;

/// Logging overrides from CLI flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogRequest {
    /// Number of `-v` flags.
    pub verbosity: u8,

    /// Whether to output logs as JSON.
    pub json: bool,
}

/// Refresh loop overrides from CLI flags.
#[derive(Debug, Clone)]
pub struct RunRequest {
    /// Raw TOML configuration content.
    pub config_toml: String,

    /// Override for the refresh interval in seconds.
    pub interval_secs: Option<u64>,
}

/// Startup information snapshot for display.
#[derive(Debug, Clone)]
pub struct RunStartupSnapshot {
    pub provider_url: String,
    pub quote_asset: String,
    pub cache_location: String,
    /// Resolved refresh interval.
    pub interval_secs: u64,
    /// Age at which readers consider the snapshot stale.
    pub stale_after_secs: i64,
}

/// Outcome of a one-shot refresh.
#[derive(Debug, Clone)]
pub struct RefreshReport {
    /// Number of tickers in the written snapshot.
    pub tickers: usize,
    pub cache_location: String,
}

/// Runtime control use-cases for operator-facing adapters.
///
/// # Thread Safety
///
/// Implementations must be thread-safe (`Send + Sync`).
#[async_trait]
pub trait RuntimeOperator: Send + Sync {
    /// Install the global log subscriber.
    ///
    /// Falls back to the default logging settings when `config_toml` does not
    /// parse, so that the parse error itself can still be reported.
    fn init_logging(&self, config_toml: &str, request: LogRequest);

    /// Prepare a startup snapshot from runtime overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or an override is invalid.
    fn prepare_run(&self, request: &RunRequest) -> Result<RunStartupSnapshot>;

    /// Keep the snapshot cache fresh until Ctrl+C.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the signal handler
    /// cannot be installed. Failed ticks are logged, not returned.
    async fn execute_run(&self, request: RunRequest) -> Result<()>;

    /// Fetch one snapshot and replace the cached one.
    ///
    /// # Errors
    ///
    /// Returns the fetch or write error; the previous snapshot stays in place.
    async fn refresh_once(&self, config_toml: &str) -> Result<RefreshReport>;
}
