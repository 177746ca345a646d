//! Cache status projection for operator-facing adapters.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::snapshot::CacheState;
use crate::error::Result;

/// Point-in-time view of the snapshot cache.
#[derive(Debug, Clone, Serialize)]
pub struct StatusSnapshot {
    /// Where the cache lives, for display.
    pub cache: String,
    pub state: CacheState,
    pub captured_at: Option<DateTime<Utc>>,
    pub age_secs: Option<i64>,
    pub tickers: Option<usize>,
    /// Age at which the snapshot counts as stale.
    pub threshold_secs: i64,
}

/// Status use-cases for operator-facing adapters.
pub trait StatusOperator: Send + Sync {
    /// Classify the cached snapshot.
    ///
    /// An empty cache is a state, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the cache exists
    /// but cannot be read.
    fn load_status(&self, config_toml: &str) -> Result<StatusSnapshot>;
}
