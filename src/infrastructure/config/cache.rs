//! Snapshot cache and refresh schedule configuration.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::application::pipeline::StalenessPolicy;

/// Cache settings (`[cache]`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Location of the shared snapshot file.
    #[serde(default = "default_path")]
    pub path: PathBuf,

    /// Seconds between refresh ticks. Defaults to 180.
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,

    /// A snapshot older than `refresh_interval × staleness_tolerance` is
    /// stale. Defaults to 2.0.
    #[serde(default = "default_staleness_tolerance")]
    pub staleness_tolerance: f64,

    /// Refuse to screen stale snapshots instead of warning.
    #[serde(default)]
    pub reject_stale: bool,
}

impl CacheConfig {
    #[must_use]
    pub const fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    #[must_use]
    pub fn staleness(&self) -> StalenessPolicy {
        StalenessPolicy::from_interval(
            self.refresh_interval(),
            self.staleness_tolerance,
            self.reject_stale,
        )
    }
}

fn default_path() -> PathBuf {
    PathBuf::from("cache.json")
}

const fn default_refresh_interval_secs() -> u64 {
    180
}

const fn default_staleness_tolerance() -> f64 {
    2.0
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            refresh_interval_secs: default_refresh_interval_secs(),
            staleness_tolerance: default_staleness_tolerance(),
            reject_stale: false,
        }
    }
}
