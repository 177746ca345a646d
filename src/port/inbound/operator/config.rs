//! Configuration projections for operator-facing adapters.

use serde::Serialize;

use crate::domain::profile::Profile;
use crate::error::Result;

/// Screening section of a configuration view.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigScreen {
    pub profile: Profile,
    pub top_k: usize,
    pub picks: usize,
    pub payload: String,
}

/// Cache section of a configuration view.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigCache {
    pub location: String,
    pub refresh_interval_secs: u64,
    pub stale_after_secs: i64,
    pub reject_stale: bool,
}

/// Full configuration projection for operator-facing output.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigView {
    pub provider_url: String,
    pub quote_asset: String,
    pub cache: ConfigCache,
    pub screen: ConfigScreen,
    pub llm_provider: String,
    pub llm_model: String,
    /// The effective configuration with every default filled in.
    pub effective_toml: String,
}

/// Validation output for `config validate`.
#[derive(Debug, Clone, Default)]
pub struct ConfigValidationReport {
    pub warnings: Vec<String>,
}

/// Configuration use-cases for operator-facing adapters.
pub trait ConfigurationOperator: Send + Sync {
    /// Build a projection for `config show`.
    fn show_config(&self, config_toml: &str) -> Result<ConfigView>;

    /// Validate config and return non-fatal warnings.
    fn validate_config(&self, config_toml: &str) -> Result<ConfigValidationReport>;
}
