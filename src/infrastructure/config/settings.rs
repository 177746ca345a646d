//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all settings. Every
//! section is optional; missing sections take their defaults. Provider API
//! keys are read from the environment, never from the config file.
//!
//! # Example
//!
//! ```no_run
//! use tickerscope::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::cache::CacheConfig;
use super::decision::DecisionConfig;
use super::llm::LlmConfig;
use super::logging::LoggingConfig;
use super::screen::ScreenConfig;
use crate::adapter::outbound::binance::settings::BinanceConfig;
use crate::application::pipeline::StalenessPolicy;
use crate::application::scoring::ScoringConfig;
use crate::application::selection::{Payload, SelectionPolicy};
use crate::application::universe::FilterConfig;
use crate::error::{ConfigError, Error, Result};

/// Main application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Market data provider.
    #[serde(default)]
    pub market: BinanceConfig,

    /// Snapshot cache location and refresh schedule.
    #[serde(default)]
    pub cache: CacheConfig,

    /// Screening profile and overrides.
    #[serde(default)]
    pub screen: ScreenConfig,

    /// Contract with the decision-maker.
    #[serde(default)]
    pub decision: DecisionConfig,

    /// LLM provider backing the decision-maker.
    #[serde(default)]
    pub llm: LlmConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Validate configuration values.
    ///
    /// Also called after CLI overrides are applied, so it is public.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        if self.market.api_url.is_empty() {
            return Err(ConfigError::MissingField {
                field: "market.api_url",
            }
            .into());
        }
        if let Err(e) = url::Url::parse(&self.market.api_url) {
            return Err(ConfigError::InvalidValue {
                field: "market.api_url",
                reason: e.to_string(),
            }
            .into());
        }
        if self.market.quote_asset.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "market.quote_asset",
            }
            .into());
        }
        if self.market.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "market.timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        if self.cache.path.as_os_str().is_empty() {
            return Err(ConfigError::MissingField { field: "cache.path" }.into());
        }
        if self.cache.refresh_interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "cache.refresh_interval_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        let tolerance = self.cache.staleness_tolerance;
        if !tolerance.is_finite() || tolerance < 1.0 {
            return Err(ConfigError::InvalidValue {
                field: "cache.staleness_tolerance",
                reason: format!("must be at least 1, got {tolerance}"),
            }
            .into());
        }

        self.screen.validate()?;
        self.validate_selection()?;

        let (_, temperature, max_tokens) = self.llm.active();
        if !temperature.is_finite() || temperature < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "llm.temperature",
                reason: "must be a non-negative number".to_string(),
            }
            .into());
        }
        if max_tokens == 0 {
            return Err(ConfigError::InvalidValue {
                field: "llm.max_tokens",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Check the decision settings against the screening settings.
    ///
    /// Runs again after command-line overrides change `top_k`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for `decision.picks` when it is
    /// zero, or larger than `top_k` while the payload is limited to the top.
    pub fn validate_selection(&self) -> Result<()> {
        let picks = self.decision.picks;
        if picks == 0 {
            return Err(ConfigError::InvalidValue {
                field: "decision.picks",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        let top_k = self.top_k();
        if self.decision.payload == Payload::TopK && picks > top_k {
            return Err(ConfigError::InvalidValue {
                field: "decision.picks",
                reason: format!("{picks} exceeds top_k ({top_k}) with payload \"top_k\""),
            }
            .into());
        }
        Ok(())
    }

    /// Render the effective configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if a value cannot be represented in TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Parse(e.to_string()))
    }

    #[must_use]
    pub fn staleness_policy(&self) -> StalenessPolicy {
        self.cache.staleness()
    }

    #[must_use]
    pub fn filter_config(&self) -> FilterConfig {
        self.screen.filter_config(&self.market.quote_asset)
    }

    #[must_use]
    pub fn scoring_config(&self) -> ScoringConfig {
        self.screen.scoring_config()
    }

    #[must_use]
    pub fn top_k(&self) -> usize {
        self.screen.top_k()
    }

    #[must_use]
    pub const fn selection_policy(&self) -> SelectionPolicy {
        self.decision.policy()
    }

    /// Initialize logging based on configuration.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::domain::profile::Profile;
    use crate::infrastructure::config::llm::LlmProvider;

    #[test]
    fn empty_file_takes_defaults() {
        let config = Config::parse_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.market.quote_asset, "USDT");
        assert_eq!(config.cache.refresh_interval_secs, 180);
        assert_eq!(config.top_k(), 10);
        assert_eq!(config.selection_policy().picks, 3);
        assert_eq!(config.llm.provider, LlmProvider::OpenAi);
    }

    #[test]
    fn staleness_threshold_is_interval_times_tolerance() {
        let config = Config::parse_toml(
            r#"
            [cache]
            refresh_interval_secs = 60
            staleness_tolerance = 3.0
            reject_stale = true
            "#,
        )
        .unwrap();
        let policy = config.staleness_policy();
        assert_eq!(policy.threshold, Duration::seconds(180));
        assert!(policy.reject_stale);
    }

    #[test]
    fn parses_full_screen_section() {
        let config = Config::parse_toml(
            r#"
            [market]
            quote_asset = "FDUSD"

            [screen]
            profile = "discovery"
            top_k = 4

            [screen.filter]
            min_volume = 500000.0
            exclude = ["PEPE"]

            [screen.scoring]
            momentum = "price_delta"

            [screen.scoring.weights]
            momentum = 0.4
            volatility = 0.3
            volume = 0.1
            trades = 0.1
            trend = 0.1

            [decision]
            picks = 2
            payload = "all"
            "#,
        )
        .unwrap();

        assert_eq!(config.screen.profile, Profile::Discovery);
        assert_eq!(config.top_k(), 4);
        let filter = config.filter_config();
        assert_eq!(filter.quote_asset, "FDUSD");
        assert_eq!(filter.min_volume, 500_000.0);
        assert_eq!(filter.exclude, vec!["PEPE".to_string()]);
        assert_eq!(config.scoring_config().weights.trend, 0.1);
        assert_eq!(config.selection_policy().payload, Payload::All);
    }

    #[test]
    fn rejects_unparsable_url() {
        let err = Config::parse_toml(
            r#"
            [market]
            api_url = "not a url"
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("market.api_url"));
    }

    #[test]
    fn rejects_zero_interval() {
        let err = Config::parse_toml("[cache]\nrefresh_interval_secs = 0\n").unwrap_err();
        assert!(err.to_string().contains("cache.refresh_interval_secs"));
    }

    #[test]
    fn rejects_tolerance_below_one() {
        let err = Config::parse_toml("[cache]\nstaleness_tolerance = 0.5\n").unwrap_err();
        assert!(err.to_string().contains("cache.staleness_tolerance"));
    }

    #[test]
    fn rejects_zero_picks() {
        let err = Config::parse_toml("[decision]\npicks = 0\n").unwrap_err();
        assert!(err.to_string().contains("decision.picks"));
    }

    #[test]
    fn rejects_picks_above_top_k() {
        let err =
            Config::parse_toml("[screen]\ntop_k = 2\n\n[decision]\npicks = 3\n").unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidValue {
                field: "decision.picks",
                ..
            })
        ));

        let err = Config::parse_toml(
            "[screen]\nprofile = \"discovery\"\n\n[decision]\npicks = 4\n",
        )
        .unwrap_err();
        assert!(err.to_string().contains("decision.picks"));
    }

    #[test]
    fn picks_above_top_k_are_fine_with_the_full_payload() {
        let config = Config::parse_toml(
            "[screen]\ntop_k = 2\n\n[decision]\npicks = 3\npayload = \"all\"\n",
        )
        .unwrap();
        assert_eq!(config.selection_policy().picks, 3);
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = Config::parse_toml("[cache\n").unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::Parse(_))));
    }

    #[test]
    fn shown_config_parses_back() {
        let mut config = Config::default();
        config.screen.top_k = Some(7);
        config.llm.provider = LlmProvider::Anthropic;

        let rendered = config.to_toml().unwrap();
        let reparsed = Config::parse_toml(&rendered).unwrap();
        assert_eq!(reparsed, config);
    }
}
