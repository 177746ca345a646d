//! Runtime operator implementation.

use async_trait::async_trait;
use tracing::info;

use crate::error::{ConfigError, Result};
use crate::infrastructure::config::logging::LoggingConfig;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::factory::market::build_scheduler;
use crate::infrastructure::runtime;
use crate::port::inbound::operator::runtime::{
    LogRequest, RefreshReport, RunRequest, RunStartupSnapshot, RuntimeOperator,
};

use super::entry::Operator;

#[async_trait]
impl RuntimeOperator for Operator {
    fn init_logging(&self, config_toml: &str, request: LogRequest) {
        let logging = Self::parse_config(config_toml)
            .map(|config| config.logging)
            .unwrap_or_else(|_| LoggingConfig::default());
        logging
            .with_overrides(request.verbosity, request.json)
            .init();
    }

    fn prepare_run(&self, request: &RunRequest) -> Result<RunStartupSnapshot> {
        let config = Self::load_run_config(request)?;
        Ok(RunStartupSnapshot {
            provider_url: config.market.api_url.clone(),
            quote_asset: config.market.quote_asset.clone(),
            cache_location: config.cache.path.display().to_string(),
            interval_secs: config.cache.refresh_interval_secs,
            stale_after_secs: config.staleness_policy().threshold.num_seconds(),
        })
    }

    async fn execute_run(&self, request: RunRequest) -> Result<()> {
        let config = Self::load_run_config(&request)?;
        runtime::run(&config).await
    }

    async fn refresh_once(&self, config_toml: &str) -> Result<RefreshReport> {
        let config = Self::parse_config(config_toml)?;
        let tickers = build_scheduler(&config).refresh().await?;
        info!(tickers, cache = %config.cache.path.display(), "One-shot refresh complete");
        Ok(RefreshReport {
            tickers,
            cache_location: config.cache.path.display().to_string(),
        })
    }
}

impl Operator {
    fn load_run_config(request: &RunRequest) -> Result<Config> {
        let mut config = Self::parse_config(&request.config_toml)?;
        match request.interval_secs {
            Some(0) => {
                return Err(ConfigError::InvalidValue {
                    field: "interval",
                    reason: "must be greater than 0".to_string(),
                }
                .into())
            }
            Some(secs) => config.cache.refresh_interval_secs = secs,
            None => {}
        }
        Ok(config)
    }
}
