//! Configuration operator implementation.

use crate::adapter::outbound::llm::{anthropic, openai};
use crate::application::selection::Payload;
use crate::error::Result;
use crate::infrastructure::config::llm::LlmProvider;
use crate::port::inbound::operator::config::{
    ConfigCache, ConfigScreen, ConfigValidationReport, ConfigView, ConfigurationOperator,
};

use super::entry::Operator;

impl ConfigurationOperator for Operator {
    fn show_config(&self, config_toml: &str) -> Result<ConfigView> {
        let config = Self::parse_config(config_toml)?;
        let (model, _, _) = config.llm.active();
        let payload = match config.decision.payload {
            Payload::TopK => "top_k",
            Payload::All => "all",
        };

        Ok(ConfigView {
            provider_url: config.market.api_url.clone(),
            quote_asset: config.market.quote_asset.clone(),
            cache: ConfigCache {
                location: config.cache.path.display().to_string(),
                refresh_interval_secs: config.cache.refresh_interval_secs,
                stale_after_secs: config.staleness_policy().threshold.num_seconds(),
                reject_stale: config.cache.reject_stale,
            },
            screen: ConfigScreen {
                profile: config.screen.profile,
                top_k: config.top_k(),
                picks: config.decision.picks,
                payload: payload.to_string(),
            },
            llm_provider: config.llm.provider.as_str().to_string(),
            llm_model: model.to_string(),
            effective_toml: config.to_toml()?,
        })
    }

    fn validate_config(&self, config_toml: &str) -> Result<ConfigValidationReport> {
        let config = Self::parse_config(config_toml)?;
        let mut warnings = Vec::new();

        let key_env = match config.llm.provider {
            LlmProvider::Anthropic => anthropic::API_KEY_ENV,
            LlmProvider::OpenAi => openai::API_KEY_ENV,
        };
        if std::env::var(key_env).is_err() {
            warnings.push(format!("{key_env} not set (required for `select`)"));
        }

        Ok(ConfigValidationReport { warnings })
    }
}
