//! LLM client and decision-maker factory.

use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::decision::llm::LlmDecisionMaker;
use crate::adapter::outbound::llm::anthropic::Anthropic;
use crate::adapter::outbound::llm::openai::OpenAi;
use crate::error::Result;
use crate::infrastructure::config::llm::LlmProvider;
use crate::infrastructure::config::screen::brief;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::decision::DecisionMaker;
use crate::port::outbound::llm::Llm;

/// Build the LLM client of the configured provider.
///
/// # Errors
///
/// Returns a configuration error naming the environment variable when the
/// provider's API key is not set.
pub fn build_llm_client(config: &Config) -> Result<Arc<dyn Llm>> {
    let (model, temperature, max_tokens) = config.llm.active();
    let client: Arc<dyn Llm> = match config.llm.provider {
        LlmProvider::Anthropic => Arc::new(Anthropic::from_env(model, max_tokens, temperature)?),
        LlmProvider::OpenAi => Arc::new(OpenAi::from_env(model, max_tokens, temperature)?),
    };

    info!(provider = client.name(), model, "LLM client initialized");
    Ok(client)
}

/// Build the decision-maker briefed for the configured profile.
///
/// # Errors
///
/// Propagates [`build_llm_client`] failures.
pub fn build_decision_maker(config: &Config) -> Result<Arc<dyn DecisionMaker>> {
    let llm = build_llm_client(config)?;
    Ok(Arc::new(LlmDecisionMaker::new(
        llm,
        brief(config.screen.profile),
        config.decision.picks,
    )))
}
