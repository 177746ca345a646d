//! LLM provider configuration.
//!
//! Configures the model used by the decision-maker.

use serde::{Deserialize, Serialize};

/// LLM provider configuration.
///
/// API keys are read from environment variables (`ANTHROPIC_API_KEY` or
/// `OPENAI_API_KEY`) at startup, never from the config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LlmConfig {
    /// LLM provider to use. Defaults to OpenAI.
    #[serde(default)]
    pub provider: LlmProvider,

    /// Used when `provider` is set to `anthropic`.
    #[serde(default)]
    pub anthropic: AnthropicConfig,

    /// Used when `provider` is set to `openai`.
    #[serde(default)]
    pub openai: OpenAiConfig,
}

impl LlmConfig {
    /// Model, temperature and token limit of the selected provider.
    #[must_use]
    pub fn active(&self) -> (&str, f64, usize) {
        match self.provider {
            LlmProvider::Anthropic => (
                &self.anthropic.model,
                self.anthropic.temperature,
                self.anthropic.max_tokens,
            ),
            LlmProvider::OpenAi => (
                &self.openai.model,
                self.openai.temperature,
                self.openai.max_tokens,
            ),
        }
    }
}

/// LLM provider selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    /// Anthropic Claude models.
    Anthropic,
    /// OpenAI GPT models.
    #[default]
    OpenAi,
}

impl LlmProvider {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Anthropic => "anthropic",
            Self::OpenAi => "openai",
        }
    }
}

/// Anthropic-specific configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnthropicConfig {
    /// Model identifier. Defaults to "claude-3-5-haiku-latest".
    #[serde(default = "default_anthropic_model")]
    pub model: String,

    /// Sampling temperature. Defaults to 0.
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Maximum tokens in the response. Defaults to 1024.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            model: default_anthropic_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

/// OpenAI-specific configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenAiConfig {
    /// Model identifier. Defaults to "gpt-4o-mini".
    #[serde(default = "default_openai_model")]
    pub model: String,

    /// Sampling temperature. Defaults to 0.
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Maximum tokens in the response. Defaults to 1024.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            model: default_openai_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

fn default_anthropic_model() -> String {
    "claude-3-5-haiku-latest".into()
}

fn default_openai_model() -> String {
    "gpt-4o-mini".into()
}

const fn default_temperature() -> f64 {
    0.0
}

const fn default_max_tokens() -> usize {
    1024
}
