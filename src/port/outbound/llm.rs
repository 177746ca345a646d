//! LLM completion port.

use async_trait::async_trait;

use crate::error::Result;

/// A prompt split into the standing instructions and the per-request input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

/// Client for large language model text completion.
///
/// Implementations wrap specific providers (OpenAI, Anthropic) and handle
/// authentication and response unwrapping.
#[async_trait]
pub trait Llm: Send + Sync {
    /// Return the provider name for logging.
    fn name(&self) -> &'static str;

    /// Send a completion request and return the generated text.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the response is invalid.
    async fn complete(&self, prompt: &Prompt) -> Result<String>;
}
