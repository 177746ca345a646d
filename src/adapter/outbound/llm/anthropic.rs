//! Anthropic Claude LLM client.
//!
//! Provides an implementation of the [`Llm`] trait for the Anthropic
//! Messages API.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Error, Result};
use crate::port::outbound::llm::{Llm, Prompt};

/// Anthropic Messages API endpoint.
const API_URL: &str = "https://api.anthropic.com/v1/messages";

/// API version header value.
const API_VERSION: &str = "2023-06-01";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

/// Anthropic Claude API client.
#[derive(Debug)]
pub struct Anthropic {
    client: Client,
    api_key: String,
    model: String,
    max_tokens: usize,
    /// Sampling temperature (0.0 to 1.0).
    temperature: f64,
}

impl Anthropic {
    /// Create a new Anthropic client with explicit configuration.
    #[must_use]
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        max_tokens: usize,
        temperature: f64,
    ) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            max_tokens,
            temperature,
        }
    }

    /// Create a client reading the key from `ANTHROPIC_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment variable is not set.
    pub fn from_env(model: impl Into<String>, max_tokens: usize, temperature: f64) -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| Error::Config(ConfigError::MissingField { field: API_KEY_ENV }))?;
        Ok(Self::new(api_key, model, max_tokens, temperature))
    }

    fn request(&self, prompt: &Prompt) -> Request {
        Request {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            system: prompt.system.clone(),
            messages: vec![Message {
                role: "user",
                content: prompt.user.clone(),
            }],
        }
    }
}

#[derive(Serialize)]
struct Request {
    model: String,
    max_tokens: usize,
    temperature: f64,
    system: String,
    messages: Vec<Message>,
}

#[derive(Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct Response {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

impl Response {
    fn into_text(self) -> String {
        self.content.into_iter().map(|c| c.text).collect()
    }
}

#[async_trait]
impl Llm for Anthropic {
    fn name(&self) -> &'static str {
        "anthropic"
    }

    async fn complete(&self, prompt: &Prompt) -> Result<String> {
        let response = self
            .client
            .post(API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&self.request(prompt))
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::Connection(e.to_string()))?
            .json::<Response>()
            .await?;

        Ok(response.into_text())
    }
}
