//! OpenAI LLM client.
//!
//! Provides an implementation of the [`Llm`] trait for the OpenAI
//! Chat Completions API.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Error, Result};
use crate::port::outbound::llm::{Llm, Prompt};

/// OpenAI Chat Completions API endpoint.
const API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// OpenAI API client.
///
/// Requests are sent in JSON mode so the reply is always a single JSON
/// object.
#[derive(Debug)]
pub struct OpenAi {
    client: Client,
    api_key: String,
    /// Model identifier (e.g., "gpt-4o", "gpt-4o-mini").
    model: String,
    max_tokens: usize,
    /// Sampling temperature (0.0 to 2.0).
    temperature: f64,
}

impl OpenAi {
    /// Create a new OpenAI client with explicit configuration.
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

    /// Create a client reading the key from `OPENAI_API_KEY`.
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
            response_format: ResponseFormat {
                kind: "json_object",
            },
            messages: vec![
                Message {
                    role: "system",
                    content: prompt.system.clone(),
                },
                Message {
                    role: "user",
                    content: prompt.user.clone(),
                },
            ],
        }
    }
}

#[derive(Serialize)]
struct Request {
    model: String,
    max_tokens: usize,
    temperature: f64,
    response_format: ResponseFormat,
    messages: Vec<Message>,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct Response {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl Response {
    fn into_text(self) -> String {
        self.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default()
    }
}

#[async_trait]
impl Llm for OpenAi {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn complete(&self, prompt: &Prompt) -> Result<String> {
        let response = self
            .client
            .post(API_URL)
            .bearer_auth(&self.api_key)
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
