//! [`Llm`] double that records prompts.

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::Result;
use crate::port::outbound::llm::{Llm, Prompt};

/// Returns a fixed completion and keeps every prompt it was sent.
pub struct ScriptedLlm {
    reply: String,
    prompts: Mutex<Vec<Prompt>>,
}

impl ScriptedLlm {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn last_prompt(&self) -> Option<Prompt> {
        self.prompts.lock().last().cloned()
    }
}

#[async_trait]
impl Llm for ScriptedLlm {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn complete(&self, prompt: &Prompt) -> Result<String> {
        self.prompts.lock().push(prompt.clone());
        Ok(self.reply.clone())
    }
}
