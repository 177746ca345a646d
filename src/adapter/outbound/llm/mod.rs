//! LLM adapter modules.
//!
//! Implementations of the [`Llm`](crate::port::outbound::llm::Llm) trait for
//! the Anthropic Messages and OpenAI Chat Completions APIs.

pub mod anthropic;
pub mod openai;
