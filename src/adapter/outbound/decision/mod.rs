//! Decision-maker adapters.

pub mod llm;
