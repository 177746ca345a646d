//! Outbound adapters (driven side).

pub mod binance;
pub mod cache;
pub mod decision;
pub mod llm;
