//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe infrastructure dependencies such as the market
//! data provider, snapshot storage and the external decision-maker.

pub mod cache;
pub mod decision;
pub mod fetcher;
pub mod llm;
