//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`cache`] - In-memory snapshot cache.
//! - [`domain`] - Builders for tickers, snapshots and candidates.
//! - [`fetcher`] - `ScriptedFetcher`, a [`SnapshotFetcher`](crate::port::outbound::fetcher::SnapshotFetcher)
//!   that replays queued results.
//! - [`decision`] - `FixedDecisionMaker`, a decision-maker with a canned reply.
//! - [`llm`] - `ScriptedLlm`, an [`Llm`](crate::port::outbound::llm::Llm) that records prompts.
//! - [`config`] - Config files written to temporary directories.

pub mod cache;
pub mod config;
pub mod decision;
pub mod domain;
pub mod fetcher;
pub mod llm;
