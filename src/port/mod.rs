//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the seams where the screening core meets the outside world:
//!
//! ```text
//!   ┌──────────────┐      ┌─────────────────────────┐      ┌───────────────┐
//!   │   Snapshot   │─────▶│       Application       │─────▶│   Decision    │
//!   │   Fetcher    │      │ refresh │ filter/score  │      │    Maker      │
//!   └──────────────┘      └────┬────────────▲───────┘      └───────────────┘
//!                              │  write     │ read
//!                              ▼            │
//!                         ┌─────────────────┴───┐
//!                         │   Snapshot Cache    │
//!                         └─────────────────────┘
//! ```
//!
//! # Outbound
//!
//! - [`SnapshotFetcher`](outbound::fetcher::SnapshotFetcher) - full ticker universe from the market data provider
//! - [`SnapshotCache`](outbound::cache::SnapshotCache) - single-writer, multi-reader snapshot storage
//! - [`DecisionMaker`](outbound::decision::DecisionMaker) - external final selection over ranked candidates
//! - [`Llm`](outbound::llm::Llm) - text completion backend used by the LLM decision-maker
//!
//! # Inbound
//!
//! - [`OperatorPort`](inbound::operator::port::OperatorPort) - use-cases driven by the CLI

pub mod inbound;
pub mod outbound;
