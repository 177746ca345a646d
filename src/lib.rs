//! tickerscope - market ticker snapshot cache and multi-factor screener.
//!
//! A background scheduler keeps one snapshot of the provider's 24h ticker
//! universe fresh in a shared cache. On demand, the read path filters that
//! snapshot to an eligible universe, scores every eligible ticker, ranks the
//! candidates and optionally hands the top of the list to an external
//! decision-maker for the final picks.
//!
//! # Architecture
//!
//! - [`domain`] - Tickers, snapshots, sub-score functions, candidates
//! - [`port`] - Traits at the edges: fetcher, cache, decision-maker, LLM
//! - [`application`] - Refresh scheduler and the filter → score → rank pipeline
//! - [`adapter`] - Binance client, file cache, LLM providers, the CLI
//! - [`infrastructure`] - Configuration, factories and the runtime loop
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use tickerscope::adapter::outbound::cache::file::FileSnapshotCache;
//! use tickerscope::application::pipeline::{ScreenPipeline, StalenessPolicy};
//! use tickerscope::application::scoring::{ScoringConfig, ScoringEngine};
//! use tickerscope::application::universe::{FilterConfig, UniverseFilter};
//!
//! let pipeline = ScreenPipeline::new(
//!     Arc::new(FileSnapshotCache::new("cache.json")),
//!     UniverseFilter::new(FilterConfig::scalping()),
//!     ScoringEngine::new(ScoringConfig::scalping()),
//!     10,
//!     StalenessPolicy::from_interval(std::time::Duration::from_secs(180), 2.0, false),
//! );
//! let screening = pipeline.run(chrono::Utc::now())?;
//! println!("{} candidates", screening.top.len());
//! # Ok::<(), tickerscope::error::Error>(())
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
