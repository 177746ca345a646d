//! Application layer: the refresh write path and the screening read path.
//!
//! - [`refresh`] - scheduler that keeps the snapshot cache current
//! - [`universe`] - eligibility filter
//! - [`scoring`] - multi-factor scoring engine
//! - [`ranking`] - deterministic ordering and top-K
//! - [`pipeline`] - cache → filter → engine → selector composition
//! - [`selection`] - hand-off to the external decision-maker

pub mod pipeline;
pub mod ranking;
pub mod refresh;
pub mod scoring;
pub mod selection;
pub mod universe;
