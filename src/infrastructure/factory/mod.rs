//! Factory modules for building infrastructure components.
//!
//! Provides factory functions that construct fully-configured components from
//! application configuration.
//!
//! # Submodules
//!
//! - [`llm`] - LLM client and decision-maker construction
//! - [`market`] - Fetcher, snapshot cache and refresh scheduler construction
//! - [`screen`] - Read pipeline construction

pub mod llm;
pub mod market;
pub mod screen;
