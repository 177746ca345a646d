//! Exchange-agnostic domain types.
//!
//! - [`ticker`] - raw provider records and their validated form
//! - [`snapshot`] - the captured ticker universe and its freshness state
//! - [`score`] - scoring parameters and the pure sub-score functions
//! - [`candidate`] - scored candidates and the final selection
//! - [`profile`] - named screening presets
//! - [`error`] - record validation errors

pub mod candidate;
pub mod error;
pub mod profile;
pub mod score;
pub mod snapshot;
pub mod ticker;
