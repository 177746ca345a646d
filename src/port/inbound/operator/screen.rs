//! Screening projections for operator-facing adapters.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::candidate::{Candidate, Selection};
use crate::domain::profile::Profile;
use crate::domain::snapshot::CacheState;
use crate::error::Result;

/// Screening overrides from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct ScreenRequest {
    /// Raw TOML configuration content.
    pub config_toml: String,

    /// Override for the screening profile.
    pub profile: Option<Profile>,

    /// Override for the number of candidates kept after ranking.
    pub top_k: Option<usize>,
}

/// Result of one filter, score and rank pass over the cached snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct ScreenView {
    pub profile: Profile,
    pub captured_at: DateTime<Utc>,
    pub age_secs: i64,
    pub state: CacheState,
    /// Records in the snapshot.
    pub universe: usize,
    /// Records dropped as malformed.
    pub dropped: usize,
    /// Records that passed the universe filter.
    pub eligible: usize,
    /// Every scored candidate, best first.
    #[serde(skip)]
    pub ranked: Vec<Candidate>,
    #[serde(skip)]
    pub top: Vec<Candidate>,
}

/// Screening followed by the decision-maker's picks.
#[derive(Debug, Clone)]
pub struct SelectionView {
    pub screen: ScreenView,
    pub selection: Selection,
}

/// Screening use-cases for operator-facing adapters.
///
/// # Thread Safety
///
/// Implementations must be thread-safe (`Send + Sync`).
#[async_trait]
pub trait ScreenOperator: Send + Sync {
    /// Screen the cached snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the cache cannot be
    /// read, or the snapshot is stale and stale snapshots are rejected.
    fn rank(&self, request: &ScreenRequest) -> Result<ScreenView>;

    /// Screen the cached snapshot and ask the decision-maker for picks.
    ///
    /// # Errors
    ///
    /// Returns the screening errors of [`ScreenOperator::rank`], a config
    /// error when `decision.picks` exceeds the overridden `top_k`, or the
    /// decision-maker's error. An empty candidate set is not an error.
    async fn select(&self, request: &ScreenRequest) -> Result<SelectionView>;
}
