//! Read path: cache → filter → engine → selector.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::{info, warn};

use super::ranking::RankSelector;
use super::scoring::ScoringEngine;
use super::universe::UniverseFilter;
use crate::domain::candidate::Candidate;
use crate::domain::snapshot::{CacheState, Snapshot};
use crate::error::{Error, Result};
use crate::port::outbound::cache::SnapshotCache;

/// How the read path treats an old snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StalenessPolicy {
    /// Age at which a snapshot counts as stale.
    pub threshold: Duration,
    /// Fail with [`Error::StaleCache`] instead of warning.
    pub reject_stale: bool,
}

impl StalenessPolicy {
    /// Threshold of `interval × tolerance`.
    #[must_use]
    pub fn from_interval(interval: std::time::Duration, tolerance: f64, reject_stale: bool) -> Self {
        let millis = (interval.as_millis() as f64 * tolerance).round() as i64;
        Self {
            threshold: Duration::milliseconds(millis),
            reject_stale,
        }
    }
}

/// One screening run over the cached snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Screening {
    pub captured_at: DateTime<Utc>,
    pub age: Duration,
    pub state: CacheState,
    /// Raw records in the snapshot.
    pub universe: usize,
    /// Malformed records dropped before filtering.
    pub dropped: usize,
    /// Records that passed the universe filter.
    pub eligible: usize,
    /// Every scored candidate, best first.
    pub ranked: Vec<Candidate>,
    /// The first `top_k` of `ranked`.
    pub top: Vec<Candidate>,
}

/// Composes the read-side stages over a snapshot cache.
pub struct ScreenPipeline {
    cache: Arc<dyn SnapshotCache>,
    filter: UniverseFilter,
    engine: ScoringEngine,
    top_k: usize,
    staleness: StalenessPolicy,
}

impl ScreenPipeline {
    #[must_use]
    pub fn new(
        cache: Arc<dyn SnapshotCache>,
        filter: UniverseFilter,
        engine: ScoringEngine,
        top_k: usize,
        staleness: StalenessPolicy,
    ) -> Self {
        Self {
            cache,
            filter,
            engine,
            top_k,
            staleness,
        }
    }

    #[must_use]
    pub const fn top_k(&self) -> usize {
        self.top_k
    }

    /// Read the cache and screen the snapshot found there.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CacheUnavailable`] when nothing was ever written,
    /// [`Error::StaleCache`] when the snapshot is stale and the policy rejects
    /// stale data, or the underlying read error.
    pub fn run(&self, now: DateTime<Utc>) -> Result<Screening> {
        let snapshot = self.cache.read()?;
        self.screen(&snapshot, now)
    }

    /// Screen a snapshot already in hand.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StaleCache`] when the policy rejects the snapshot.
    pub fn screen(&self, snapshot: &Snapshot, now: DateTime<Utc>) -> Result<Screening> {
        let age = snapshot.age(now);
        let state = CacheState::of(Some(snapshot), now, self.staleness.threshold);

        if state == CacheState::Stale {
            if self.staleness.reject_stale {
                return Err(Error::StaleCache {
                    age_secs: age.num_seconds(),
                    threshold_secs: self.staleness.threshold.num_seconds(),
                });
            }
            warn!(
                age_secs = age.num_seconds(),
                threshold_secs = self.staleness.threshold.num_seconds(),
                "Screening a stale snapshot"
            );
        }

        let outcome = self.filter.apply(snapshot);
        let scored = self.engine.score(&outcome.eligible);
        let ranked = RankSelector::rank(scored.into_values());
        let top: Vec<Candidate> = ranked.iter().take(self.top_k).cloned().collect();

        info!(
            universe = snapshot.len(),
            dropped = outcome.dropped,
            eligible = outcome.eligible.len(),
            scored = ranked.len(),
            top = top.len(),
            state = %state,
            "Screening complete"
        );

        Ok(Screening {
            captured_at: snapshot.captured_at(),
            age,
            state,
            universe: snapshot.len(),
            dropped: outcome.dropped,
            eligible: outcome.eligible.len(),
            ranked,
            top,
        })
    }
}
