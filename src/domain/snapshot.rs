//! The captured ticker universe and its freshness lifecycle.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::ticker::TickerEntry;

/// An immutable capture of the ticker universe at one point in time.
///
/// Snapshots are never merged: each successful refresh replaces the previous
/// one wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    captured_at: DateTime<Utc>,
    tickers: Vec<TickerEntry>,
}

impl Snapshot {
    /// Capture a ticker universe at the given instant.
    #[must_use]
    pub fn capture(tickers: Vec<TickerEntry>, captured_at: DateTime<Utc>) -> Self {
        Self {
            captured_at,
            tickers,
        }
    }

    #[must_use]
    pub const fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }

    #[must_use]
    pub fn tickers(&self) -> &[TickerEntry] {
        &self.tickers
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tickers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tickers.is_empty()
    }

    /// Time elapsed since capture. Clamped at zero if the clock went backwards.
    #[must_use]
    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        (now - self.captured_at).max(Duration::zero())
    }
}

/// Derived freshness of the cached snapshot.
///
/// Never stored: always computed from the capture time, the current time and
/// a caller-supplied threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheState {
    /// No snapshot has ever been written.
    Empty,
    /// Younger than the staleness threshold.
    Fresh,
    /// At or beyond the staleness threshold.
    Stale,
}

impl CacheState {
    /// Classify a (possibly absent) snapshot.
    #[must_use]
    pub fn of(snapshot: Option<&Snapshot>, now: DateTime<Utc>, threshold: Duration) -> Self {
        match snapshot {
            None => Self::Empty,
            Some(s) if s.age(now) < threshold => Self::Fresh,
            Some(_) => Self::Stale,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Fresh => "fresh",
            Self::Stale => "stale",
        }
    }
}

impl fmt::Display for CacheState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
