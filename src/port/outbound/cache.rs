//! Snapshot storage port.

use chrono::{DateTime, Duration, Utc};

use crate::domain::snapshot::{CacheState, Snapshot};
use crate::error::{Error, Result};

/// Storage for the single latest snapshot.
///
/// # Consistency
///
/// A reader always observes either the fully previous snapshot or the fully
/// new one, never a mix. Implementations achieve this without making readers
/// wait on writers (atomic file replace, or an `Arc` swap in memory).
///
/// Only the refresh scheduler writes; any number of readers may read
/// concurrently, possibly from other processes.
pub trait SnapshotCache: Send + Sync {
    /// Human-readable location for logs and errors.
    fn location(&self) -> String;

    /// Replace the stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be persisted; the previous
    /// snapshot remains readable in that case.
    fn write(&self, snapshot: &Snapshot) -> Result<()>;

    /// Read the most recently completed write.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CacheUnavailable`] if nothing was ever written.
    fn read(&self) -> Result<Snapshot>;

    /// Time since the stored snapshot was captured.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CacheUnavailable`] if the cache is empty.
    fn age(&self, now: DateTime<Utc>) -> Result<Duration> {
        Ok(self.read()?.age(now))
    }

    /// Derived freshness of the stored snapshot.
    ///
    /// An empty cache is reported as [`CacheState::Empty`], not as an error.
    ///
    /// # Errors
    ///
    /// Returns an error only if the stored snapshot exists but cannot be read.
    fn state(&self, now: DateTime<Utc>, threshold: Duration) -> Result<CacheState> {
        match self.read() {
            Ok(snapshot) => Ok(CacheState::of(Some(&snapshot), now, threshold)),
            Err(Error::CacheUnavailable { .. }) => Ok(CacheState::Empty),
            Err(err) => Err(err),
        }
    }
}
