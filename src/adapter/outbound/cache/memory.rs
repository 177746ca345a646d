//! In-process snapshot cache.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::domain::snapshot::Snapshot;
use crate::error::{Error, Result};
use crate::port::outbound::cache::SnapshotCache;

/// Snapshot cache held in memory behind a read-write lock.
///
/// Writes swap an `Arc`, so the lock is held only for a pointer exchange and
/// readers always clone out a complete snapshot.
#[derive(Debug, Default)]
pub struct MemorySnapshotCache {
    current: RwLock<Option<Arc<Snapshot>>>,
}

impl MemorySnapshotCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to the current snapshot without cloning the tickers.
    #[must_use]
    pub fn current(&self) -> Option<Arc<Snapshot>> {
        self.current.read().clone()
    }
}

impl SnapshotCache for MemorySnapshotCache {
    fn location(&self) -> String {
        "memory".to_string()
    }

    fn write(&self, snapshot: &Snapshot) -> Result<()> {
        let next = Arc::new(snapshot.clone());
        *self.current.write() = Some(next);
        Ok(())
    }

    fn read(&self) -> Result<Snapshot> {
        self.current()
            .map(|s| (*s).clone())
            .ok_or_else(|| Error::CacheUnavailable {
                path: self.location(),
            })
    }
}
