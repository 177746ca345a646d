//! In-process snapshot cache for tests.

use std::sync::Arc;

use crate::adapter::outbound::cache::memory::MemorySnapshotCache;

/// Empty in-memory cache, shareable between a scheduler and readers.
pub fn memory_cache() -> Arc<MemorySnapshotCache> {
    Arc::new(MemorySnapshotCache::new())
}
