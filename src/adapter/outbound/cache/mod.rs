//! Snapshot cache adapters.
//!
//! - [`FileSnapshotCache`](file::FileSnapshotCache) - JSON file shared across processes, replaced atomically
//! - [`MemorySnapshotCache`](memory::MemorySnapshotCache) - in-process cache for a scheduler and readers in one runtime

pub mod file;
pub mod memory;
