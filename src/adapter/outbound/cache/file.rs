//! File-backed snapshot cache.
//!
//! The canonical file is only ever replaced by `rename(2)` of a fully written
//! and synced staging file in the same directory, so readers in any process
//! see either the previous document or the new one.

use std::fs::{self, File};
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::snapshot::Snapshot;
use crate::domain::ticker::TickerEntry;
use crate::error::{Error, Result};
use crate::port::outbound::cache::SnapshotCache;

/// On-disk layouts accepted by [`FileSnapshotCache::read`].
#[derive(Deserialize)]
#[serde(untagged)]
enum Stored {
    /// `{"captured_at": ..., "tickers": [...]}` as written by this cache.
    Envelope(Snapshot),
    /// A plain dump of the provider response; capture time is the file mtime.
    Bare(Vec<TickerEntry>),
}

/// Snapshot cache persisted as a single JSON document.
#[derive(Debug, Clone)]
pub struct FileSnapshotCache {
    path: PathBuf,
}

impl FileSnapshotCache {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Unique staging path next to the canonical file.
    ///
    /// Same directory so the final rename never crosses a filesystem; unique
    /// so concurrent writers never share a staging file.
    fn staging_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "snapshot".to_string());
        self.path
            .with_file_name(format!(".{name}.{}.tmp", Uuid::new_v4().simple()))
    }

    /// Serialize and sync the snapshot to a staging file without publishing it.
    ///
    /// Nothing is visible to readers until [`PendingWrite::commit`]. Dropping
    /// the returned value without committing discards the staged file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or any filesystem operation fails.
    pub fn stage(&self, snapshot: &Snapshot) -> Result<PendingWrite> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_vec(snapshot)?;
        let pending = PendingWrite {
            staged: self.staging_path(),
            target: self.path.clone(),
            committed: false,
        };

        let mut file = File::create(&pending.staged)?;
        file.write_all(&json)?;
        file.sync_all()?;

        Ok(pending)
    }
}

/// A fully written snapshot waiting to be published.
#[derive(Debug)]
#[must_use = "a staged snapshot is discarded unless committed"]
pub struct PendingWrite {
    staged: PathBuf,
    target: PathBuf,
    committed: bool,
}

impl PendingWrite {
    /// Path of the staging file.
    #[must_use]
    pub fn staged_path(&self) -> &Path {
        &self.staged
    }

    /// Atomically replace the canonical file with the staged one.
    ///
    /// # Errors
    ///
    /// Returns an error if the rename fails; the staged file is removed and
    /// the previous snapshot stays in place.
    pub fn commit(mut self) -> Result<()> {
        fs::rename(&self.staged, &self.target)?;
        self.committed = true;
        Ok(())
    }
}

impl Drop for PendingWrite {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        if let Err(err) = fs::remove_file(&self.staged) {
            if err.kind() != ErrorKind::NotFound {
                warn!(path = %self.staged.display(), error = %err, "Failed to remove staged snapshot");
            }
        }
    }
}

impl SnapshotCache for FileSnapshotCache {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn write(&self, snapshot: &Snapshot) -> Result<()> {
        self.stage(snapshot)?.commit()?;
        debug!(path = %self.path.display(), tickers = snapshot.len(), "Snapshot committed");
        Ok(())
    }

    fn read(&self) -> Result<Snapshot> {
        let mut file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(Error::CacheUnavailable {
                    path: self.location(),
                });
            }
            Err(err) => return Err(err.into()),
        };

        // Metadata and contents come from the same open handle, so a
        // concurrent replace cannot mix them.
        let modified = file.metadata()?.modified()?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;

        match serde_json::from_slice::<Stored>(&bytes)? {
            Stored::Envelope(snapshot) => Ok(snapshot),
            Stored::Bare(tickers) => {
                Ok(Snapshot::capture(tickers, DateTime::<Utc>::from(modified)))
            }
        }
    }
}
