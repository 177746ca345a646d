//! Periodic snapshot refresh.
//!
//! The scheduler is the only writer of the snapshot cache. Each tick fetches
//! the full ticker universe and replaces the cached snapshot; a failed tick
//! leaves the previous snapshot in place and the next tick is the retry.
//!
//! ```text
//! interval ──tick──> SnapshotFetcher::fetch ──ok──> Snapshot::capture ──> SnapshotCache::write
//!                             │
//!                             └──err──> warn, keep previous snapshot
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info, warn};

use crate::domain::snapshot::Snapshot;
use crate::error::{Error, Result};
use crate::port::outbound::cache::SnapshotCache;
use crate::port::outbound::fetcher::SnapshotFetcher;

/// Result of a single refresh cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// A new snapshot with this many tickers replaced the previous one.
    Written { tickers: usize },
    /// The provider call failed; the cache was not touched.
    FetchFailed,
    /// The snapshot could not be persisted; the previous one stays.
    WriteFailed,
}

impl TickOutcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Written { .. })
    }
}

/// Fixed-interval fetch-and-write loop.
pub struct CacheScheduler {
    fetcher: Arc<dyn SnapshotFetcher>,
    cache: Arc<dyn SnapshotCache>,
    interval: Duration,
    consecutive_failures: AtomicU64,
}

impl CacheScheduler {
    #[must_use]
    pub fn new(
        fetcher: Arc<dyn SnapshotFetcher>,
        cache: Arc<dyn SnapshotCache>,
        interval: Duration,
    ) -> Self {
        Self {
            fetcher,
            cache,
            interval,
            consecutive_failures: AtomicU64::new(0),
        }
    }

    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Failed ticks since the last successful one.
    #[must_use]
    pub fn consecutive_failures(&self) -> u64 {
        self.consecutive_failures.load(Ordering::Relaxed)
    }

    /// Fetch the universe and replace the cached snapshot.
    ///
    /// Leaves the failure counter alone; [`tick`](Self::tick) is the
    /// scheduled wrapper that tracks it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Fetch`] when the provider call fails, or the cache's
    /// write error. The previous snapshot stays in place in both cases.
    pub async fn refresh(&self) -> Result<usize> {
        let tickers = self.fetcher.fetch().await?;
        let snapshot = Snapshot::capture(tickers, Utc::now());
        self.cache.write(&snapshot)?;
        Ok(snapshot.len())
    }

    /// Run one fetch-and-write cycle.
    pub async fn tick(&self) -> TickOutcome {
        match self.refresh().await {
            Ok(tickers) => {
                self.consecutive_failures.store(0, Ordering::Relaxed);
                info!(
                    provider = self.fetcher.name(),
                    tickers,
                    cache = %self.cache.location(),
                    "Snapshot refreshed"
                );
                TickOutcome::Written { tickers }
            }
            Err(err @ Error::Fetch(_)) => {
                let failures = self.record_failure();
                warn!(
                    provider = self.fetcher.name(),
                    error = %err,
                    consecutive_failures = failures,
                    "Snapshot fetch failed, keeping previous snapshot"
                );
                TickOutcome::FetchFailed
            }
            Err(err) => {
                let failures = self.record_failure();
                error!(
                    cache = %self.cache.location(),
                    error = %err,
                    consecutive_failures = failures,
                    "Snapshot write failed, keeping previous snapshot"
                );
                TickOutcome::WriteFailed
            }
        }
    }

    fn record_failure(&self) -> u64 {
        self.consecutive_failures.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Tick on the interval until `shutdown` turns true or its sender is dropped.
    ///
    /// The first tick fires immediately. A tick runs to completion before the
    /// shutdown signal is looked at again, and ticks that fall due while one
    /// is in flight are skipped rather than queued.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        let mut interval = tokio::time::interval(self.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(
            interval_secs = self.interval.as_secs_f64(),
            provider = self.fetcher.name(),
            cache = %self.cache.location(),
            "Refresh scheduler started"
        );

        loop {
            if *shutdown.borrow() {
                info!("Shutdown signal received");
                break;
            }

            tokio::select! {
                result = shutdown.changed() => {
                    match result {
                        Ok(()) => {
                            if *shutdown.borrow() {
                                info!("Shutdown signal received");
                                break;
                            }
                        }
                        Err(_) => {
                            info!("Shutdown channel closed");
                            break;
                        }
                    }
                }
                _ = interval.tick() => {
                    let outcome = self.tick().await;
                    debug!(?outcome, "Refresh tick finished");
                }
            }
        }

        info!("Refresh scheduler stopped");
    }

    /// Spawn [`run`](Self::run) on the current runtime.
    #[must_use]
    pub fn start(self) -> SchedulerHandle {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let scheduler = Arc::new(self);
        let task = {
            let scheduler = Arc::clone(&scheduler);
            tokio::spawn(async move { scheduler.run(shutdown_rx).await })
        };

        SchedulerHandle {
            scheduler,
            shutdown_tx,
            task,
        }
    }
}

/// Handle for a scheduler running in the background.
pub struct SchedulerHandle {
    scheduler: Arc<CacheScheduler>,
    shutdown_tx: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl SchedulerHandle {
    #[must_use]
    pub fn consecutive_failures(&self) -> u64 {
        self.scheduler.consecutive_failures()
    }

    /// Signal the loop to stop and wait for it to finish.
    ///
    /// An in-flight tick completes first.
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(true);
        if let Err(err) = self.task.await {
            error!(error = %err, "Refresh scheduler task failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, FetchError, Result};
    use crate::testkit::cache::memory_cache;
    use crate::testkit::domain::raw_ticker;
    use crate::testkit::fetcher::ScriptedFetcher;

    fn scheduler(
        fetcher: Arc<ScriptedFetcher>,
        cache: Arc<dyn SnapshotCache>,
    ) -> CacheScheduler {
        CacheScheduler::new(fetcher, cache, Duration::from_secs(180))
    }

    struct BrokenCache;

    impl SnapshotCache for BrokenCache {
        fn location(&self) -> String {
            "broken".into()
        }

        fn write(&self, _: &Snapshot) -> Result<()> {
            Err(Error::Io(std::io::Error::other("disk full")))
        }

        fn read(&self) -> Result<Snapshot> {
            Err(Error::CacheUnavailable {
                path: self.location(),
            })
        }
    }

    #[tokio::test]
    async fn successful_tick_writes_snapshot() {
        let fetcher = Arc::new(ScriptedFetcher::new());
        fetcher.push_ok(vec![raw_ticker("AAAUSDT"), raw_ticker("BBBUSDT")]);
        let cache = memory_cache();

        let before = Utc::now();
        let outcome = scheduler(fetcher, cache.clone()).tick().await;

        assert_eq!(outcome, TickOutcome::Written { tickers: 2 });
        let snapshot = cache.read().unwrap();
        assert_eq!(snapshot.len(), 2);
        assert!(snapshot.captured_at() >= before);
    }

    #[tokio::test]
    async fn failed_fetch_keeps_previous_snapshot() {
        let fetcher = Arc::new(ScriptedFetcher::new());
        fetcher.push_ok(vec![raw_ticker("AAAUSDT")]);
        fetcher.push_err(FetchError::Status { status: 503 });
        fetcher.push_err(FetchError::Malformed("truncated".into()));
        let cache = memory_cache();
        let scheduler = scheduler(fetcher, cache.clone());

        assert!(scheduler.tick().await.is_success());
        let first = cache.read().unwrap();

        assert_eq!(scheduler.tick().await, TickOutcome::FetchFailed);
        assert_eq!(scheduler.tick().await, TickOutcome::FetchFailed);
        assert_eq!(scheduler.consecutive_failures(), 2);
        assert_eq!(cache.read().unwrap(), first);
    }

    #[tokio::test]
    async fn success_resets_failure_count() {
        let fetcher = Arc::new(ScriptedFetcher::new());
        fetcher.push_err(FetchError::Status { status: 429 });
        fetcher.push_ok(vec![]);
        let scheduler = scheduler(fetcher, memory_cache());

        scheduler.tick().await;
        assert_eq!(scheduler.consecutive_failures(), 1);
        scheduler.tick().await;
        assert_eq!(scheduler.consecutive_failures(), 0);
    }

    #[tokio::test]
    async fn write_failure_is_reported() {
        let fetcher = Arc::new(ScriptedFetcher::new());
        fetcher.push_ok(vec![raw_ticker("AAAUSDT")]);

        let outcome = scheduler(fetcher, Arc::new(BrokenCache)).tick().await;

        assert_eq!(outcome, TickOutcome::WriteFailed);
    }

    #[tokio::test]
    async fn one_shot_refresh_surfaces_the_error() {
        let fetcher = Arc::new(ScriptedFetcher::new());
        fetcher.push_err(FetchError::Status { status: 418 });
        let scheduler = scheduler(fetcher, memory_cache());

        let err = scheduler.refresh().await.unwrap_err();
        assert!(matches!(
            err,
            Error::Fetch(FetchError::Status { status: 418 })
        ));
        assert_eq!(scheduler.consecutive_failures(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn first_tick_is_immediate_and_loop_stops_on_signal() {
        let fetcher = Arc::new(ScriptedFetcher::new());
        fetcher.push_ok(vec![raw_ticker("AAAUSDT")]);
        let cache = memory_cache();

        let handle = scheduler(fetcher.clone(), cache.clone()).start();
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(fetcher.calls(), 1);
        assert!(cache.read().is_ok());

        tokio::time::sleep(Duration::from_secs(180)).await;
        assert_eq!(fetcher.calls(), 2);
        assert_eq!(handle.consecutive_failures(), 1);

        handle.shutdown().await;
        tokio::time::sleep(Duration::from_secs(600)).await;
        assert_eq!(fetcher.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn slow_fetch_never_overlaps_and_missed_ticks_are_skipped() {
        let fetcher = Arc::new(ScriptedFetcher::new());
        fetcher.push_slow_ok(Duration::from_secs(150), vec![raw_ticker("AAAUSDT")]);
        fetcher.push_ok(vec![raw_ticker("BBBUSDT")]);
        fetcher.push_ok(vec![raw_ticker("CCCUSDT")]);
        let scheduler = CacheScheduler::new(fetcher.clone(), memory_cache(), Duration::from_secs(60));
        let handle = scheduler.start();

        // Ticks due at 60s and 120s fall inside the first fetch. They collapse
        // into one catch-up tick when it returns at 150s; the next one is 180s.
        tokio::time::sleep(Duration::from_secs(170)).await;
        assert_eq!(fetcher.calls(), 2);
        assert_eq!(fetcher.max_in_flight(), 1);

        tokio::time::sleep(Duration::from_secs(20)).await;
        assert_eq!(fetcher.calls(), 3);
        assert_eq!(fetcher.max_in_flight(), 1);

        handle.shutdown().await;
    }
}
