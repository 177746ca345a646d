//! Scripted [`SnapshotFetcher`] for scheduler tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::ticker::{RawTicker, TickerEntry};
use crate::error::FetchError;
use crate::port::outbound::fetcher::SnapshotFetcher;

struct Step {
    delay: Duration,
    result: Result<Vec<TickerEntry>, FetchError>,
}

/// Replays queued fetch results in order.
///
/// Once the queue is exhausted every fetch fails with HTTP 503. A step queued
/// with a delay sleeps on the tokio clock before answering, so paused-time
/// tests can hold a fetch in flight across interval boundaries.
#[derive(Default)]
pub struct ScriptedFetcher {
    steps: Mutex<VecDeque<Step>>,
    calls: AtomicU32,
    completed: AtomicU32,
    in_flight: AtomicU32,
    max_in_flight: AtomicU32,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_ok(&self, tickers: Vec<RawTicker>) {
        self.push_slow_ok(Duration::ZERO, tickers);
    }

    /// Queue a successful fetch that takes `delay` to answer.
    pub fn push_slow_ok(&self, delay: Duration, tickers: Vec<RawTicker>) {
        self.push(
            delay,
            Ok(tickers.into_iter().map(TickerEntry::from).collect()),
        );
    }

    /// Queue a successful fetch of arbitrary elements, malformed ones included.
    pub fn push_entries(&self, entries: Vec<TickerEntry>) {
        self.push(Duration::ZERO, Ok(entries));
    }

    pub fn push_err(&self, err: FetchError) {
        self.push(Duration::ZERO, Err(err));
    }

    fn push(&self, delay: Duration, result: Result<Vec<TickerEntry>, FetchError>) {
        self.steps.lock().push_back(Step { delay, result });
    }

    /// Number of fetches started so far.
    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    /// Number of fetches that have returned.
    pub fn completed(&self) -> u32 {
        self.completed.load(Ordering::SeqCst)
    }

    /// Highest number of fetches ever in flight at once.
    pub fn max_in_flight(&self) -> u32 {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SnapshotFetcher for ScriptedFetcher {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn fetch(&self) -> Result<Vec<TickerEntry>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(running, Ordering::SeqCst);

        let step = self.steps.lock().pop_front();
        let result = match step {
            Some(Step { delay, result }) => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                result
            }
            None => Err(FetchError::Status { status: 503 }),
        };

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.completed.fetch_add(1, Ordering::SeqCst);
        result
    }
}
