//! Refresh loop lifecycle.

use std::future::Future;

use tokio::signal;
use tracing::info;

use crate::application::refresh::CacheScheduler;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::factory::market::build_scheduler;

/// Run the refresh loop until Ctrl+C.
///
/// # Errors
///
/// Returns an error if the Ctrl+C handler cannot be installed. The scheduler
/// is stopped before returning in every case.
pub async fn run(config: &Config) -> Result<()> {
    let scheduler = build_scheduler(config);
    info!(
        cache = %config.cache.path.display(),
        interval_secs = scheduler.interval().as_secs(),
        "tickerscope starting"
    );

    let mut ctrl_c_error = None;
    run_until(scheduler, async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Shutdown signal received (Ctrl+C)"),
            Err(e) => ctrl_c_error = Some(e),
        }
    })
    .await;

    info!("tickerscope stopped");
    match ctrl_c_error {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}

/// Run `scheduler` in the background until `stop` resolves, then shut it
/// down and wait for the in-flight tick.
pub async fn run_until<F>(scheduler: CacheScheduler, stop: F)
where
    F: Future<Output = ()>,
{
    let handle = scheduler.start();
    stop.await;
    let failures = handle.consecutive_failures();
    if failures > 0 {
        info!(consecutive_failures = failures, "Stopping after failed ticks");
    }
    handle.shutdown().await;
}
