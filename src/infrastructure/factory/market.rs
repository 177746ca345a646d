//! Market data and snapshot cache factory.

use std::sync::Arc;

use crate::adapter::outbound::binance::client::BinanceClient;
use crate::adapter::outbound::cache::file::FileSnapshotCache;
use crate::application::refresh::CacheScheduler;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::cache::SnapshotCache;
use crate::port::outbound::fetcher::SnapshotFetcher;

pub fn build_fetcher(config: &Config) -> Arc<dyn SnapshotFetcher> {
    Arc::new(BinanceClient::from_config(&config.market))
}

pub fn build_cache(config: &Config) -> Arc<dyn SnapshotCache> {
    Arc::new(FileSnapshotCache::new(&config.cache.path))
}

/// Build the refresh scheduler on the configured interval.
pub fn build_scheduler(config: &Config) -> CacheScheduler {
    CacheScheduler::new(
        build_fetcher(config),
        build_cache(config),
        config.cache.refresh_interval(),
    )
}
