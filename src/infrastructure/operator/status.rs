//! Status operator implementation.

use chrono::Utc;

use crate::domain::snapshot::{CacheState, Snapshot};
use crate::error::{Error, Result};
use crate::infrastructure::factory::market::build_cache;
use crate::port::inbound::operator::status::{StatusOperator, StatusSnapshot};

use super::entry::Operator;

impl StatusOperator for Operator {
    fn load_status(&self, config_toml: &str) -> Result<StatusSnapshot> {
        let config = Self::parse_config(config_toml)?;
        let cache = build_cache(&config);
        let snapshot = match cache.read() {
            Ok(snapshot) => Some(snapshot),
            Err(Error::CacheUnavailable { .. }) => None,
            Err(e) => return Err(e),
        };

        let now = Utc::now();
        let threshold = config.staleness_policy().threshold;
        Ok(StatusSnapshot {
            cache: cache.location(),
            state: CacheState::of(snapshot.as_ref(), now, threshold),
            captured_at: snapshot.as_ref().map(Snapshot::captured_at),
            age_secs: snapshot.as_ref().map(|s| s.age(now).num_seconds()),
            tickers: snapshot.as_ref().map(Snapshot::len),
            threshold_secs: threshold.num_seconds(),
        })
    }
}
