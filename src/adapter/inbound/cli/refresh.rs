//! Handler for the `refresh` command.

use crate::adapter::inbound::cli::{operator, output};
use crate::error::Result;

/// Fetch one snapshot and replace the cached one.
///
/// Fails, leaving the previous snapshot in place, when the fetch or the write
/// fails.
pub async fn execute(config_toml: &str) -> Result<()> {
    let pb = output::spinner("Fetching 24h tickers");

    match operator::operator().refresh_once(config_toml).await {
        Ok(report) => {
            output::spinner_success(
                &pb,
                &format!(
                    "Wrote {} tickers to {}",
                    report.tickers, report.cache_location
                ),
            );
            Ok(())
        }
        Err(e) => {
            output::spinner_fail(&pb, "Refresh failed, previous snapshot kept");
            Err(e)
        }
    }
}
