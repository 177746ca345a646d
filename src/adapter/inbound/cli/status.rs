//! Handler for the `status` command.

use serde_json::json;

use crate::adapter::inbound::cli::{operator, output};
use crate::domain::snapshot::CacheState;
use crate::error::Result;
use crate::port::inbound::operator::status::StatusSnapshot;

/// Execute the status command.
///
/// An empty cache is reported, not treated as a failure.
pub fn execute(config_toml: &str) -> Result<()> {
    let status = operator::operator().load_status(config_toml)?;

    if output::is_json() {
        let mut value = json!(status);
        value["command"] = json!("status");
        output::json_output(value);
        return Ok(());
    }
    if output::is_quiet() {
        return Ok(());
    }

    print_status(&status);
    Ok(())
}

fn print_status(status: &StatusSnapshot) {
    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Cache", &status.cache);
    let state_display = match status.state {
        CacheState::Fresh => output::positive(status.state),
        CacheState::Stale => output::negative(status.state),
        CacheState::Empty => output::muted(status.state),
    };
    output::field("State", state_display);

    let (Some(captured_at), Some(age_secs), Some(tickers)) =
        (status.captured_at, status.age_secs, status.tickers)
    else {
        println!();
        output::warning("No snapshot has been written yet");
        output::hint(&format!(
            "run {} or {}",
            output::highlight("tickerscope refresh"),
            output::highlight("tickerscope run")
        ));
        return;
    };

    output::field("Captured", captured_at.format("%Y-%m-%d %H:%M:%S UTC"));
    output::field(
        "Age",
        format!("{age_secs}s (stale after {}s)", status.threshold_secs),
    );
    output::field("Tickers", tickers);
    if status.state == CacheState::Stale {
        println!();
        output::warning("Snapshot is stale; is `tickerscope run` still running?");
    }
}
