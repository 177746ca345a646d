//! Handler for the `run` command.

use crate::adapter::inbound::cli::command::RunArgs;
use crate::adapter::inbound::cli::{operator, output};
use crate::error::Result;
use crate::port::inbound::operator::runtime::{RunRequest, RunStartupSnapshot};

/// Execute the run command.
pub async fn execute(config_toml: String, args: &RunArgs) -> Result<()> {
    let request = RunRequest {
        config_toml,
        interval_secs: args.interval,
    };
    let service = operator::operator();

    let startup = service.prepare_run(&request)?;
    if !output::is_quiet() || output::is_json() {
        print_startup(&startup);
    }

    service.execute_run(request).await
}

fn print_startup(snapshot: &RunStartupSnapshot) {
    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Provider", &snapshot.provider_url);
    output::field("Quote", &snapshot.quote_asset);
    output::field("Cache", &snapshot.cache_location);
    output::field("Interval", format!("{}s", snapshot.interval_secs));
    if output::verbosity() > 0 {
        output::field("Stale after", format!("{}s", snapshot.stale_after_secs));
    }
    output::hint("press Ctrl+C to stop");
}
