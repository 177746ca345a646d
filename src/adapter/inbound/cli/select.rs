//! Handler for the `select` command.

use serde_json::json;

use crate::adapter::inbound::cli::rank::{candidate_table, print_summary, summary_json};
use crate::adapter::inbound::cli::{operator, output};
use crate::error::Result;
use crate::port::inbound::operator::screen::ScreenRequest;

/// Execute the select command.
pub async fn execute(request: &ScreenRequest) -> Result<()> {
    let pb = output::spinner("Waiting for the decision-maker");
    let view = match operator::operator().select(request).await {
        Ok(view) if view.selection.picks.is_empty() => {
            output::spinner_success(&pb, "Nothing to decide");
            view
        }
        Ok(view) => {
            output::spinner_success(&pb, &format!("{} answered", view.selection.decided_by));
            view
        }
        Err(e) => {
            output::spinner_fail(&pb, "Selection failed");
            return Err(e);
        }
    };

    if output::is_json() {
        output::emit_json_line("screening", summary_json(&view.screen));
        output::emit_json_line("selection", json!(view.selection));
        return Ok(());
    }

    print_summary(&view.screen);
    if view.selection.picks.is_empty() {
        println!();
        output::warning("No candidates passed the universe filter");
        return Ok(());
    }

    output::section("Top candidates");
    output::lines(&candidate_table(&view.selection.top));

    output::section("Picks");
    for symbol in &view.selection.picks {
        output::success(&output::highlight(symbol));
    }

    Ok(())
}
