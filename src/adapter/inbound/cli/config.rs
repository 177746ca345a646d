//! Handler for the `config` command group.

use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::{operator, output};
use crate::error::{Error, Result};
use crate::port::inbound::operator::config::ConfigView;

/// Execute `config show`: print the effective configuration.
pub fn execute_show(config_toml: &str) -> Result<()> {
    let view = operator::operator().show_config(config_toml)?;

    if output::is_json() {
        output::json_output(json!({ "command": "config.show", "config": view }));
        return Ok(());
    }

    print_summary(&view);
    output::section("Effective configuration");
    output::lines(&view.effective_toml);
    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: &Path, config_toml: &str) -> Result<()> {
    let service = operator::operator();
    let report = match service.validate_config(config_toml) {
        Ok(report) => report,
        Err(e @ Error::Config(_)) => {
            if output::is_json() {
                output::json_output(json!({
                    "command": "config.validate",
                    "path": path.display().to_string(),
                    "valid": false,
                    "error": e.to_string(),
                }));
            }
            return Err(e);
        }
        Err(e) => return Err(e),
    };

    if output::is_json() {
        output::json_output(json!({
            "command": "config.validate",
            "path": path.display().to_string(),
            "valid": true,
            "warnings": report.warnings,
        }));
        return Ok(());
    }

    output::success(&format!("{} is valid", path.display()));
    print_summary(&service.show_config(config_toml)?);
    for warning in &report.warnings {
        output::warning(warning);
    }
    Ok(())
}

fn print_summary(view: &ConfigView) {
    output::field("Profile", view.screen.profile);
    output::field("Top K", view.screen.top_k);
    output::field("Picks", view.screen.picks);
    output::field("Cache", &view.cache.location);
    output::field("LLM", format!("{} ({})", view.llm_provider, view.llm_model));
}
