//! Inbound operator accessor for CLI handlers.

use std::io::ErrorKind;
use std::path::Path;
use std::sync::OnceLock;

use tracing::debug;

use crate::adapter::inbound::cli::command::DEFAULT_CONFIG_PATH;
use crate::error::Result;
use crate::port::inbound::operator::port::OperatorPort;

static OPERATOR: OnceLock<Box<dyn OperatorPort>> = OnceLock::new();

/// Installs the operator implementation used by CLI handlers.
pub fn install(operator: Box<dyn OperatorPort>) -> std::result::Result<(), Box<dyn OperatorPort>> {
    OPERATOR.set(operator)
}

/// Returns the configured operator capability surface for CLI handlers.
#[must_use]
pub fn operator() -> &'static dyn OperatorPort {
    OPERATOR
        .get()
        .expect("CLI operator not installed; call cli::operator::install from main")
        .as_ref()
}

/// Load config TOML from disk for operator-facing use-cases.
///
/// A missing file at the default location reads as empty, which the operator
/// turns into the built-in defaults; an explicitly named file must exist.
pub fn read_config_toml(path: &Path) -> Result<String> {
    match std::fs::read_to_string(path) {
        Err(e) if e.kind() == ErrorKind::NotFound && path == Path::new(DEFAULT_CONFIG_PATH) => {
            debug!(path = %path.display(), "No config file, using defaults");
            Ok(String::new())
        }
        other => Ok(other?),
    }
}
