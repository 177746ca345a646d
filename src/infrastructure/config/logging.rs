//! Logging configuration and initialization.

use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, EnvFilter};

/// Logging configuration (`[logging]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,
    /// `pretty` or `json`.
    #[serde(default = "default_format")]
    pub format: String,
}

impl LoggingConfig {
    /// Apply CLI flags: each `-v` raises the level one step, `--json`
    /// switches to JSON logs.
    #[must_use]
    pub fn with_overrides(mut self, verbose: u8, json: bool) -> Self {
        if verbose > 0 {
            self.level = match verbose {
                1 => "debug",
                _ => "trace",
            }
            .to_string();
        }
        if json {
            self.format = "json".to_string();
        }
        self
    }

    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// Logs go to stderr so command output on stdout stays machine-readable.
    /// `RUST_LOG` takes precedence over the configured level.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        let result = match self.format.as_str() {
            "json" => fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
            _ => fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
        };

        if let Err(err) = result {
            eprintln!("logging already initialized: {err}");
        }
    }
}

fn default_level() -> String {
    "info".into()
}

fn default_format() -> String {
    "pretty".into()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}
