//! Operator entry point.

use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Concrete implementation of every operator capability.
///
/// Stateless: each use-case parses the configuration it is handed and builds
/// the components it needs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Operator;

impl Operator {
    /// Parse and validate raw TOML. Empty content yields the defaults.
    pub(crate) fn parse_config(config_toml: &str) -> Result<Config> {
        Config::parse_toml(config_toml)
    }
}
