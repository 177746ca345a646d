//! Canonical test configurations.
//!
//! Single source of truth for configs used across tests, so each test does
//! not build its own slightly-different defaults.

use std::path::{Path, PathBuf};

use crate::infrastructure::config::settings::Config;

/// Default config with the snapshot cache at `cache_path`.
pub fn with_cache(cache_path: &Path) -> Config {
    let mut config = Config::default();
    config.cache.path = cache_path.to_path_buf();
    config
}

/// TOML pointing the cache at `cache_path`, followed by `extra` sections.
pub fn toml_with_cache(cache_path: &Path, extra: &str) -> String {
    format!(
        "[cache]\npath = {:?}\n\n{extra}",
        cache_path.display().to_string()
    )
}

/// Write `content` to `config.toml` inside `dir` and return its path.
pub fn write(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("config.toml");
    std::fs::write(&path, content).expect("test config should be writable");
    path
}
