use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Failures of a single snapshot fetch from the market data provider.
///
/// The refresh scheduler recovers from all of these locally by skipping the
/// tick; they only reach a caller through a one-shot `refresh`.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("provider returned HTTP {status}")]
    Status { status: u16 },

    #[error("malformed ticker payload: {0}")]
    Malformed(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("no snapshot available at {path}")]
    CacheUnavailable { path: String },

    #[error("snapshot is stale: {age_secs}s old, threshold {threshold_secs}s")]
    StaleCache { age_secs: i64, threshold_secs: i64 },

    #[error("decision-maker protocol violation: {0}")]
    DecisionProtocol(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, Error>;
