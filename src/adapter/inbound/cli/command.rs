//! Command-line interface definitions.
//!
//! Defines the CLI structure for tickerscope using `clap`: a long-running
//! refresh loop, one-shot cache maintenance, and the screening commands that
//! read the shared snapshot.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::profile::Profile;

/// Config file looked up when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Market ticker snapshot cache and multi-factor screener
#[derive(Parser, Debug)]
#[command(name = "tickerscope")]
#[command(version)]
pub struct Cli {
    /// Configuration file
    #[arg(
        short,
        long,
        global = true,
        value_name = "PATH",
        default_value = DEFAULT_CONFIG_PATH
    )]
    pub config: PathBuf,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Keep the snapshot cache fresh until Ctrl+C
    Run(RunArgs),

    /// Fetch one snapshot and write it to the cache
    Refresh,

    /// Show cache freshness
    Status,

    /// Screen the cached snapshot and print ranked candidates
    Rank(RankArgs),

    /// Screen the cached snapshot and ask the decision-maker for picks
    Select(ScreenArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Arguments for `tickerscope run`.
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Seconds between refreshes, overriding the config file
    #[arg(long, value_name = "SECS")]
    pub interval: Option<u64>,
}

/// Screening overrides shared by `rank` and `select`.
#[derive(Args, Debug, Default)]
pub struct ScreenArgs {
    /// Screening profile (scalping or discovery), overriding the config file
    #[arg(long, value_name = "NAME")]
    pub profile: Option<Profile>,

    /// Number of candidates to keep after ranking
    #[arg(long, value_name = "K")]
    pub top: Option<usize>,
}

/// Arguments for `tickerscope rank`.
#[derive(Args, Debug, Default)]
pub struct RankArgs {
    #[command(flatten)]
    pub screen: ScreenArgs,

    /// Print every scored candidate instead of the top K
    #[arg(long)]
    pub all: bool,
}

/// Subcommands for `tickerscope config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the effective configuration with defaults applied
    Show,
    /// Validate the configuration file
    Validate,
}
