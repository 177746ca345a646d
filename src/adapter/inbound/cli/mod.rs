//! CLI module graph.

pub mod command;
pub mod config;
pub mod dispatch;
pub mod operator;
pub mod output;
pub mod rank;
pub mod refresh;
pub mod run;
pub mod select;
pub mod status;
