//! Infrastructure layer.
//!
//! Provides technical concerns that support the application without containing
//! business logic.
//!
//! # Submodules
//!
//! - [`config`] - Configuration loading and validation
//! - [`factory`] - Component factory functions
//! - [`operator`] - Operator use-cases behind the CLI
//! - [`runtime`] - Refresh loop lifecycle

pub mod config;
pub mod factory;
pub mod operator;
pub mod runtime;
