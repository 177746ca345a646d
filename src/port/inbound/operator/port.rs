//! Unified operator capability surface for inbound adapters.

use super::config::ConfigurationOperator;
use super::runtime::RuntimeOperator;
use super::screen::ScreenOperator;
use super::status::StatusOperator;

/// Unified operator capability surface consumed by inbound adapters.
pub trait OperatorPort:
    ConfigurationOperator + RuntimeOperator + ScreenOperator + StatusOperator
{
}

impl<T> OperatorPort for T where
    T: ConfigurationOperator + RuntimeOperator + ScreenOperator + StatusOperator
{
}
