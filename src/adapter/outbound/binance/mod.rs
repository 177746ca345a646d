//! Binance spot market data adapter.
//!
//! Fetches the full 24h rolling ticker universe from the public REST API.

pub mod client;
pub mod settings;
