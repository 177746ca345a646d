//! Implementations of ports (hexagonal adapters).
//!
//! - [`inbound`] - Driving side: the command-line interface
//! - [`outbound`] - Driven side: market data, snapshot cache, LLM providers

pub mod inbound;
pub mod outbound;
