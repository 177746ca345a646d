//! Market data port.

use async_trait::async_trait;

use crate::domain::ticker::TickerEntry;
use crate::error::FetchError;

/// Retrieves the full ticker universe for the configured market.
///
/// A fetch either yields every element the provider reported or fails as a
/// whole. A single malformed element does not fail the fetch; record-level
/// validation happens later, on the read path.
#[async_trait]
pub trait SnapshotFetcher: Send + Sync {
    /// Provider name for logging.
    fn name(&self) -> &'static str;

    /// Fetch the current 24h ticker universe.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Transport`] for network failures,
    /// [`FetchError::Status`] for non-success responses and
    /// [`FetchError::Malformed`] when the body is not a ticker array.
    async fn fetch(&self) -> Result<Vec<TickerEntry>, FetchError>;
}
