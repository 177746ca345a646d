//! Validation errors for provider ticker records.
//!
//! A record that fails validation is dropped on its own; these errors never
//! abort a screening run.
//!
//! # Examples
//!
//! ```
//! use tickerscope::domain::error::RecordError;
//! use tickerscope::domain::ticker::{RawTicker, TickerRecord};
//!
//! let raw = RawTicker {
//!     symbol: Some("AAAUSDT".into()),
//!     ..Default::default()
//! };
//!
//! let result = TickerRecord::try_from(&raw);
//! assert!(matches!(result, Err(RecordError::MissingField { field: "lastPrice" })));
//! ```

use thiserror::Error;

/// Reasons a raw ticker record cannot be turned into a [`TickerRecord`].
///
/// [`TickerRecord`]: super::ticker::TickerRecord
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    /// A required field is absent (or the symbol is blank).
    #[error("missing field {field}")]
    MissingField {
        /// Provider name of the field.
        field: &'static str,
    },

    /// A numeric field could not be parsed into a finite number.
    #[error("unparsable value {value:?} for {field}")]
    Unparsable {
        /// Provider name of the field.
        field: &'static str,
        /// The raw value as received.
        value: String,
    },

    /// A field that must be non-negative was negative.
    #[error("{field} must be non-negative, got {value}")]
    Negative {
        /// Provider name of the field.
        field: &'static str,
        /// The offending value.
        value: f64,
    },

    /// The element is not a ticker object, or a field has the wrong JSON type.
    #[error("malformed ticker entry: {reason}")]
    Malformed {
        /// Decoder message.
        reason: String,
    },

    /// The 24h high is below the 24h low.
    #[error("highPrice {high} is below lowPrice {low}")]
    InvertedRange {
        /// Reported 24h high.
        high: f64,
        /// Reported 24h low.
        low: f64,
    },
}
