//! Provider ticker records.
//!
//! [`RawTicker`] mirrors the provider's 24h rolling statistics object as it is
//! persisted in the snapshot cache. Numeric fields arrive either as JSON
//! numbers or as decimal strings, so they are kept as [`RawNumber`] until
//! [`TickerRecord::try_from`] validates the whole record.
//!
//! A captured array is a list of [`TickerEntry`] values: an element that does
//! not even decode as a [`RawTicker`] is kept verbatim and rejected later, on
//! its own, by the same validation step.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::RecordError;

/// A numeric provider field that may be encoded as a number or a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    /// A JSON number.
    Number(serde_json::Number),
    /// A decimal string such as `"0.00012300"`.
    Text(String),
}

impl RawNumber {
    /// Parse into a float. Returns `None` for unparsable text.
    #[must_use]
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.as_f64(),
            Self::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }

    /// Parse into a non-negative integer. Integral floats are accepted.
    #[must_use]
    pub fn to_u64(&self) -> Option<u64> {
        match self {
            Self::Number(n) => n.as_u64().or_else(|| {
                n.as_f64()
                    .filter(|v| v.is_finite() && *v >= 0.0 && v.fract() == 0.0)
                    .map(|v| v as u64)
            }),
            Self::Text(s) => s.trim().parse::<u64>().ok(),
        }
    }
}

impl fmt::Display for RawNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for RawNumber {
    fn from(value: f64) -> Self {
        serde_json::Number::from_f64(value)
            .map(Self::Number)
            .unwrap_or_else(|| Self::Text(value.to_string()))
    }
}

impl From<u64> for RawNumber {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for RawNumber {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// One instrument's 24h rolling statistics as reported by the provider.
///
/// Every field is optional on the wire; unknown provider fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTicker {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_price: Option<RawNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_change: Option<RawNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_change_percent: Option<RawNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high_price: Option<RawNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low_price: Option<RawNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<RawNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_volume: Option<RawNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<RawNumber>,
}

/// One element of a captured ticker array.
///
/// Decoding never fails on a single bad element: anything that does not fit
/// [`RawTicker`] (a non-object, or a field of the wrong JSON type) is kept as
/// [`TickerEntry::Malformed`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TickerEntry {
    Ticker(RawTicker),
    Malformed(serde_json::Value),
}

impl TickerEntry {
    /// Symbol for logs, when the element carries a string one.
    #[must_use]
    pub fn symbol(&self) -> Option<&str> {
        match self {
            Self::Ticker(raw) => raw.symbol.as_deref(),
            Self::Malformed(value) => value.get("symbol").and_then(serde_json::Value::as_str),
        }
    }
}

impl From<RawTicker> for TickerEntry {
    fn from(raw: RawTicker) -> Self {
        Self::Ticker(raw)
    }
}

/// A validated ticker record.
#[derive(Debug, Clone, PartialEq)]
pub struct TickerRecord {
    /// Provider pair identifier, e.g. `ARBUSDT`.
    pub symbol: String,
    pub last_price: f64,
    /// Absolute 24h price change.
    pub price_change: f64,
    /// Signed 24h change in percent.
    pub price_change_percent: f64,
    pub high_price: f64,
    pub low_price: f64,
    /// 24h volume in base-asset units.
    pub volume: f64,
    pub quote_volume: f64,
    /// Number of trades in the 24h window.
    pub trade_count: u64,
}

impl TickerRecord {
    /// The pair symbol with the quote-asset suffix stripped.
    ///
    /// Returns `None` when the pair is not quoted in `quote` or when nothing
    /// would remain after stripping.
    #[must_use]
    pub fn base_symbol(&self, quote: &str) -> Option<&str> {
        self.symbol
            .strip_suffix(quote)
            .filter(|base| !base.is_empty())
    }
}

fn required<'a>(
    value: &'a Option<RawNumber>,
    field: &'static str,
) -> Result<&'a RawNumber, RecordError> {
    value.as_ref().ok_or(RecordError::MissingField { field })
}

fn finite(value: &Option<RawNumber>, field: &'static str) -> Result<f64, RecordError> {
    let raw = required(value, field)?;
    raw.to_f64()
        .filter(|v| v.is_finite())
        .ok_or_else(|| RecordError::Unparsable {
            field,
            value: raw.to_string(),
        })
}

fn non_negative(value: &Option<RawNumber>, field: &'static str) -> Result<f64, RecordError> {
    let parsed = finite(value, field)?;
    if parsed < 0.0 {
        return Err(RecordError::Negative {
            field,
            value: parsed,
        });
    }
    Ok(parsed)
}

impl TryFrom<&RawTicker> for TickerRecord {
    type Error = RecordError;

    fn try_from(raw: &RawTicker) -> Result<Self, Self::Error> {
        let symbol = raw
            .symbol
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(RecordError::MissingField { field: "symbol" })?;

        let last_price = non_negative(&raw.last_price, "lastPrice")?;
        let price_change = finite(&raw.price_change, "priceChange")?;
        let price_change_percent = finite(&raw.price_change_percent, "priceChangePercent")?;
        let high_price = non_negative(&raw.high_price, "highPrice")?;
        let low_price = non_negative(&raw.low_price, "lowPrice")?;
        let volume = non_negative(&raw.volume, "volume")?;
        let quote_volume = non_negative(&raw.quote_volume, "quoteVolume")?;

        let count = required(&raw.count, "count")?;
        let trade_count = count.to_u64().ok_or_else(|| RecordError::Unparsable {
            field: "count",
            value: count.to_string(),
        })?;

        if high_price < low_price {
            return Err(RecordError::InvertedRange {
                high: high_price,
                low: low_price,
            });
        }

        Ok(Self {
            symbol: symbol.to_string(),
            last_price,
            price_change,
            price_change_percent,
            high_price,
            low_price,
            volume,
            quote_volume,
            trade_count,
        })
    }
}

impl TryFrom<&TickerEntry> for TickerRecord {
    type Error = RecordError;

    fn try_from(entry: &TickerEntry) -> Result<Self, Self::Error> {
        match entry {
            TickerEntry::Ticker(raw) => Self::try_from(raw),
            TickerEntry::Malformed(value) => {
                match serde_json::from_value::<RawTicker>(value.clone()) {
                    Ok(raw) => Self::try_from(&raw),
                    Err(err) => Err(RecordError::Malformed {
                        reason: err.to_string(),
                    }),
                }
            }
        }
    }
}
