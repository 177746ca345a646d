//! Scored candidates and the final selection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ticker::TickerRecord;

/// A record that passed the universe filter, with its derived base symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct Eligible {
    /// Pair symbol with the quote suffix stripped, e.g. `ARB`.
    pub base: String,
    pub record: TickerRecord,
}

/// Individual sub-scores of a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubScores {
    pub momentum: f64,
    /// 24h range in percent of the low.
    pub volatility: f64,
    /// Fraction of the eligible set with volatility `<=` this one.
    pub volatility_rank: f64,
    pub volatility_bonus: f64,
    pub volume_score: f64,
    pub trade_score: f64,
    pub trend_score: f64,
}

impl SubScores {
    #[must_use]
    pub fn is_finite(&self) -> bool {
        [
            self.momentum,
            self.volatility,
            self.volatility_rank,
            self.volatility_bonus,
            self.volume_score,
            self.trade_score,
            self.trend_score,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

/// A ranked candidate handed to the decision-maker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Base asset symbol, e.g. `ARB`.
    pub symbol: String,
    /// Provider pair symbol, e.g. `ARBUSDT`.
    pub pair: String,
    pub last_price: f64,
    pub price_change_percent: f64,
    pub volume: f64,
    pub quote_volume: f64,
    pub trade_count: u64,
    pub scores: SubScores,
    pub composite: f64,
}

impl Candidate {
    #[must_use]
    pub fn new(base: String, record: &TickerRecord, scores: SubScores, composite: f64) -> Self {
        Self {
            symbol: base,
            pair: record.symbol.clone(),
            last_price: record.last_price,
            price_change_percent: record.price_change_percent,
            volume: record.volume,
            quote_volume: record.quote_volume,
            trade_count: record.trade_count,
            scores,
            composite,
        }
    }
}

/// Outcome of one full selection run.
///
/// Exists only for the duration of a pipeline invocation; callers pass it on
/// rather than reading shared state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection {
    /// Capture time of the snapshot the selection was computed from.
    pub captured_at: DateTime<Utc>,
    /// Ranked top-K candidates.
    pub top: Vec<Candidate>,
    /// Symbols chosen by the decision-maker, in the order it returned them.
    pub picks: Vec<String>,
    /// Name of the decision-maker that produced the picks.
    pub decided_by: String,
}
