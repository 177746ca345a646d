//! Scoring parameters and sub-score functions.
//!
//! The composite score of a candidate is a weighted sum of normalized
//! sub-scores:
//!
//! - **Momentum**: absolute 24h move, see [`MomentumFormula`]
//! - **Volatility**: 24h range relative to the low, combined as
//!   `rank × bonus` (see [`VolatilityTerm`])
//! - **Volume / Trades**: liquidity proxies clamped by a [`Normalizer`]
//! - **Trend**: step function of the absolute percent move
//!
//! All functions here are pure; the cross-sectional volatility rank needs the
//! whole eligible set and lives in [`volatility_ranks`].
//!
//! # Examples
//!
//! ```
//! use tickerscope::domain::score::{volatility_bonus, Normalizer, ScoreWeights};
//!
//! assert_eq!(volatility_bonus(5.5), 3.0);
//! assert_eq!(Normalizer::new(5_000_000.0, 0.5, 3.0).apply(1_000_000.0), 0.5);
//! assert!(ScoreWeights::scalping().validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use super::ticker::TickerRecord;

/// Tolerance used when checking that weights sum to one.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// How the momentum sub-score is derived from a ticker.
///
/// The provider's reported percent change and the one recomputed from the
/// absolute change differ slightly because of upstream rounding, so the choice
/// is explicit configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MomentumFormula {
    /// `abs(priceChangePercent)`.
    #[default]
    PercentChange,
    /// `abs(priceChange / lastPrice * 100)`.
    PriceDelta,
}

impl MomentumFormula {
    /// Compute momentum for one record.
    ///
    /// `PriceDelta` yields a non-finite value for a zero last price; the
    /// engine drops such records.
    #[must_use]
    pub fn momentum(&self, record: &TickerRecord) -> f64 {
        match self {
            Self::PercentChange => record.price_change_percent.abs(),
            Self::PriceDelta => (record.price_change / record.last_price * 100.0).abs(),
        }
    }
}

/// What the volatility weight multiplies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolatilityTerm {
    /// Percentile rank within the eligible set times the step bonus.
    #[default]
    RankBonus,
    /// The raw volatility percentage.
    Raw,
}

/// Linear scaling followed by clamping: `clamp(value / divisor, min, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Normalizer {
    pub divisor: f64,
    pub min: f64,
    pub max: f64,
}

impl Normalizer {
    #[must_use]
    pub const fn new(divisor: f64, min: f64, max: f64) -> Self {
        Self { divisor, min, max }
    }

    /// Scale and clamp. Never panics, even on inverted bounds.
    #[must_use]
    pub fn apply(&self, value: f64) -> f64 {
        (value / self.divisor).max(self.min).min(self.max)
    }

    /// Check the divisor and bounds.
    ///
    /// # Errors
    ///
    /// Returns a human-readable reason when the normalizer is unusable.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.divisor.is_finite() && self.divisor > 0.0) {
            return Err(format!("divisor must be positive, got {}", self.divisor));
        }
        if !(self.min.is_finite() && self.max.is_finite()) {
            return Err("bounds must be finite".to_string());
        }
        if self.min > self.max {
            return Err(format!("min {} exceeds max {}", self.min, self.max));
        }
        Ok(())
    }
}

/// Weights for combining sub-scores into the composite score.
///
/// Weights must be non-negative and sum to one over the terms used; a term
/// that is not used has weight zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub momentum: f64,
    pub volatility: f64,
    pub volume: f64,
    pub trades: f64,
    #[serde(default)]
    pub trend: f64,
}

impl ScoreWeights {
    #[must_use]
    pub const fn new(momentum: f64, volatility: f64, volume: f64, trades: f64, trend: f64) -> Self {
        Self {
            momentum,
            volatility,
            volume,
            trades,
            trend,
        }
    }

    /// Liquidity-weighted weights used for short-horizon scalping selection.
    #[must_use]
    pub const fn scalping() -> Self {
        Self::new(0.35, 0.25, 0.25, 0.15, 0.0)
    }

    /// Momentum-weighted weights used for potential discovery.
    #[must_use]
    pub const fn discovery() -> Self {
        Self::new(0.5, 0.3, 0.1, 0.1, 0.0)
    }

    #[must_use]
    pub fn sum(&self) -> f64 {
        self.momentum + self.volatility + self.volume + self.trades + self.trend
    }

    /// Check that every weight is finite and non-negative and that they sum to one.
    ///
    /// # Errors
    ///
    /// Returns a human-readable reason when the weights are unusable.
    pub fn validate(&self) -> Result<(), String> {
        let all = [
            ("momentum", self.momentum),
            ("volatility", self.volatility),
            ("volume", self.volume),
            ("trades", self.trades),
            ("trend", self.trend),
        ];
        for (name, weight) in all {
            if !weight.is_finite() || weight < 0.0 {
                return Err(format!("{name} weight must be a non-negative number"));
            }
        }
        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(format!("weights must sum to 1, got {sum}"));
        }
        Ok(())
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self::scalping()
    }
}

/// 24h range as a percentage of the low: `(high - low) / low * 100`.
///
/// Returns `None` when the low is not strictly positive.
#[must_use]
pub fn volatility(high: f64, low: f64) -> Option<f64> {
    if low <= 0.0 {
        return None;
    }
    Some((high - low) / low * 100.0).filter(|v| v.is_finite())
}

/// Step bonus for wide ranges: `3.0` above 5%, `2.0` above 3%, `1.5` above 2%.
#[must_use]
pub fn volatility_bonus(volatility: f64) -> f64 {
    if volatility > 5.0 {
        3.0
    } else if volatility > 3.0 {
        2.0
    } else if volatility > 2.0 {
        1.5
    } else {
        1.0
    }
}

/// Step score of the absolute percent move: `2.0` above 3%, `1.5` above 2%,
/// `1.0` above 1%, else `0.5`.
#[must_use]
pub fn trend_score(price_change_percent: f64) -> f64 {
    let magnitude = price_change_percent.abs();
    if magnitude > 3.0 {
        2.0
    } else if magnitude > 2.0 {
        1.5
    } else if magnitude > 1.0 {
        1.0
    } else {
        0.5
    }
}

/// Percentile rank of each value within the slice.
///
/// The rank of `v` is the fraction of values `<= v`, so ties share a rank and
/// the maximum always ranks `1.0`. Inputs must be finite.
#[must_use]
pub fn volatility_ranks(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    if n == 0 {
        return Vec::new();
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    values
        .iter()
        .map(|v| sorted.partition_point(|x| x <= v) as f64 / n as f64)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(price_change: f64, pct: f64, last: f64) -> TickerRecord {
        TickerRecord {
            symbol: "AAAUSDT".into(),
            last_price: last,
            price_change,
            price_change_percent: pct,
            high_price: last,
            low_price: last,
            volume: 0.0,
            quote_volume: 0.0,
            trade_count: 0,
        }
    }

    #[test]
    fn momentum_formulas() {
        let r = record(-0.05, -4.9, 1.0);
        assert!((MomentumFormula::PercentChange.momentum(&r) - 4.9).abs() < 1e-12);
        assert!((MomentumFormula::PriceDelta.momentum(&r) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn price_delta_on_zero_price_is_not_finite() {
        let r = record(0.1, 1.0, 0.0);
        assert!(!MomentumFormula::PriceDelta.momentum(&r).is_finite());
    }

    #[test]
    fn volatility_guards_zero_low() {
        assert_eq!(volatility(1.0, 0.0), None);
        assert_eq!(volatility(1.0, -1.0), None);
        let v = volatility(1.1, 1.0).unwrap();
        assert!((v - 10.0).abs() < 1e-9);
    }

    #[test]
    fn volatility_bonus_breakpoints_are_exclusive() {
        assert_eq!(volatility_bonus(0.0), 1.0);
        assert_eq!(volatility_bonus(2.0), 1.0);
        assert_eq!(volatility_bonus(2.0001), 1.5);
        assert_eq!(volatility_bonus(3.0), 1.5);
        assert_eq!(volatility_bonus(3.5), 2.0);
        assert_eq!(volatility_bonus(5.0), 2.0);
        assert_eq!(volatility_bonus(5.01), 3.0);
    }

    #[test]
    fn volatility_bonus_is_monotonic() {
        let mut previous = 0.0;
        for step in 0..1000 {
            let bonus = volatility_bonus(f64::from(step) * 0.01);
            assert!(bonus >= previous);
            previous = bonus;
        }
    }

    #[test]
    fn trend_score_steps() {
        assert_eq!(trend_score(0.5), 0.5);
        assert_eq!(trend_score(1.0), 0.5);
        assert_eq!(trend_score(-1.5), 1.0);
        assert_eq!(trend_score(2.5), 1.5);
        assert_eq!(trend_score(-3.01), 2.0);
    }

    #[test]
    fn normalizer_clamps_both_sides() {
        let volume = Normalizer::new(5_000_000.0, 0.5, 3.0);
        assert_eq!(volume.apply(0.0), 0.5);
        assert_eq!(volume.apply(10_000_000.0), 2.0);
        assert_eq!(volume.apply(1e12), 3.0);
    }

    #[test]
    fn normalizer_validation() {
        assert!(Normalizer::new(0.0, 0.0, 1.0).validate().is_err());
        assert!(Normalizer::new(1.0, 2.0, 1.0).validate().is_err());
        assert!(Normalizer::new(1.0, 0.0, f64::INFINITY).validate().is_err());
        assert!(Normalizer::new(1e6, 0.0, 5.0).validate().is_ok());
    }

    #[test]
    fn reference_weight_sets_are_valid() {
        assert!(ScoreWeights::scalping().validate().is_ok());
        assert!(ScoreWeights::discovery().validate().is_ok());
    }

    #[test]
    fn weights_must_sum_to_one() {
        let err = ScoreWeights::new(0.5, 0.5, 0.5, 0.0, 0.0)
            .validate()
            .unwrap_err();
        assert!(err.contains("sum to 1"));
    }

    #[test]
    fn negative_weights_are_rejected() {
        let err = ScoreWeights::new(1.2, -0.2, 0.0, 0.0, 0.0)
            .validate()
            .unwrap_err();
        assert!(err.contains("volatility"));
    }

    #[test]
    fn ranks_share_ties_and_top_out_at_one() {
        let ranks = volatility_ranks(&[4.0, 1.0, 4.0, 9.0]);
        assert_eq!(ranks, vec![0.75, 0.25, 0.75, 1.0]);
    }

    #[test]
    fn ranks_are_non_decreasing_in_value() {
        let values = [3.2, 0.4, 7.7, 1.1, 3.2, 12.0, 0.0];
        let ranks = volatility_ranks(&values);
        for i in 0..values.len() {
            for j in 0..values.len() {
                if values[i] <= values[j] {
                    assert!(ranks[i] <= ranks[j]);
                }
            }
        }
    }

    #[test]
    fn ranks_of_empty_set() {
        assert!(volatility_ranks(&[]).is_empty());
    }
}
