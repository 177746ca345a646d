//! Multi-factor scoring of eligible tickers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::candidate::{Candidate, Eligible, SubScores};
use crate::domain::score::{
    trend_score, volatility, volatility_bonus, volatility_ranks, MomentumFormula, Normalizer,
    ScoreWeights, VolatilityTerm,
};

/// Parameters of the scoring engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub momentum: MomentumFormula,
    pub volatility_term: VolatilityTerm,
    pub weights: ScoreWeights,
    /// Normalizer applied to the provider's `volume`.
    pub volume: Normalizer,
    /// Normalizer applied to the trade count.
    pub trades: Normalizer,
}

impl ScoringConfig {
    /// Liquidity-weighted scoring for short-horizon selection.
    #[must_use]
    pub const fn scalping() -> Self {
        Self {
            momentum: MomentumFormula::PriceDelta,
            volatility_term: VolatilityTerm::RankBonus,
            weights: ScoreWeights::scalping(),
            volume: Normalizer::new(5_000_000.0, 0.5, 3.0),
            trades: Normalizer::new(20_000.0, 0.5, 2.0),
        }
    }

    /// Momentum-weighted scoring for potential discovery.
    #[must_use]
    pub const fn discovery() -> Self {
        Self {
            momentum: MomentumFormula::PercentChange,
            volatility_term: VolatilityTerm::RankBonus,
            weights: ScoreWeights::discovery(),
            volume: Normalizer::new(1_000_000.0, 0.0, 5.0),
            trades: Normalizer::new(10_000.0, 0.0, 5.0),
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::scalping()
    }
}

/// Weighted sum of the sub-scores.
#[must_use]
pub fn composite(weights: &ScoreWeights, term: VolatilityTerm, scores: &SubScores) -> f64 {
    let volatility = match term {
        VolatilityTerm::RankBonus => scores.volatility_rank * scores.volatility_bonus,
        VolatilityTerm::Raw => scores.volatility,
    };

    weights.momentum * scores.momentum
        + weights.volatility * volatility
        + weights.volume * scores.volume_score
        + weights.trades * scores.trade_score
        + weights.trend * scores.trend_score
}

/// Scores a filtered set of tickers.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    #[must_use]
    pub const fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score every eligible ticker, keyed by base symbol.
    ///
    /// Tickers without a usable range or with a non-finite sub-score are
    /// dropped and logged first. Volatility ranks are then computed over the
    /// survivors, so the result depends on the whole scored set.
    #[must_use]
    pub fn score(&self, eligible: &[Eligible]) -> BTreeMap<String, Candidate> {
        let measured: Vec<(&Eligible, SubScores)> = eligible
            .iter()
            .filter_map(|e| self.sub_scores(e).map(|scores| (e, scores)))
            .collect();

        let values: Vec<f64> = measured.iter().map(|(_, s)| s.volatility).collect();
        let ranks = volatility_ranks(&values);

        let mut scored = BTreeMap::new();
        for ((eligible, mut scores), rank) in measured.into_iter().zip(ranks) {
            scores.volatility_rank = rank;
            let total = composite(&self.config.weights, self.config.volatility_term, &scores);
            if !total.is_finite() {
                warn!(
                    symbol = %eligible.record.symbol,
                    composite = total,
                    "Dropping ticker with non-finite score"
                );
                continue;
            }

            scored.insert(
                eligible.base.clone(),
                Candidate::new(eligible.base.clone(), &eligible.record, scores, total),
            );
        }

        scored
    }

    /// Everything but the volatility rank, or `None` when the ticker cannot
    /// be scored.
    fn sub_scores(&self, eligible: &Eligible) -> Option<SubScores> {
        let record = &eligible.record;
        let Some(volatility) = volatility(record.high_price, record.low_price) else {
            warn!(
                symbol = %record.symbol,
                low = record.low_price,
                "Dropping ticker without a usable 24h range"
            );
            return None;
        };

        let scores = SubScores {
            momentum: self.config.momentum.momentum(record),
            volatility,
            volatility_rank: 0.0,
            volatility_bonus: volatility_bonus(volatility),
            volume_score: self.config.volume.apply(record.volume),
            trade_score: self.config.trades.apply(record.trade_count as f64),
            trend_score: trend_score(record.price_change_percent),
        };
        if !scores.is_finite() {
            warn!(
                symbol = %record.symbol,
                momentum = scores.momentum,
                "Dropping ticker with non-finite score"
            );
            return None;
        }
        Some(scores)
    }
}
