//! Screening profile and threshold overrides (`[screen]`).
//!
//! A [`Profile`] selects a complete set of reference thresholds and scoring
//! parameters; the optional override tables adjust individual values on top
//! of it.

use serde::{Deserialize, Serialize};

use crate::adapter::outbound::decision::llm::Brief;
use crate::application::scoring::ScoringConfig;
use crate::application::universe::FilterConfig;
use crate::domain::profile::Profile;
use crate::domain::score::{MomentumFormula, Normalizer, ScoreWeights, VolatilityTerm};
use crate::error::{ConfigError, Result};

/// Universe thresholds of a profile.
#[must_use]
pub fn filter_preset(profile: Profile) -> FilterConfig {
    match profile {
        Profile::Scalping => FilterConfig::scalping(),
        Profile::Discovery => FilterConfig::discovery(),
    }
}

/// Scoring parameters of a profile.
#[must_use]
pub const fn scoring_preset(profile: Profile) -> ScoringConfig {
    match profile {
        Profile::Scalping => ScoringConfig::scalping(),
        Profile::Discovery => ScoringConfig::discovery(),
    }
}

/// Decision-maker brief of a profile.
#[must_use]
pub const fn brief(profile: Profile) -> Brief {
    match profile {
        Profile::Scalping => Brief::Scalping,
        Profile::Discovery => Brief::Discovery,
    }
}

/// Optional universe filter overrides (`[screen.filter]`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_volume: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_trade_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_move: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_move: Option<f64>,
    /// Replaces the default denylist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,
}

/// Optional scoring overrides (`[screen.scoring]`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub momentum: Option<MomentumFormula>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volatility_term: Option<VolatilityTerm>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights: Option<ScoreWeights>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<Normalizer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trades: Option<Normalizer>,
}

/// Screening settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenConfig {
    #[serde(default)]
    pub profile: Profile,

    /// Number of candidates kept after ranking. Defaults to the profile's.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_k: Option<usize>,

    #[serde(default)]
    pub filter: FilterOverrides,

    #[serde(default)]
    pub scoring: ScoringOverrides,
}

impl ScreenConfig {
    /// Switch to another profile, keeping explicit overrides.
    #[must_use]
    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }

    #[must_use]
    pub fn top_k(&self) -> usize {
        self.top_k.unwrap_or_else(|| self.profile.default_top_k())
    }

    /// Resolve the filter thresholds for the given quote asset.
    #[must_use]
    pub fn filter_config(&self, quote_asset: &str) -> FilterConfig {
        let base = filter_preset(self.profile);
        let o = &self.filter;
        FilterConfig {
            quote_asset: quote_asset.to_string(),
            min_volume: o.min_volume.unwrap_or(base.min_volume),
            min_trade_count: o.min_trade_count.unwrap_or(base.min_trade_count),
            min_price: o.min_price.unwrap_or(base.min_price),
            min_move: o.min_move.unwrap_or(base.min_move),
            max_move: o.max_move.or(base.max_move),
            exclude: o.exclude.clone().unwrap_or(base.exclude),
        }
    }

    #[must_use]
    pub fn scoring_config(&self) -> ScoringConfig {
        let base = scoring_preset(self.profile);
        let o = &self.scoring;
        ScoringConfig {
            momentum: o.momentum.unwrap_or(base.momentum),
            volatility_term: o.volatility_term.unwrap_or(base.volatility_term),
            weights: o.weights.unwrap_or(base.weights),
            volume: o.volume.unwrap_or(base.volume),
            trades: o.trades.unwrap_or(base.trades),
        }
    }

    /// Check the resolved thresholds and scoring parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if self.top_k == Some(0) {
            return Err(invalid("screen.top_k", "must be greater than 0"));
        }

        let filter = self.filter_config("");
        for (field, value) in [
            ("screen.filter.min_volume", filter.min_volume),
            ("screen.filter.min_price", filter.min_price),
            ("screen.filter.min_move", filter.min_move),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(field, "must be a non-negative number"));
            }
        }
        if let Some(max_move) = filter.max_move {
            if !max_move.is_finite() || max_move <= filter.min_move {
                return Err(invalid(
                    "screen.filter.max_move",
                    format!("must exceed min_move {}", filter.min_move),
                ));
            }
        }

        let scoring = self.scoring_config();
        scoring
            .weights
            .validate()
            .map_err(|reason| invalid("screen.scoring.weights", reason))?;
        scoring
            .volume
            .validate()
            .map_err(|reason| invalid("screen.scoring.volume", reason))?;
        scoring
            .trades
            .validate()
            .map_err(|reason| invalid("screen.scoring.trades", reason))?;

        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> crate::error::Error {
    ConfigError::InvalidValue {
        field,
        reason: reason.into(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_resolve_reference_parameters() {
        let scalping = ScreenConfig::default();
        assert_eq!(scalping.top_k(), 10);
        assert_eq!(scalping.filter_config("USDT"), FilterConfig::scalping());
        assert_eq!(scalping.scoring_config(), ScoringConfig::scalping());

        let discovery = ScreenConfig::default().with_profile(Profile::Discovery);
        assert_eq!(discovery.top_k(), 3);
        assert_eq!(discovery.filter_config("USDT").max_move, Some(100.0));
        assert_eq!(
            discovery.scoring_config().momentum,
            MomentumFormula::PercentChange
        );
    }

    #[test]
    fn overrides_apply_on_top_of_profile() {
        let config = ScreenConfig {
            top_k: Some(5),
            filter: FilterOverrides {
                min_move: Some(1.0),
                exclude: Some(vec!["PEPE".into()]),
                ..Default::default()
            },
            ..Default::default()
        };

        let filter = config.filter_config("FDUSD");
        assert_eq!(config.top_k(), 5);
        assert_eq!(filter.quote_asset, "FDUSD");
        assert_eq!(filter.min_move, 1.0);
        assert_eq!(filter.min_volume, 1_000_000.0);
        assert_eq!(filter.exclude, vec!["PEPE".to_string()]);
    }

    #[test]
    fn rejects_inverted_move_band() {
        let config = ScreenConfig {
            profile: Profile::Discovery,
            filter: FilterOverrides {
                min_move: Some(100.0),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_bad_weights() {
        let config = ScreenConfig {
            scoring: ScoringOverrides {
                weights: Some(ScoreWeights::new(0.5, 0.5, 0.5, 0.0, 0.0)),
                ..Default::default()
            },
            ..Default::default()
        };
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("screen.scoring.weights"));
    }

    #[test]
    fn rejects_zero_top_k() {
        let config = ScreenConfig {
            top_k: Some(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
