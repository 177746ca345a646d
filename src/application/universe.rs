//! Universe filter: reduce a snapshot to the tickers eligible for scoring.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::candidate::Eligible;
use crate::domain::snapshot::Snapshot;
use crate::domain::ticker::TickerRecord;

/// Large-cap and stable assets excluded from screening by default.
pub const DEFAULT_EXCLUDE: &[&str] = &[
    "BTC", "ETH", "BNB", "USDT", "USDC", "BUSD", "XRP", "ADA", "DOGE", "DOT", "MATIC", "SOL",
    "AVAX", "SHIB", "TRX", "LINK", "UNI", "LTC",
];

/// Eligibility thresholds.
///
/// All comparisons are strict: a ticker exactly at a threshold is excluded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Quote asset the pair must be denominated in, e.g. `USDT`.
    pub quote_asset: String,
    /// Floor on the provider's `volume` field.
    pub min_volume: f64,
    pub min_trade_count: u64,
    pub min_price: f64,
    /// Lower bound on `abs(priceChangePercent)`.
    pub min_move: f64,
    /// Optional upper bound on `abs(priceChangePercent)`.
    pub max_move: Option<f64>,
    /// Base symbols never considered, matched case-insensitively.
    pub exclude: Vec<String>,
}

impl FilterConfig {
    /// Tight move band for short-horizon selection.
    #[must_use]
    pub fn scalping() -> Self {
        Self {
            quote_asset: "USDT".to_string(),
            min_volume: 1_000_000.0,
            min_trade_count: 10_000,
            min_price: 0.00001,
            min_move: 2.0,
            max_move: None,
            exclude: DEFAULT_EXCLUDE.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Wide move band for potential discovery.
    #[must_use]
    pub fn discovery() -> Self {
        Self {
            min_move: 5.0,
            max_move: Some(100.0),
            ..Self::scalping()
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self::scalping()
    }
}

/// An eligibility rule a record can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    QuoteAsset,
    Volume,
    TradeCount,
    Price,
    Move,
    Excluded,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::QuoteAsset => "quote_asset",
            Self::Volume => "volume",
            Self::TradeCount => "trade_count",
            Self::Price => "price",
            Self::Move => "move",
            Self::Excluded => "excluded",
        };
        f.write_str(name)
    }
}

/// Result of filtering a snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome {
    pub eligible: Vec<Eligible>,
    /// Records that passed validation.
    pub parsed: usize,
    /// Malformed records dropped before filtering.
    pub dropped: usize,
}

/// Stateless eligibility filter.
#[derive(Debug, Clone)]
pub struct UniverseFilter {
    config: FilterConfig,
    exclude: HashSet<String>,
}

impl UniverseFilter {
    #[must_use]
    pub fn new(config: FilterConfig) -> Self {
        let exclude = config.exclude.iter().map(|s| s.to_uppercase()).collect();
        Self { config, exclude }
    }

    #[must_use]
    pub const fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Validate every raw record, then apply the eligibility rules.
    ///
    /// Malformed records are dropped one by one and logged; they never abort
    /// the run.
    #[must_use]
    pub fn apply(&self, snapshot: &Snapshot) -> FilterOutcome {
        let mut records = Vec::with_capacity(snapshot.len());
        let mut dropped = 0;

        for entry in snapshot.tickers() {
            match TickerRecord::try_from(entry) {
                Ok(record) => records.push(record),
                Err(err) => {
                    dropped += 1;
                    warn!(
                        symbol = entry.symbol().unwrap_or("<none>"),
                        error = %err,
                        "Dropping malformed ticker"
                    );
                }
            }
        }

        let eligible = self.apply_records(&records);
        debug!(
            universe = snapshot.len(),
            parsed = records.len(),
            dropped,
            eligible = eligible.len(),
            "Universe filtered"
        );

        FilterOutcome {
            eligible,
            parsed: records.len(),
            dropped,
        }
    }

    /// Apply the eligibility rules to validated records.
    ///
    /// Duplicate pair symbols keep their first occurrence.
    #[must_use]
    pub fn apply_records(&self, records: &[TickerRecord]) -> Vec<Eligible> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut eligible = Vec::new();

        for record in records {
            if !self.violations(record).is_empty() {
                continue;
            }
            let Some(base) = record.base_symbol(&self.config.quote_asset) else {
                continue;
            };
            if !seen.insert(record.symbol.as_str()) {
                debug!(symbol = %record.symbol, "Skipping duplicate ticker");
                continue;
            }
            eligible.push(Eligible {
                base: base.to_string(),
                record: record.clone(),
            });
        }

        eligible
    }

    /// Every rule the record fails; empty when it is eligible.
    #[must_use]
    pub fn violations(&self, record: &TickerRecord) -> Vec<Rule> {
        let config = &self.config;
        let mut failed = Vec::new();

        let base = record.base_symbol(&config.quote_asset);
        if base.is_none() {
            failed.push(Rule::QuoteAsset);
        }
        if record.volume <= config.min_volume {
            failed.push(Rule::Volume);
        }
        if record.trade_count <= config.min_trade_count {
            failed.push(Rule::TradeCount);
        }
        if record.last_price <= config.min_price {
            failed.push(Rule::Price);
        }

        let magnitude = record.price_change_percent.abs();
        let above = magnitude > config.min_move;
        let below = config.max_move.map_or(true, |max| magnitude < max);
        if !(above && below) {
            failed.push(Rule::Move);
        }

        if base.is_some_and(|b| self.exclude.contains(&b.to_uppercase())) {
            failed.push(Rule::Excluded);
        }

        failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::domain::TickerBuilder;

    fn record(symbol: &str) -> TickerBuilder {
        TickerBuilder::new(symbol)
            .last_price(1.0)
            .change_percent(6.0)
            .range(1.1, 0.9)
            .volume(2_000_000.0)
            .trades(15_000)
    }

    #[test]
    fn reference_scenario_keeps_only_aaa() {
        let filter = UniverseFilter::new(FilterConfig::scalping());
        let aaa = record("AAAUSDT").build();
        let bbb = TickerBuilder::new("BBBUSDT")
            .last_price(0.5)
            .change_percent(1.0)
            .range(0.51, 0.49)
            .volume(500_000.0)
            .trades(5_000)
            .build();

        let eligible = filter.apply_records(&[aaa, bbb.clone()]);

        assert_eq!(eligible.len(), 1);
        assert_eq!(eligible[0].base, "AAA");
        assert_eq!(
            filter.violations(&bbb),
            vec![Rule::Volume, Rule::TradeCount, Rule::Move]
        );
    }

    #[test]
    fn thresholds_are_strict() {
        let filter = UniverseFilter::new(FilterConfig::scalping());

        let at_volume = record("AAAUSDT").volume(1_000_000.0).build();
        let at_trades = record("AAAUSDT").trades(10_000).build();
        let at_price = record("AAAUSDT").last_price(0.00001).build();
        let at_move = record("AAAUSDT").change_percent(-2.0).build();

        assert_eq!(filter.violations(&at_volume), vec![Rule::Volume]);
        assert_eq!(filter.violations(&at_trades), vec![Rule::TradeCount]);
        assert_eq!(filter.violations(&at_price), vec![Rule::Price]);
        assert_eq!(filter.violations(&at_move), vec![Rule::Move]);
    }

    #[test]
    fn discovery_band_is_open_on_both_ends() {
        let filter = UniverseFilter::new(FilterConfig::discovery());

        assert!(filter.violations(&record("AAAUSDT").change_percent(5.0).build()).contains(&Rule::Move));
        assert!(filter.violations(&record("AAAUSDT").change_percent(5.1).build()).is_empty());
        assert!(filter.violations(&record("AAAUSDT").change_percent(-99.0).build()).is_empty());
        assert!(filter.violations(&record("AAAUSDT").change_percent(100.0).build()).contains(&Rule::Move));
    }

    #[test]
    fn other_quote_assets_are_excluded() {
        let filter = UniverseFilter::new(FilterConfig::scalping());

        assert_eq!(
            filter.violations(&record("AAABTC").build()),
            vec![Rule::QuoteAsset]
        );
        assert_eq!(
            filter.violations(&record("USDT").build()),
            vec![Rule::QuoteAsset]
        );
    }

    #[test]
    fn denylist_matches_base_case_insensitively() {
        let mut config = FilterConfig::scalping();
        config.exclude = vec!["pepe".into()];
        let filter = UniverseFilter::new(config);

        assert_eq!(
            filter.violations(&record("PEPEUSDT").build()),
            vec![Rule::Excluded]
        );
        assert!(filter.violations(&record("SOLUSDT").build()).is_empty());
    }

    #[test]
    fn default_denylist_excludes_majors() {
        let filter = UniverseFilter::new(FilterConfig::default());
        let eligible = filter.apply_records(&[
            record("BTCUSDT").build(),
            record("SOLUSDT").build(),
            record("ARBUSDT").build(),
        ]);

        let bases: Vec<_> = eligible.iter().map(|e| e.base.as_str()).collect();
        assert_eq!(bases, vec!["ARB"]);
    }

    #[test]
    fn duplicates_keep_first_occurrence() {
        let filter = UniverseFilter::new(FilterConfig::scalping());
        let eligible = filter.apply_records(&[
            record("AAAUSDT").volume(3_000_000.0).build(),
            record("AAAUSDT").volume(9_000_000.0).build(),
        ]);

        assert_eq!(eligible.len(), 1);
        assert!((eligible[0].record.volume - 3_000_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn output_is_subset_without_duplicates() {
        let filter = UniverseFilter::new(FilterConfig::scalping());
        let records: Vec<_> = ["AAAUSDT", "BBBUSDT", "AAAUSDT", "CCCBTC", "DDDUSDT"]
            .iter()
            .map(|s| record(s).build())
            .collect();

        let eligible = filter.apply_records(&records);
        let symbols: HashSet<_> = eligible.iter().map(|e| e.record.symbol.clone()).collect();

        assert_eq!(symbols.len(), eligible.len());
        assert!(symbols
            .iter()
            .all(|s| records.iter().any(|r| &r.symbol == s)));
    }

    #[test]
    fn malformed_records_are_dropped_and_counted() {
        use crate::testkit::domain::{raw, snapshot_at};

        let mut broken = raw(&record("BADUSDT").build());
        broken.volume = Some("n/a".into());
        let snapshot = snapshot_at(vec![raw(&record("AAAUSDT").build()), broken], 0);

        let outcome = UniverseFilter::new(FilterConfig::scalping()).apply(&snapshot);

        assert_eq!(outcome.parsed, 1);
        assert_eq!(outcome.dropped, 1);
        assert_eq!(outcome.eligible.len(), 1);
    }

    #[test]
    fn undecodable_entries_are_dropped_and_counted() {
        use crate::domain::snapshot::Snapshot;
        use crate::domain::ticker::TickerEntry;
        use crate::testkit::domain::{at, raw};

        let entries: Vec<TickerEntry> = serde_json::from_str(
            r#"[{"symbol":"BADUSDT","lastPrice":true,"count":1}, 42, null]"#,
        )
        .unwrap();
        let mut tickers = vec![TickerEntry::from(raw(&record("AAAUSDT").build()))];
        tickers.extend(entries);
        let snapshot = Snapshot::capture(tickers, at(0));

        let outcome = UniverseFilter::new(FilterConfig::scalping()).apply(&snapshot);

        assert_eq!(outcome.parsed, 1);
        assert_eq!(outcome.dropped, 3);
        assert_eq!(outcome.eligible.len(), 1);
        assert_eq!(outcome.eligible[0].base, "AAA");
    }

    #[test]
    fn duplicates_are_skipped_without_counting_as_dropped() {
        use crate::testkit::domain::{raw, snapshot_at};

        let snapshot = snapshot_at(
            vec![
                raw(&record("AAAUSDT").volume(3_000_000.0).build()),
                raw(&record("AAAUSDT").volume(9_000_000.0).build()),
            ],
            0,
        );

        let outcome = UniverseFilter::new(FilterConfig::scalping()).apply(&snapshot);

        assert_eq!(outcome.parsed, 2);
        assert_eq!(outcome.dropped, 0);
        assert_eq!(outcome.eligible.len(), 1);
    }

    #[test]
    fn empty_snapshot_is_a_valid_empty_result() {
        let snapshot = crate::testkit::domain::snapshot_at(vec![], 0);
        let outcome = UniverseFilter::new(FilterConfig::scalping()).apply(&snapshot);

        assert!(outcome.eligible.is_empty());
        assert_eq!(outcome.parsed, 0);
        assert_eq!(outcome.dropped, 0);
    }
}
