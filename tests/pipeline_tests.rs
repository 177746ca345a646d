//! Cache → filter → score → rank, end to end through the file cache.

mod support;

use chrono::{Duration, Utc};
use tickerscope::domain::profile::Profile;
use tickerscope::domain::snapshot::CacheState;
use tickerscope::domain::ticker::{RawNumber, RawTicker};
use tickerscope::error::Error;
use tickerscope::infrastructure::factory::screen::build_pipeline;
use tickerscope::testkit::config::with_cache;
use tickerscope::testkit::domain::TickerBuilder;

use support::cache::{seed, two_movers};

fn thin_and_flat() -> RawTicker {
    TickerBuilder::new("BBBUSDT")
        .last_price(0.5)
        .change_percent(1.0)
        .range(0.51, 0.49)
        .volume(500_000.0)
        .trades(5_000)
        .build_raw()
}

#[test]
fn only_the_liquid_mover_survives_the_default_filter() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cache.json");
    let aaa = TickerBuilder::new("AAAUSDT")
        .last_price(1.0)
        .change_percent(6.0)
        .range(1.1, 0.9)
        .volume(2_000_000.0)
        .trades(15_000)
        .build_raw();
    seed(&path, vec![aaa, thin_and_flat()], Duration::seconds(5));

    let screening = build_pipeline(&with_cache(&path)).run(Utc::now()).unwrap();

    assert_eq!(screening.universe, 2);
    assert_eq!(screening.eligible, 1);
    assert_eq!(screening.top.len(), 1);
    assert_eq!(screening.top[0].symbol, "AAA");
    assert_eq!(screening.top[0].pair, "AAAUSDT");
    assert_eq!(screening.state, CacheState::Fresh);
}

#[test]
fn malformed_records_are_dropped_without_failing_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cache.json");
    let mut tickers = two_movers();
    tickers.push(RawTicker {
        symbol: Some("CCCUSDT".into()),
        last_price: Some(RawNumber::from("n/a")),
        ..Default::default()
    });
    seed(&path, tickers, Duration::seconds(5));

    let screening = build_pipeline(&with_cache(&path)).run(Utc::now()).unwrap();

    assert_eq!(screening.universe, 3);
    assert_eq!(screening.dropped, 1);
    assert_eq!(screening.eligible, 2);
}

#[test]
fn wrongly_typed_element_does_not_cost_the_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cache.json");
    let captured_at = (Utc::now() - Duration::seconds(5)).to_rfc3339();
    let aaa = serde_json::to_string(&two_movers()[0]).unwrap();
    std::fs::write(
        &path,
        format!(
            r#"{{"captured_at":"{captured_at}","tickers":[{aaa},{{"symbol":"BADUSDT","lastPrice":true,"count":1}},"junk"]}}"#
        ),
    )
    .unwrap();

    let screening = build_pipeline(&with_cache(&path)).run(Utc::now()).unwrap();

    assert_eq!(screening.universe, 3);
    assert_eq!(screening.dropped, 2);
    assert_eq!(screening.eligible, 1);
    assert_eq!(screening.top[0].symbol, "AAA");
}

#[test]
fn ranking_is_descending_by_composite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cache.json");
    seed(&path, two_movers(), Duration::seconds(5));

    let mut config = with_cache(&path);
    config.screen = config.screen.with_profile(Profile::Discovery);
    let screening = build_pipeline(&config).run(Utc::now()).unwrap();

    let symbols: Vec<_> = screening.ranked.iter().map(|c| c.symbol.as_str()).collect();
    assert_eq!(symbols, ["BBB", "AAA"]);
    assert!(screening
        .ranked
        .windows(2)
        .all(|w| w[0].composite >= w[1].composite));
}

#[test]
fn top_k_truncates_the_ranking() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cache.json");
    seed(&path, two_movers(), Duration::seconds(5));

    let mut config = with_cache(&path);
    config.screen.top_k = Some(1);
    let screening = build_pipeline(&config).run(Utc::now()).unwrap();

    assert_eq!(screening.ranked.len(), 2);
    assert_eq!(screening.top.len(), 1);
    assert_eq!(screening.top[0], screening.ranked[0]);
}

#[test]
fn stale_snapshot_is_screened_with_a_warning_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cache.json");
    seed(&path, two_movers(), Duration::seconds(3_600));

    let screening = build_pipeline(&with_cache(&path)).run(Utc::now()).unwrap();

    assert_eq!(screening.state, CacheState::Stale);
    assert_eq!(screening.eligible, 2);
}

#[test]
fn stale_snapshot_is_rejected_when_configured() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cache.json");
    seed(&path, two_movers(), Duration::seconds(3_600));

    let mut config = with_cache(&path);
    config.cache.reject_stale = true;
    let err = build_pipeline(&config).run(Utc::now()).unwrap_err();

    assert!(matches!(
        err,
        Error::StaleCache {
            threshold_secs: 360,
            ..
        }
    ));
}

#[test]
fn empty_cache_is_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let config = with_cache(&dir.path().join("cache.json"));

    let err = build_pipeline(&config).run(Utc::now()).unwrap_err();

    assert!(matches!(err, Error::CacheUnavailable { .. }));
}

#[test]
fn repeated_runs_over_one_snapshot_agree() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cache.json");
    seed(&path, two_movers(), Duration::seconds(5));
    let pipeline = build_pipeline(&with_cache(&path));
    let now = Utc::now();

    let first = pipeline.run(now).unwrap();
    let second = pipeline.run(now).unwrap();

    assert_eq!(first.ranked, second.ranked);
}
