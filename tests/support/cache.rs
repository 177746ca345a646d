use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use tickerscope::adapter::outbound::cache::file::FileSnapshotCache;
use tickerscope::domain::snapshot::Snapshot;
use tickerscope::domain::ticker::RawTicker;
use tickerscope::port::outbound::cache::SnapshotCache;
use tickerscope::testkit::domain::{entries, TickerBuilder};

/// The two-ticker universe used by the end-to-end scenarios:
/// `AAAUSDT` is a modest mover, `BBBUSDT` a large and liquid one.
pub fn two_movers() -> Vec<RawTicker> {
    vec![
        TickerBuilder::new("AAAUSDT")
            .last_price(1.0)
            .price_change(0.06)
            .change_percent(6.0)
            .range(1.1, 1.0)
            .volume(2_000_000.0)
            .trades(15_000)
            .build_raw(),
        TickerBuilder::new("BBBUSDT")
            .last_price(1.0)
            .price_change(0.2)
            .change_percent(20.0)
            .range(1.3, 1.0)
            .volume(3_000_000.0)
            .trades(30_000)
            .build_raw(),
    ]
}

/// Write `tickers` captured `age` ago to a file cache at `path`.
pub fn seed(path: &Path, tickers: Vec<RawTicker>, age: Duration) -> DateTime<Utc> {
    let captured_at = Utc::now() - age;
    FileSnapshotCache::new(path)
        .write(&Snapshot::capture(entries(tickers), captured_at))
        .expect("seed snapshot cache");
    captured_at
}
