//! Builders for domain primitives used across tests.

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::candidate::{Candidate, SubScores};
use crate::domain::snapshot::Snapshot;
use crate::domain::ticker::{RawNumber, RawTicker, TickerEntry, TickerRecord};

/// Base of the fixed test clock: 2023-11-14T22:13:20Z.
pub const EPOCH: i64 = 1_700_000_000;

/// Instant `secs` seconds after [`EPOCH`].
pub fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(EPOCH + secs, 0)
        .single()
        .unwrap_or_else(|| panic!("invalid test timestamp {secs}"))
}

/// Builder for [`TickerRecord`].
///
/// Defaults describe a liquid mover that passes the scalping filter:
/// price 1.0, +3%, range 1.00..1.04, volume 2M, 15k trades.
#[derive(Debug, Clone)]
pub struct TickerBuilder {
    symbol: String,
    last_price: f64,
    price_change: Option<f64>,
    price_change_percent: f64,
    high_price: f64,
    low_price: f64,
    volume: f64,
    quote_volume: Option<f64>,
    trade_count: u64,
}

impl TickerBuilder {
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            last_price: 1.0,
            price_change: None,
            price_change_percent: 3.0,
            high_price: 1.04,
            low_price: 1.0,
            volume: 2_000_000.0,
            quote_volume: None,
            trade_count: 15_000,
        }
    }

    pub fn last_price(mut self, price: f64) -> Self {
        self.last_price = price;
        self
    }

    /// Absolute change; derived from the percent change when not set.
    pub fn price_change(mut self, change: f64) -> Self {
        self.price_change = Some(change);
        self
    }

    pub fn change_percent(mut self, percent: f64) -> Self {
        self.price_change_percent = percent;
        self
    }

    pub fn range(mut self, high: f64, low: f64) -> Self {
        self.high_price = high;
        self.low_price = low;
        self
    }

    pub fn volume(mut self, volume: f64) -> Self {
        self.volume = volume;
        self
    }

    /// Quote volume; `volume × last_price` when not set.
    pub fn quote_volume(mut self, quote_volume: f64) -> Self {
        self.quote_volume = Some(quote_volume);
        self
    }

    pub fn trades(mut self, count: u64) -> Self {
        self.trade_count = count;
        self
    }

    pub fn build(self) -> TickerRecord {
        TickerRecord {
            price_change: self
                .price_change
                .unwrap_or(self.last_price * self.price_change_percent / 100.0),
            quote_volume: self.quote_volume.unwrap_or(self.volume * self.last_price),
            symbol: self.symbol,
            last_price: self.last_price,
            price_change_percent: self.price_change_percent,
            high_price: self.high_price,
            low_price: self.low_price,
            volume: self.volume,
            trade_count: self.trade_count,
        }
    }

    /// Provider form with numbers encoded as decimal strings.
    pub fn build_raw(self) -> RawTicker {
        raw(&self.build())
    }
}

/// Provider form of a record, numbers encoded as decimal strings.
pub fn raw(record: &TickerRecord) -> RawTicker {
    let text = |v: f64| Some(RawNumber::Text(format!("{v:.8}")));
    RawTicker {
        symbol: Some(record.symbol.clone()),
        last_price: text(record.last_price),
        price_change: text(record.price_change),
        price_change_percent: text(record.price_change_percent),
        high_price: text(record.high_price),
        low_price: text(record.low_price),
        volume: text(record.volume),
        quote_volume: text(record.quote_volume),
        count: Some(RawNumber::from(record.trade_count)),
    }
}

/// Default eligible mover in provider form.
pub fn raw_ticker(symbol: &str) -> RawTicker {
    TickerBuilder::new(symbol).build_raw()
}

/// Snapshot captured `secs` seconds after [`EPOCH`].
pub fn snapshot_at(tickers: Vec<RawTicker>, secs: i64) -> Snapshot {
    Snapshot::capture(entries(tickers), at(secs))
}

/// Wrap decoded tickers as captured entries.
pub fn entries(tickers: Vec<RawTicker>) -> Vec<TickerEntry> {
    tickers.into_iter().map(TickerEntry::from).collect()
}

/// Candidate quoted in USDT with the given composite score.
pub fn candidate(symbol: &str, composite: f64) -> Candidate {
    let record = TickerBuilder::new(&format!("{symbol}USDT")).build();
    let scores = SubScores {
        momentum: 3.0,
        volatility: 4.0,
        volatility_rank: 1.0,
        volatility_bonus: 2.0,
        volume_score: 1.0,
        trade_score: 1.0,
        trend_score: 1.5,
    };
    Candidate::new(symbol.to_string(), &record, scores, composite)
}
