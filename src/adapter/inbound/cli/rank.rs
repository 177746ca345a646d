//! Handler for the `rank` command.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::{operator, output};
use crate::domain::candidate::Candidate;
use crate::domain::snapshot::CacheState;
use crate::error::Result;
use crate::port::inbound::operator::screen::{ScreenRequest, ScreenView};

#[derive(Tabled)]
struct CandidateRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "24h %")]
    change: String,
    #[tabled(rename = "Volume")]
    volume: String,
    #[tabled(rename = "Trades")]
    trades: u64,
    #[tabled(rename = "Range %")]
    volatility: String,
    #[tabled(rename = "Score")]
    score: String,
}

impl CandidateRow {
    fn new(rank: usize, c: &Candidate) -> Self {
        Self {
            rank,
            symbol: c.symbol.clone(),
            price: format!("{}", c.last_price),
            change: format!("{:+.2}", c.price_change_percent),
            volume: compact(c.volume),
            trades: c.trade_count,
            volatility: format!("{:.2}", c.scores.volatility),
            score: format!("{:.3}", c.composite),
        }
    }
}

/// Human-readable magnitude: `25.3M`, `840.0K`.
fn compact(value: f64) -> String {
    if value >= 1e9 {
        format!("{:.1}B", value / 1e9)
    } else if value >= 1e6 {
        format!("{:.1}M", value / 1e6)
    } else if value >= 1e3 {
        format!("{:.1}K", value / 1e3)
    } else {
        format!("{value:.0}")
    }
}

/// Execute the rank command.
pub fn execute(request: &ScreenRequest, all: bool) -> Result<()> {
    let view = operator::operator().rank(request)?;
    let candidates = if all { &view.ranked } else { &view.top };

    if output::is_json() {
        output::emit_json_line("screening", summary_json(&view));
        for (i, candidate) in candidates.iter().enumerate() {
            output::emit_json_line(
                "candidate",
                json!({ "rank": i + 1, "candidate": candidate }),
            );
        }
        return Ok(());
    }

    print_summary(&view);
    if candidates.is_empty() {
        println!();
        output::warning("No candidates passed the universe filter");
        return Ok(());
    }

    output::section(if all { "Ranked" } else { "Top candidates" });
    output::lines(&candidate_table(candidates));

    Ok(())
}

pub(crate) fn candidate_table(candidates: &[Candidate]) -> String {
    let rows = candidates
        .iter()
        .enumerate()
        .map(|(i, c)| CandidateRow::new(i + 1, c));
    Table::new(rows).to_string()
}

pub(crate) fn summary_json(view: &ScreenView) -> serde_json::Value {
    let mut value = json!(view);
    value["scored"] = json!(view.ranked.len());
    value
}

pub(crate) fn print_summary(view: &ScreenView) {
    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Profile", view.profile);
    output::field(
        "Snapshot",
        format!(
            "{} ({}s old)",
            view.captured_at.format("%H:%M:%S UTC"),
            view.age_secs
        ),
    );
    if view.state == CacheState::Stale {
        output::warning("Snapshot is stale; ranking may not reflect the market");
    }
    output::field("Eligible", format!("{} of {}", view.eligible, view.universe));
    if view.dropped > 0 {
        output::field("Malformed", output::negative(view.dropped));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::domain::candidate;

    #[test]
    fn compact_magnitudes() {
        assert_eq!(compact(950.0), "950");
        assert_eq!(compact(12_345.0), "12.3K");
        assert_eq!(compact(25_300_000.0), "25.3M");
        assert_eq!(compact(4_100_000_000.0), "4.1B");
    }

    #[test]
    fn table_lists_candidates_in_order() {
        let table = candidate_table(&[candidate("AAA", 2.0), candidate("BBB", 1.0)]);

        assert!(table.contains("Symbol"));
        let aaa = table.find("AAA").unwrap();
        let bbb = table.find("BBB").unwrap();
        assert!(aaa < bbb);
    }
}
