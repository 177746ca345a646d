//! LLM-backed decision-maker.
//!
//! Renders the ranked candidates as a compact JSON table, asks the model for
//! `{"chosen_coins": [...]}` and returns the symbols as received. Arity and
//! membership are checked by the caller.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::domain::candidate::Candidate;
use crate::error::{Error, Result};
use crate::port::outbound::decision::DecisionMaker;
use crate::port::outbound::llm::{Llm, Prompt};

/// Trading horizon the model is briefed for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Brief {
    /// Very short holds on liquid, clearly trending pairs.
    #[default]
    Scalping,
    /// Larger movers with room to run over a few hours.
    Discovery,
}

impl Brief {
    fn instructions(self, picks: usize) -> String {
        let horizon = match self {
            Self::Scalping => {
                "You are a professional scalping trader holding positions for 5 to 15 minutes. \
                 Prefer high liquidity, many trades, a clear trend direction and a recent move \
                 of a few percent."
            }
            Self::Discovery => {
                "You are a crypto trader looking for coins with high short-term potential. \
                 A colleague will run news and technical analysis on your picks and exit \
                 each position within 6 hours."
            }
        };

        format!(
            r#"{horizon}

You receive a JSON array of pre-screened candidates, best composite score first.
Fields: symbol, price, change_pct, volume, quote_volume, trades, volatility, score.

Choose exactly {picks} coins from the list.

## Output (JSON only)
{{"chosen_coins": ["AAA", "BBB", "CCC"]}}

Rules:
- Use symbols exactly as listed, without the quote asset suffix
- Do not choose coins that are not in the list
- Do not repeat a coin"#
        )
    }
}

/// Row of the candidate table sent to the model.
#[derive(Serialize)]
struct Row<'a> {
    symbol: &'a str,
    price: f64,
    change_pct: f64,
    volume: f64,
    quote_volume: f64,
    trades: u64,
    volatility: f64,
    score: f64,
}

impl<'a> From<&'a Candidate> for Row<'a> {
    fn from(c: &'a Candidate) -> Self {
        Self {
            symbol: &c.symbol,
            price: c.last_price,
            change_pct: round(c.price_change_percent, 3),
            volume: round(c.volume, 2),
            quote_volume: round(c.quote_volume, 2),
            trades: c.trade_count,
            volatility: round(c.scores.volatility, 3),
            score: round(c.composite, 4),
        }
    }
}

fn round(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    (value * factor).round() / factor
}

/// Decision-maker that delegates the final pick to an LLM.
pub struct LlmDecisionMaker {
    llm: Arc<dyn Llm>,
    brief: Brief,
    picks: usize,
}

impl LlmDecisionMaker {
    #[must_use]
    pub fn new(llm: Arc<dyn Llm>, brief: Brief, picks: usize) -> Self {
        Self { llm, brief, picks }
    }

    fn build_prompt(&self, candidates: &[Candidate]) -> Result<Prompt> {
        let rows: Vec<Row<'_>> = candidates.iter().map(Row::from).collect();
        Ok(Prompt {
            system: self.brief.instructions(self.picks),
            user: serde_json::to_string(&rows)?,
        })
    }
}

#[async_trait]
impl DecisionMaker for LlmDecisionMaker {
    fn name(&self) -> &'static str {
        self.llm.name()
    }

    async fn decide(&self, candidates: &[Candidate]) -> Result<Vec<String>> {
        let prompt = self.build_prompt(candidates)?;
        let response = self.llm.complete(&prompt).await?;
        debug!(
            provider = self.llm.name(),
            candidates = candidates.len(),
            "LLM decision complete"
        );

        parse_reply(&response)
    }
}

/// Parse `{"chosen_coins": [...]}` or a bare list of symbols.
fn parse_reply(text: &str) -> Result<Vec<String>> {
    let json = extract_json(text)
        .ok_or_else(|| Error::DecisionProtocol("no JSON found in reply".into()))?;
    let value: Value = serde_json::from_str(json)
        .map_err(|e| Error::DecisionProtocol(format!("invalid JSON: {e}")))?;

    let list = match value {
        Value::Object(mut map) => map
            .remove("chosen_coins")
            .ok_or_else(|| Error::DecisionProtocol("reply has no chosen_coins".into()))?,
        other => other,
    };

    let Value::Array(items) = list else {
        return Err(Error::DecisionProtocol(format!(
            "chosen_coins is not a list: {list}"
        )));
    };

    items
        .into_iter()
        .map(|item| match item {
            Value::String(symbol) => Ok(symbol),
            other => Err(Error::DecisionProtocol(format!(
                "symbol is not a string: {other}"
            ))),
        })
        .collect()
}

/// Locate JSON in a markdown code block or raw text.
fn extract_json(text: &str) -> Option<&str> {
    if let Some(start) = text.find("```json") {
        let start = start + 7;
        let end = text[start..]
            .find("```")
            .map_or(text.len(), |i| start + i);
        return Some(text[start..end].trim());
    }

    let start = text.find(['{', '['])?;
    let close = if text[start..].starts_with('{') { '}' } else { ']' };
    let end = text.rfind(close).map_or(text.len(), |i| i + 1);
    (end > start).then(|| &text[start..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::domain::candidate;
    use crate::testkit::llm::ScriptedLlm;

    fn maker(reply: &str) -> (Arc<ScriptedLlm>, LlmDecisionMaker) {
        let llm = Arc::new(ScriptedLlm::new(reply));
        let maker = LlmDecisionMaker::new(llm.clone(), Brief::Scalping, 3);
        (llm, maker)
    }

    #[tokio::test]
    async fn parses_chosen_coins_object() {
        let (_, maker) = maker(r#"{"chosen_coins": ["AAA", "BBB", "CCC"]}"#);
        let picks = maker
            .decide(&[candidate("AAA", 3.0), candidate("BBB", 2.0), candidate("CCC", 1.0)])
            .await
            .unwrap();

        assert_eq!(picks, vec!["AAA", "BBB", "CCC"]);
    }

    #[tokio::test]
    async fn returns_short_reply_unchanged() {
        let (_, maker) = maker(r#"{"chosen_coins": ["AAA", "BBB"]}"#);
        let picks = maker.decide(&[candidate("AAA", 1.0)]).await.unwrap();

        assert_eq!(picks.len(), 2);
    }

    #[tokio::test]
    async fn prompt_lists_candidates_and_arity() {
        let (llm, maker) = maker(r#"{"chosen_coins": []}"#);
        maker.decide(&[candidate("ARB", 1.5)]).await.unwrap();

        let prompt = llm.last_prompt().unwrap();
        assert!(prompt.system.contains("exactly 3 coins"));
        assert!(prompt.system.contains("scalping"));
        let rows: Value = serde_json::from_str(&prompt.user).unwrap();
        assert_eq!(rows[0]["symbol"], "ARB");
        assert_eq!(rows[0]["score"], 1.5);
    }

    #[test]
    fn discovery_brief_mentions_exit_horizon() {
        let text = Brief::Discovery.instructions(3);
        assert!(text.contains("6 hours"));
    }

    #[test]
    fn accepts_fenced_and_bare_replies() {
        let fenced = "Here you go:\n```json\n{\"chosen_coins\": [\"A\", \"B\", \"C\"]}\n```";
        assert_eq!(parse_reply(fenced).unwrap(), vec!["A", "B", "C"]);

        let bare = "Picks: [\"A\", \"B\", \"C\"]";
        assert_eq!(parse_reply(bare).unwrap(), vec!["A", "B", "C"]);
    }

    #[test]
    fn rejects_non_list_replies() {
        assert!(matches!(
            parse_reply("I would pick AAA"),
            Err(Error::DecisionProtocol(_))
        ));
        assert!(matches!(
            parse_reply(r#"{"chosen_coins": "AAA, BBB, CCC"}"#),
            Err(Error::DecisionProtocol(_))
        ));
        assert!(matches!(
            parse_reply(r#"{"coins": ["AAA"]}"#),
            Err(Error::DecisionProtocol(_))
        ));
        assert!(matches!(
            parse_reply(r#"{"chosen_coins": ["AAA", 7]}"#),
            Err(Error::DecisionProtocol(_))
        ));
    }

    #[test]
    fn rounds_for_compact_table() {
        assert_eq!(round(1.234_567, 3), 1.235);
        assert_eq!(round(-0.000_04, 3), -0.0);
    }
}
