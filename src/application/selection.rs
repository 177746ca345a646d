//! Final selection through the external decision-maker.
//!
//! The decision-maker must answer with exactly `picks` symbols drawn from the
//! candidates it was shown. Anything else aborts the run; no symbol is ever
//! added, dropped or guessed on its behalf. A quiet market with no candidates
//! is not a failure: the decision-maker is skipped and the selection is empty.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::pipeline::Screening;
use crate::domain::candidate::{Candidate, Selection};
use crate::error::{Error, Result};
use crate::port::outbound::decision::DecisionMaker;

/// Which candidates are shown to the decision-maker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Payload {
    /// The top-K candidates.
    #[default]
    TopK,
    /// Every scored candidate.
    All,
}

/// Selection contract with the decision-maker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionPolicy {
    /// Number of symbols the reply must contain.
    pub picks: usize,
    pub payload: Payload,
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self {
            picks: 3,
            payload: Payload::TopK,
        }
    }
}

/// Hand the screened candidates to the decision-maker and validate its reply.
///
/// # Errors
///
/// Returns [`Error::DecisionProtocol`] when the reply breaks the contract, or
/// the decision-maker's own error. An empty payload never reaches the
/// decision-maker and yields an empty selection.
pub async fn select(
    screening: &Screening,
    decision_maker: &dyn DecisionMaker,
    policy: &SelectionPolicy,
) -> Result<Selection> {
    let payload = match policy.payload {
        Payload::TopK => &screening.top,
        Payload::All => &screening.ranked,
    };
    if payload.is_empty() {
        info!(
            decision_maker = decision_maker.name(),
            "No candidates, skipping the decision-maker"
        );
        return Ok(Selection {
            captured_at: screening.captured_at,
            top: Vec::new(),
            picks: Vec::new(),
            decided_by: decision_maker.name().to_string(),
        });
    }

    let reply = decision_maker.decide(payload).await?;
    let picks = validate_reply(&reply, payload, policy.picks).map_err(|err| {
        warn!(
            decision_maker = decision_maker.name(),
            reply = ?reply,
            error = %err,
            "Rejected decision-maker reply"
        );
        err
    })?;

    info!(
        decision_maker = decision_maker.name(),
        picks = ?picks,
        "Selection complete"
    );

    Ok(Selection {
        captured_at: screening.captured_at,
        top: screening.top.clone(),
        picks,
        decided_by: decision_maker.name().to_string(),
    })
}

/// Map each reply entry to a candidate's base symbol and enforce the contract.
///
/// Entries are trimmed and uppercased; a full pair symbol such as `ARBUSDT`
/// resolves to its base.
fn validate_reply(reply: &[String], payload: &[Candidate], picks: usize) -> Result<Vec<String>> {
    if reply.len() != picks {
        return Err(Error::DecisionProtocol(format!(
            "expected {picks} symbols, got {}",
            reply.len()
        )));
    }

    let mut seen = HashSet::new();
    reply
        .iter()
        .map(|entry| {
            let wanted = entry.trim().to_uppercase();
            let candidate = payload
                .iter()
                .find(|c| c.symbol == wanted || c.pair == wanted)
                .ok_or_else(|| {
                    Error::DecisionProtocol(format!("{entry:?} is not among the candidates"))
                })?;
            if !seen.insert(candidate.symbol.as_str()) {
                return Err(Error::DecisionProtocol(format!(
                    "{} chosen more than once",
                    candidate.symbol
                )));
            }
            Ok(candidate.symbol.clone())
        })
        .collect()
}
