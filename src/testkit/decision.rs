//! Decision-maker with a canned reply.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::candidate::Candidate;
use crate::error::Result;
use crate::port::outbound::decision::DecisionMaker;

/// Always answers with the same symbols.
pub struct FixedDecisionMaker {
    reply: Vec<String>,
    calls: AtomicUsize,
    seen: AtomicUsize,
}

impl FixedDecisionMaker {
    pub fn new<I, S>(reply: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            reply: reply.into_iter().map(Into::into).collect(),
            calls: AtomicUsize::new(0),
            seen: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Number of candidates shown on the last call.
    pub fn seen(&self) -> usize {
        self.seen.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DecisionMaker for FixedDecisionMaker {
    fn name(&self) -> &'static str {
        "fixed"
    }

    async fn decide(&self, candidates: &[Candidate]) -> Result<Vec<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.store(candidates.len(), Ordering::SeqCst);
        Ok(self.reply.clone())
    }
}
