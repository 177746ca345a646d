//! Decision-maker contract configuration.

use serde::{Deserialize, Serialize};

use crate::application::selection::{Payload, SelectionPolicy};

/// Decision settings (`[decision]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionConfig {
    /// Exact number of symbols the decision-maker must return.
    #[serde(default = "default_picks")]
    pub picks: usize,

    /// Candidates shown to the decision-maker: `top_k` or `all`.
    #[serde(default)]
    pub payload: Payload,
}

impl DecisionConfig {
    #[must_use]
    pub const fn policy(&self) -> SelectionPolicy {
        SelectionPolicy {
            picks: self.picks,
            payload: self.payload,
        }
    }
}

const fn default_picks() -> usize {
    3
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            picks: default_picks(),
            payload: Payload::default(),
        }
    }
}
