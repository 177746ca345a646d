//! Decision-maker port.
//!
//! The decision-maker is an external reasoning system that makes the final
//! pick from the ranked candidates. The screening core never depends on how
//! it reasons; it only validates what comes back.

use async_trait::async_trait;

use crate::domain::candidate::Candidate;
use crate::error::Result;

/// Chooses the final symbols from a ranked candidate set.
#[async_trait]
pub trait DecisionMaker: Send + Sync {
    /// Name for logging and for the resulting selection.
    fn name(&self) -> &'static str;

    /// Return the chosen base symbols.
    ///
    /// The caller validates arity and membership; implementations should
    /// return the reply as received rather than padding or truncating it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DecisionProtocol`](crate::error::Error::DecisionProtocol)
    /// when the reply is not a list of symbols, or a transport error.
    async fn decide(&self, candidates: &[Candidate]) -> Result<Vec<String>>;
}
