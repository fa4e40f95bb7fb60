//! Error types for the one-shot channel and task primitives.
//!
//! Contract violations are raised at the violating call site and never
//! swallowed. The one exception is `Failed`: a producer-side error is
//! captured when the producer stores it and surfaced only when a consumer
//! retrieves the result, preserving causal attribution to the original
//! failure. Nothing here is retried automatically; retry policy belongs
//! to the caller.

use thiserror::Error;

/// All errors surfaced by the channel and task handles.
///
/// `E` is the producer's own error type, transported verbatim through the
/// channel. The remaining variants describe misuse of a handle's
/// single-shot contract or a producer that went away without answering.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HandoffError<E> {
    /// The cell already left the empty state; a promise fulfills or
    /// fails exactly once.
    #[error("promise already satisfied")]
    AlreadySatisfied,

    /// A previous `get` already moved the result out of this future.
    #[error("result already retrieved from this future")]
    AlreadyRetrieved,

    /// The task was already invoked; packaged tasks are single-shot.
    #[error("task already invoked")]
    AlreadyInvoked,

    /// The promise was dropped before fulfilling while the channel still
    /// had a consumer.
    #[error("promise dropped before fulfillment")]
    BrokenChannel,

    /// The producer (or the wrapped callable) reported an error of its
    /// own. Deferred: stored at production time, re-raised at retrieval.
    #[error("task failed: {0}")]
    Failed(E),
}

impl<E> HandoffError<E> {
    /// True for misuse of a single-shot contract (double fulfill, double
    /// get, double invoke).
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            HandoffError::AlreadySatisfied
                | HandoffError::AlreadyRetrieved
                | HandoffError::AlreadyInvoked
        )
    }

    /// True if the producer went away without fulfilling.
    pub fn is_broken(&self) -> bool {
        matches!(self, HandoffError::BrokenChannel)
    }

    /// Extract the transported producer error, if that is what this is.
    pub fn into_failure(self) -> Option<E> {
        match self {
            HandoffError::Failed(error) => Some(error),
            _ => None,
        }
    }
}
