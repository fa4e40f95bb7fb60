//! Readiness status for bounded, non-consuming waits.

/// Outcome of a `wait_for` call on a consumer handle.
///
/// A bounded wait never consumes the stored result and never errors, so
/// callers can poll a future repeatedly and only commit to a blocking
/// `get` once the channel is known to be settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FutureStatus {
    /// A value is stored; `get` will return it without blocking.
    Ready,

    /// The producer failed or was dropped; `get` will surface the error
    /// without blocking.
    Failed,

    /// The timeout elapsed with the channel still unsettled.
    TimedOut,
}

impl FutureStatus {
    /// True once the channel has settled, whatever the outcome.
    pub fn is_settled(&self) -> bool {
        !matches!(self, FutureStatus::TimedOut)
    }
}
