//! The blocking single-consumer handle.

use crate::cell::Cell;
use crate::shared::SharedFuture;
use handoff_core::{FutureStatus, HandoffError};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Blocking single-consumer handle for a one-shot channel.
///
/// [`get`](FutureValue::get) suspends the calling thread until the paired
/// [`Promise`](crate::Promise) settles the channel, then moves the result
/// out. The handle mirrors move-only "get once" semantics at runtime: a
/// second `get` fails with [`HandoffError::AlreadyRetrieved`].
///
/// For value-less event signaling use [`wait`](FutureValue::wait), and
/// for polling use [`wait_for`](FutureValue::wait_for), neither of which
/// consumes the result.
pub struct FutureValue<T, E> {
    cell: Arc<Cell<T, E>>,
}

impl<T, E> FutureValue<T, E> {
    pub(crate) fn new(cell: Arc<Cell<T, E>>) -> Self {
        Self { cell }
    }

    /// Block until the channel settles, then move the result out.
    ///
    /// Returns the stored value, re-raises the stored error as
    /// [`HandoffError::Failed`], or reports
    /// [`HandoffError::BrokenChannel`] if the promise was dropped
    /// unfulfilled.
    pub fn get(&mut self) -> Result<T, HandoffError<E>> {
        self.cell.take()
    }

    /// Block until the channel settles without consuming the result.
    pub fn wait(&self) {
        self.cell.wait_ready();
    }

    /// Block for at most `timeout` without consuming the result.
    ///
    /// Never errors; see [`FutureStatus`] for the polling outcomes.
    pub fn wait_for(&self, timeout: Duration) -> FutureStatus {
        self.cell.wait_for(timeout)
    }

    /// Non-blocking probe: true once `get` would not block.
    pub fn is_ready(&self) -> bool {
        self.cell.is_settled()
    }

    /// Convert into a cloneable multi-consumer handle.
    ///
    /// Consumes this handle, so conversion always happens before the
    /// first retrieval.
    pub fn share(self) -> SharedFuture<T, E> {
        SharedFuture::new(Arc::clone(&self.cell))
    }
}

impl<T, E> fmt::Debug for FutureValue<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FutureValue")
            .field("ready", &self.cell.is_settled())
            .finish()
    }
}
