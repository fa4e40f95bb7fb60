//! The cloneable multi-consumer handle.

use crate::cell::Cell;
use handoff_core::{FutureStatus, HandoffError};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Cloneable multi-consumer handle for a one-shot channel.
///
/// Created with [`FutureValue::share`](crate::FutureValue::share). Every
/// clone observes the same terminal state, and
/// [`get`](SharedFuture::get) is side-effect-free: it returns a copy of
/// the stored result and may be called any number of times from any
/// number of threads.
pub struct SharedFuture<T, E> {
    cell: Arc<Cell<T, E>>,
}

impl<T, E> SharedFuture<T, E> {
    pub(crate) fn new(cell: Arc<Cell<T, E>>) -> Self {
        Self { cell }
    }

    /// Block until the channel settles without consuming the result.
    pub fn wait(&self) {
        self.cell.wait_ready();
    }

    /// Block for at most `timeout` without consuming the result.
    pub fn wait_for(&self, timeout: Duration) -> FutureStatus {
        self.cell.wait_for(timeout)
    }

    /// Non-blocking probe: true once `get` would not block.
    pub fn is_ready(&self) -> bool {
        self.cell.is_settled()
    }
}

impl<T: Clone, E: Clone> SharedFuture<T, E> {
    /// Block until the channel settles, then return a copy of the result.
    pub fn get(&self) -> Result<T, HandoffError<E>> {
        self.cell.get_cloned()
    }
}

// A derived Clone would demand `T: Clone + E: Clone`; cloning the handle
// only clones the Arc.
impl<T, E> Clone for SharedFuture<T, E> {
    fn clone(&self) -> Self {
        Self {
            cell: Arc::clone(&self.cell),
        }
    }
}

impl<T, E> fmt::Debug for SharedFuture<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedFuture")
            .field("ready", &self.cell.is_settled())
            .finish()
    }
}
