//! Single-shot invocable routing its outcome into a channel.

use handoff_channel::{channel, FutureValue, Promise};
use handoff_core::HandoffError;
use std::fmt;

/// A single-shot invocable that routes its outcome (value or error) into
/// a paired one-shot channel.
///
/// Invocation runs the wrapped callable. A normal return is passed to the
/// internal promise's `fulfill`; an error return is passed to `fail`. The
/// invoking context never observes the callable's error directly — it is
/// redirected into the channel and re-raised at retrieval.
///
/// Arguments are captured by the closure at construction time, Rust's
/// equivalent of binding arguments into the task up front.
///
/// Dropping a task that was never invoked drops the internal promise, so
/// the paired future unblocks with [`HandoffError::BrokenChannel`] rather
/// than hanging. A panicking callable propagates the panic to the
/// invoker; panics are not converted into `E`.
pub struct PackagedTask<T, E> {
    callable: Option<Box<dyn FnOnce() -> Result<T, E> + Send>>,
    promise: Promise<T, E>,
}

impl<T, E> PackagedTask<T, E> {
    /// Wrap `callable` and return the task with its paired future.
    pub fn new<F>(callable: F) -> (Self, FutureValue<T, E>)
    where
        F: FnOnce() -> Result<T, E> + Send + 'static,
    {
        let (promise, future) = channel();
        let task = Self {
            callable: Some(Box::new(callable)),
            promise,
        };
        (task, future)
    }

    /// Run the wrapped callable, routing its outcome into the channel.
    ///
    /// Tasks are single-shot: a second invocation fails with
    /// [`HandoffError::AlreadyInvoked`].
    pub fn invoke(&mut self) -> Result<(), HandoffError<E>> {
        let callable = match self.callable.take() {
            Some(callable) => callable,
            None => return Err(HandoffError::AlreadyInvoked),
        };
        tracing::trace!("packaged task invoked");
        // No cell lock is held across the callable.
        match callable() {
            Ok(value) => self.promise.fulfill(value),
            Err(error) => self.promise.fail(error),
        }
    }

    /// True once this task has been invoked.
    pub fn is_invoked(&self) -> bool {
        self.callable.is_none()
    }
}

impl<T, E> fmt::Debug for PackagedTask<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PackagedTask")
            .field("invoked", &self.is_invoked())
            .finish()
    }
}
