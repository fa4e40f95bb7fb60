//! The write-once producer handle.

use crate::cell::{Cell, Slot};
use handoff_core::HandoffError;
use std::fmt;
use std::sync::Arc;

/// Write-once producer handle for a one-shot channel.
///
/// A promise stores exactly one outcome into its channel: a value via
/// [`fulfill`](Promise::fulfill) or an error via [`fail`](Promise::fail).
/// Whichever caller gets there first wins; every later attempt fails with
/// [`HandoffError::AlreadySatisfied`]. Both methods take `&self`, so a
/// promise can be raced from several threads without extra locking.
///
/// Dropping an unfulfilled promise marks the channel broken and wakes
/// every waiting consumer.
pub struct Promise<T, E> {
    cell: Arc<Cell<T, E>>,
}

impl<T, E> Promise<T, E> {
    pub(crate) fn new(cell: Arc<Cell<T, E>>) -> Self {
        Self { cell }
    }

    /// Store `value` and wake every waiting consumer.
    pub fn fulfill(&self, value: T) -> Result<(), HandoffError<E>> {
        self.cell.satisfy(Slot::Ready(value))
    }

    /// Store `error`; consumers observe it when they retrieve the result.
    pub fn fail(&self, error: E) -> Result<(), HandoffError<E>> {
        self.cell.satisfy(Slot::Failed(error))
    }

    /// True once this promise has fulfilled or failed.
    pub fn is_satisfied(&self) -> bool {
        self.cell.is_settled()
    }
}

impl<E> Promise<(), E> {
    /// Event signaling: fulfill with the unit value.
    ///
    /// Pairs with [`FutureValue::wait`](crate::FutureValue::wait) when
    /// the channel carries a notification rather than data.
    pub fn fulfill_void(&self) -> Result<(), HandoffError<E>> {
        self.fulfill(())
    }
}

impl<T, E> Drop for Promise<T, E> {
    fn drop(&mut self) {
        self.cell.break_if_empty();
    }
}

impl<T, E> fmt::Debug for Promise<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Promise")
            .field("satisfied", &self.cell.is_settled())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{channel, HandoffError};

    #[test]
    fn double_fulfill_fails() {
        let (promise, _future) = channel::<i32, String>();
        promise.fulfill(1).unwrap();
        assert_eq!(promise.fulfill(2), Err(HandoffError::AlreadySatisfied));
    }

    #[test]
    fn fail_after_fulfill_fails() {
        let (promise, _future) = channel::<i32, String>();
        promise.fulfill(1).unwrap();
        assert_eq!(
            promise.fail("late".to_string()),
            Err(HandoffError::AlreadySatisfied)
        );
    }

    #[test]
    fn fulfill_void_signals_an_event() {
        let (promise, mut future) = channel::<(), String>();
        assert!(!promise.is_satisfied());
        promise.fulfill_void().unwrap();
        assert!(promise.is_satisfied());
        assert_eq!(future.get(), Ok(()));
    }

    #[test]
    fn dropping_an_unfulfilled_promise_breaks_the_channel() {
        let (promise, mut future) = channel::<i32, String>();
        drop(promise);
        assert_eq!(future.get(), Err(HandoffError::BrokenChannel));
    }
}
