//! Blocking one-shot result channel
//!
//! A single-value handoff connecting exactly one producer to one or more
//! consumers:
//! - [`Promise`]: the write-once producer handle
//! - [`FutureValue`]: the blocking single-consumer handle
//! - [`SharedFuture`]: the cloneable multi-consumer handle
//!
//! # Design
//!
//! Both handles share one heap cell guarded by a `parking_lot::Mutex`
//! with a `Condvar` for wakeups. The cell transitions out of its empty
//! state exactly once (value, error, or broken), and that transition
//! happens-before every subsequent observation on any thread.
//!
//! Dropping a [`Promise`] that never fulfilled marks the channel broken
//! and wakes every waiter, so a consumer blocked in `get` is never left
//! hanging.
//!
//! # Example
//!
//! ```
//! use std::thread;
//!
//! let (promise, mut future) = handoff_channel::channel::<i32, String>();
//! let worker = thread::spawn(move || {
//!     promise.fulfill((1..=6).sum::<i32>()).unwrap();
//! });
//!
//! assert_eq!(future.get(), Ok(21));
//! worker.join().unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod cell;
mod future;
mod promise;
mod shared;

pub use future::FutureValue;
pub use promise::Promise;
pub use shared::SharedFuture;

// Re-export the shared vocabulary so channel users need only one import.
pub use handoff_core::{FutureStatus, HandoffError};

use cell::Cell;
use std::sync::Arc;

/// Create a connected producer/consumer pair over a fresh cell.
///
/// `T` is the value handed off; `E` is the producer's own error type,
/// transported verbatim to the consumer.
pub fn channel<T, E>() -> (Promise<T, E>, FutureValue<T, E>) {
    let cell = Arc::new(Cell::new());
    (Promise::new(Arc::clone(&cell)), FutureValue::new(cell))
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_impl_all;

    assert_impl_all!(Promise<i32, String>: Send, Sync);
    assert_impl_all!(FutureValue<i32, String>: Send, Sync);
    assert_impl_all!(SharedFuture<i32, String>: Send, Sync, Clone);

    #[test]
    fn fulfill_then_get() {
        let (promise, mut future) = channel::<i32, String>();
        promise.fulfill(42).unwrap();
        assert_eq!(future.get(), Ok(42));
    }

    #[test]
    fn fail_then_get() {
        let (promise, mut future) = channel::<i32, String>();
        promise.fail("x<0".to_string()).unwrap();
        assert_eq!(future.get(), Err(HandoffError::Failed("x<0".to_string())));
    }

    #[test]
    fn cross_thread_fulfillment() {
        let (promise, mut future) = channel::<Vec<u8>, String>();
        let worker = std::thread::spawn(move || {
            promise.fulfill(vec![1, 2, 3]).unwrap();
        });
        assert_eq!(future.get(), Ok(vec![1, 2, 3]));
        worker.join().unwrap();
    }
}
