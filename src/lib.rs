//! # Handoff
//!
//! Blocking one-shot result channels and deadlock-safe locking
//! primitives for parallel worker threads.
//!
//! ## Quick Start
//!
//! ```
//! use handoff::prelude::*;
//! use std::thread;
//!
//! // A one-shot channel: one producer, one consumer.
//! let (promise, mut future) = handoff::channel::<i32, String>();
//!
//! let worker = thread::spawn(move || {
//!     promise.fulfill((1..=6).sum::<i32>()).unwrap();
//! });
//!
//! // Blocks until the worker fulfills, then moves the value out.
//! assert_eq!(future.get(), Ok(21));
//! worker.join().unwrap();
//! ```
//!
//! ## Primitives
//!
//! - [`channel`] — one-shot handoff: [`Promise`] (write-once producer),
//!   [`FutureValue`] (blocking consumer), [`SharedFuture`] (cloneable
//!   multi-consumer variant)
//! - [`PackagedTask`] — a single-shot invocable that routes its outcome
//!   (value or error) into a paired channel
//! - [`lock_both`] / [`lock_all`] — deadlock-avoiding acquisition of
//!   several mutexes in one atomic step
//! - [`RwCounter`] — shared-lock counter for many-readers workloads
//!
//! ## Error delivery
//!
//! Contract violations ([`HandoffError::AlreadySatisfied`],
//! [`HandoffError::AlreadyRetrieved`], [`HandoffError::AlreadyInvoked`])
//! surface at the violating call site. A producer-side error is
//! deferred: stored in the channel and re-raised when the consumer
//! retrieves it. A producer dropped before fulfilling leaves
//! [`HandoffError::BrokenChannel`] behind so waiters never hang.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod prelude;

// One-shot channel
pub use handoff_channel::{channel, FutureValue, Promise, SharedFuture};

// Shared vocabulary
pub use handoff_core::{FutureStatus, HandoffError};

// Locking utilities
pub use handoff_sync::{lock_all, lock_both, RwCounter};

// Callable-wrapping task
pub use handoff_task::PackagedTask;
