//! Convenient imports for Handoff.
//!
//! Re-exports the commonly used types so a single import gets you going:
//!
//! ```
//! use handoff::prelude::*;
//!
//! let (promise, mut future) = handoff::channel::<u32, String>();
//! promise.fulfill(7).unwrap();
//! assert_eq!(future.get(), Ok(7));
//! ```

// One-shot channel
pub use crate::{channel, FutureValue, Promise, SharedFuture};

// Status and errors
pub use crate::{FutureStatus, HandoffError};

// Locking utilities
pub use crate::{lock_all, lock_both, RwCounter};

// Callable-wrapping task
pub use crate::PackagedTask;
