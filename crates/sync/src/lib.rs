//! Locking utilities for the handoff workspace
//!
//! - [`lock_both`] / [`lock_all`]: deadlock-avoiding acquisition of
//!   several mutexes in one atomic multi-lock step
//! - [`RwCounter`]: a shared-lock protected counter for many-readers,
//!   few-writers workloads
//!
//! All acquisition is scoped: guards release on drop, and no manual
//! lock/unlock pairing is exposed anywhere in the API.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod counter;
pub mod ordered;

pub use counter::RwCounter;
pub use ordered::{lock_all, lock_both};
