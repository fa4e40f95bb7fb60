//! Callable-wrapping task
//!
//! [`PackagedTask`] bundles a fallible callable with an internally owned
//! producer handle, decoupling "running work" from "knowing how to report
//! its outcome". The task can be handed to any execution context (a
//! thread, a pool, or an inline call) while the result is retrieved
//! independently through the paired consumer handle.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod packaged;

pub use packaged::PackagedTask;

pub use handoff_core::HandoffError;
