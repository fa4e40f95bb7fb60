//! Core types for the handoff workspace
//!
//! This crate defines the error and status vocabulary shared by the
//! channel, task, and facade crates:
//! - HandoffError: contract violations and transported producer errors
//! - FutureStatus: the non-consuming outcome of a bounded wait

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod status;

pub use error::HandoffError;
pub use status::FutureStatus;
