//! Progress tracking for bulk file transfers
//!
//! Concurrent workers report [`progress::ProgressUpdate`] deltas to a shared tracker, which
//! keeps the running totals and shows them as text lines or live terminal bars. See the
//! [`progress`] module for the trackers and [`stats`] for sizing a transfer up front.

/// Result type alias using `ohno::AppError` as the default error type.
pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod config;

#[doc(hidden)]
pub mod commands;

pub mod progress;

pub mod stats;

pub use crate::commands::{Host, run};
