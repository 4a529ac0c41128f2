//! Progress tracking for bulk file transfers
//!
//! Workers performing a transfer report [`ProgressUpdate`] deltas to a shared tracker, which
//! merges them into running totals and displays them.
//!
//! # Implementation Model
//!
//! Every tracker implements [`ProgressTracker`], and all but the no-op one also implement
//! [`ProgressTrackerWithStatus`]:
//!
//! - [`NopTracker`]: discards everything
//! - [`PlainTracker`]: prints one line per update, for piped or logged output
//! - [`BoundedTracker`]: file and byte bars measured against totals computed up front
//! - [`UnboundedTracker`]: file and byte bars for a transfer of unknown size
//!
//! Each tracker owns its totals and rendering state behind a single mutex. An update merges the
//! delta and redraws while holding the lock, so concurrent updates never tear, and readers only
//! ever receive copies of the totals.
//!
//! Bar trackers draw through the [`RenderSurface`] trait. [`IndicatifSurface`] implements it with
//! `indicatif`; tests use a recording fake.
//!
//! The [`factory`] functions choose a tracker, falling back to plain text when stdout is not an
//! interactive terminal.

mod bar;
mod bounded;
pub mod factory;
pub mod format;
mod indicatif_surface;
mod nop;
mod plain;
pub mod surface;
#[cfg(test)]
pub(crate) mod testing;
mod tracker;
mod unbounded;
mod update;

pub use bounded::BoundedTracker;
pub use factory::{bounded_tracker, default_tracker, no_tracker, tracker_for, unbounded_tracker};
pub use indicatif_surface::{IndicatifBar, IndicatifSurface};
pub use nop::{NO_TRACKER, NopTracker};
pub use plain::PlainTracker;
pub use surface::{BarKind, BarSpec, BarUnit, RenderSurface, SurfaceBar};
pub use tracker::{ProgressTracker, ProgressTrackerWithStatus};
pub use unbounded::UnboundedTracker;
pub use update::ProgressUpdate;
