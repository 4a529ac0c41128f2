//! Constructors that pick the right tracker for the current output.

use super::indicatif_surface::IndicatifSurface;
use super::{BoundedTracker, NO_TRACKER, NopTracker, PlainTracker, ProgressTrackerWithStatus, UnboundedTracker};
use crate::config::{ProgressConfig, ProgressMode};
use crate::stats::UploadStats;
use std::io::{IsTerminal, Stdout, stdout};
use tokio_util::sync::CancellationToken;

/// Log target for tracker selection
const LOG_TARGET: &str = "   factory";

/// A tracker that does nothing.
#[must_use]
pub const fn no_tracker() -> NopTracker {
    NO_TRACKER
}

/// A tracker that prints a line to stdout on every update and a summary on close.
#[must_use]
pub fn default_tracker() -> PlainTracker<Stdout> {
    PlainTracker::new()
}

/// Bars measured against totals known up front.
///
/// Falls back to [`default_tracker`] when stdout is not a terminal.
#[must_use]
pub fn bounded_tracker(cancel: CancellationToken, total_files: i64, total_bytes: i64) -> Box<dyn ProgressTrackerWithStatus> {
    bounded_tracker_with_config(&ProgressConfig::default(), cancel, total_files, total_bytes)
}

/// Bars for a transfer whose size is not known up front.
///
/// Falls back to [`default_tracker`] when stdout is not a terminal.
#[must_use]
pub fn unbounded_tracker(cancel: CancellationToken) -> Box<dyn ProgressTrackerWithStatus> {
    unbounded_tracker_with_config(&ProgressConfig::default(), cancel)
}

/// Pick a tracker according to `config`.
///
/// In [`ProgressMode::Auto`], bounded bars are used when `totals` is known and unbounded bars
/// otherwise, falling back to plain text when stdout is not a terminal.
#[must_use]
pub fn tracker_for(config: &ProgressConfig, cancel: CancellationToken, totals: Option<UploadStats>) -> Box<dyn ProgressTrackerWithStatus> {
    match (config.mode, totals) {
        (ProgressMode::None, _) => Box::new(no_tracker()),
        (ProgressMode::Plain, _) => Box::new(default_tracker()),
        (ProgressMode::Auto, Some(totals)) => bounded_tracker_with_config(config, cancel, totals.files, totals.bytes),
        (ProgressMode::Auto, None) => unbounded_tracker_with_config(config, cancel),
    }
}

fn bounded_tracker_with_config(
    config: &ProgressConfig,
    cancel: CancellationToken,
    total_files: i64,
    total_bytes: i64,
) -> Box<dyn ProgressTrackerWithStatus> {
    if !stdout_is_terminal() {
        return Box::new(default_tracker());
    }

    log::debug!(target: LOG_TARGET, "Showing bounded progress for {total_files} files, {total_bytes} bytes");
    Box::new(BoundedTracker::new(IndicatifSurface::new(config, cancel), total_files, total_bytes))
}

fn unbounded_tracker_with_config(config: &ProgressConfig, cancel: CancellationToken) -> Box<dyn ProgressTrackerWithStatus> {
    if !stdout_is_terminal() {
        return Box::new(default_tracker());
    }

    log::debug!(target: LOG_TARGET, "Showing unbounded progress");
    Box::new(UnboundedTracker::new(IndicatifSurface::new(config, cancel)))
}

fn stdout_is_terminal() -> bool {
    let is_terminal = stdout().is_terminal();
    if !is_terminal {
        log::debug!(target: LOG_TARGET, "Stdout is not a terminal, falling back to plain progress output");
    }
    is_terminal
}
