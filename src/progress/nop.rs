use super::{ProgressTracker, ProgressTrackerWithStatus, ProgressUpdate};
use crate::Result;

/// A tracker that discards every update.
pub const NO_TRACKER: NopTracker = NopTracker;

/// Tracker used when progress reporting is disabled entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct NopTracker;

impl ProgressTracker for NopTracker {
    fn update(&self, _delta: &ProgressUpdate) {}

    fn close(&self) -> Result<()> {
        Ok(())
    }
}

impl ProgressTrackerWithStatus for NopTracker {
    fn status(&self) -> ProgressUpdate {
        ProgressUpdate::default()
    }
}
