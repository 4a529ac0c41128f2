use super::ProgressUpdate;
use crate::Result;

/// Tracks the status of a transfer operation.
///
/// Implementations are shared between the worker threads performing the transfer, so every
/// method takes `&self` and is safe to call concurrently. `close` should only be called once
/// every producer has finished calling `update`.
pub trait ProgressTracker: Send + Sync {
    /// Merge a delta into the running totals and reflect it in the display.
    fn update(&self, delta: &ProgressUpdate);

    /// Finish the display and print a summary of the operation.
    ///
    /// Calling `close` more than once is harmless: only the first call prints anything.
    fn close(&self) -> Result<()>;
}

/// A [`ProgressTracker`] that also exposes the current totals.
pub trait ProgressTrackerWithStatus: ProgressTracker {
    /// A point-in-time copy of the running totals.
    fn status(&self) -> ProgressUpdate;
}
