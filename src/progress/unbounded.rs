use super::bar::{BarCore, position};
use super::surface::{BarKind, BarSpec, BarUnit, RenderSurface, SurfaceBar};
use super::{ProgressTracker, ProgressTrackerWithStatus, ProgressUpdate};
use crate::Result;
use core::fmt::{Debug, Formatter};
use std::io::{Stdout, Write, stdout};

/// Shows file and byte bars for a transfer whose size is not known up front.
///
/// The length of each bar is re-estimated on every update as `written + pending + 1`. A bar whose
/// position reaches its length counts as finished and stops animating, so the length is kept one
/// ahead of the position until [`close`](ProgressTracker::close) sets it to the real value.
/// Only counts are displayed, never the estimated length.
pub struct UnboundedTracker<S: RenderSurface, W: Write + Send = Stdout> {
    core: BarCore<S, W>,
}

impl<S: RenderSurface> UnboundedTracker<S, Stdout> {
    /// Create a tracker drawing on `surface` and printing its summary to stdout.
    #[must_use]
    pub fn new(surface: S) -> Self {
        Self::with_writer(surface, stdout())
    }
}

impl<S: RenderSurface, W: Write + Send> UnboundedTracker<S, W> {
    /// Create a tracker drawing on `surface` and printing its summary to `out`.
    #[must_use]
    pub fn with_writer(surface: S, out: W) -> Self {
        let core = BarCore::new(
            surface,
            out,
            BarSpec {
                label: "Files: ",
                total: 1,
                kind: BarKind::Unbounded,
                unit: BarUnit::Count,
            },
            BarSpec {
                label: "Bytes: ",
                total: 1,
                kind: BarKind::Unbounded,
                unit: BarUnit::Bytes,
            },
        );

        Self { core }
    }
}

/// Length of a bar whose work is `written` done and `pending` in flight.
fn estimated_total(written: u64, pending: i64) -> u64 {
    written.saturating_add(position(pending)).saturating_add(1)
}

impl<S: RenderSurface, W: Write + Send> ProgressTracker for UnboundedTracker<S, W> {
    fn update(&self, delta: &ProgressUpdate) {
        let mut state = self.core.lock();
        state.progress.merge(delta);

        let files = position(state.progress.files_written);
        let bytes = position(state.progress.bytes_written);

        // Grow the length before moving the position so the bar never looks finished.
        state.files.set_total(estimated_total(files, state.progress.files_pending));
        state.files.set_current(files);
        state.bytes.set_total(estimated_total(bytes, state.progress.bytes_pending));
        state.bytes.set_current(bytes);
        state.annotate_pending();
    }

    fn close(&self) -> Result<()> {
        self.core.close()
    }
}

impl<S: RenderSurface, W: Write + Send> ProgressTrackerWithStatus for UnboundedTracker<S, W> {
    fn status(&self) -> ProgressUpdate {
        self.core.status()
    }
}

impl<S: RenderSurface, W: Write + Send> Debug for UnboundedTracker<S, W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("UnboundedTracker")
            .field("start", &self.core.start)
            .finish_non_exhaustive()
    }
}
