use super::bar::{BarCore, LOG_TARGET, position};
use super::surface::{BarKind, BarSpec, BarUnit, RenderSurface, SurfaceBar};
use super::{ProgressTracker, ProgressTrackerWithStatus, ProgressUpdate};
use crate::Result;
use core::fmt::{Debug, Formatter};
use core::sync::atomic::{AtomicBool, Ordering};
use std::io::{Stdout, Write, stdout};

/// Shows file and byte bars against totals that are known before the transfer starts.
///
/// Bar positions never exceed the totals given at construction. If more work arrives than was
/// announced, the bars stay full while [`status`](ProgressTrackerWithStatus::status) keeps
/// reporting the real counts.
pub struct BoundedTracker<S: RenderSurface, W: Write + Send = Stdout> {
    core: BarCore<S, W>,
    total_files: u64,
    total_bytes: u64,
    overshoot_reported: AtomicBool,
}

impl<S: RenderSurface> BoundedTracker<S, Stdout> {
    /// Create a tracker drawing on `surface` and printing its summary to stdout.
    #[must_use]
    pub fn new(surface: S, total_files: i64, total_bytes: i64) -> Self {
        Self::with_writer(surface, stdout(), total_files, total_bytes)
    }
}

impl<S: RenderSurface, W: Write + Send> BoundedTracker<S, W> {
    /// Create a tracker drawing on `surface` and printing its summary to `out`.
    #[must_use]
    pub fn with_writer(surface: S, out: W, total_files: i64, total_bytes: i64) -> Self {
        let total_files = position(total_files);
        let total_bytes = position(total_bytes);

        let core = BarCore::new(
            surface,
            out,
            BarSpec {
                label: "Files: ",
                total: total_files,
                kind: BarKind::Bounded,
                unit: BarUnit::Count,
            },
            BarSpec {
                label: "Bytes: ",
                total: total_bytes,
                kind: BarKind::Bounded,
                unit: BarUnit::Bytes,
            },
        );

        Self {
            core,
            total_files,
            total_bytes,
            overshoot_reported: AtomicBool::new(false),
        }
    }
}

impl<S: RenderSurface, W: Write + Send> ProgressTracker for BoundedTracker<S, W> {
    fn update(&self, delta: &ProgressUpdate) {
        let mut state = self.core.lock();
        state.progress.merge(delta);

        let files = position(state.progress.files_written);
        let bytes = position(state.progress.bytes_written);
        if (files > self.total_files || bytes > self.total_bytes) && !self.overshoot_reported.swap(true, Ordering::Relaxed) {
            log::warn!(
                target: LOG_TARGET,
                "Transfer exceeded its precomputed size of {} files, {} bytes",
                self.total_files,
                self.total_bytes
            );
        }

        state.files.set_current(files.min(self.total_files));
        state.bytes.set_current(bytes.min(self.total_bytes));
        state.annotate_pending();
    }

    fn close(&self) -> Result<()> {
        self.core.close()
    }
}

impl<S: RenderSurface, W: Write + Send> ProgressTrackerWithStatus for BoundedTracker<S, W> {
    fn status(&self) -> ProgressUpdate {
        self.core.status()
    }
}

impl<S: RenderSurface, W: Write + Send> Debug for BoundedTracker<S, W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BoundedTracker")
            .field("start", &self.core.start)
            .field("total_files", &self.total_files)
            .field("total_bytes", &self.total_bytes)
            .finish_non_exhaustive()
    }
}
