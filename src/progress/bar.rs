//! State shared by the bounded and unbounded bar trackers.

use super::format::{completion_message, format_bytes};
use super::surface::{BarSpec, RenderSurface, SurfaceBar};
use super::ProgressUpdate;
use crate::Result;
use ohno::IntoAppError;
use std::io::Write;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Instant;

/// Log target for the bar trackers
pub(super) const LOG_TARGET: &str = "      bars";

/// A snapshot plus the two bars that display it, behind a single lock.
pub(super) struct BarCore<S: RenderSurface, W> {
    pub start: Instant,
    state: Mutex<BarState<S, W>>,
}

pub(super) struct BarState<S: RenderSurface, W> {
    pub progress: ProgressUpdate,
    pub files: S::Bar,
    pub bytes: S::Bar,
    surface: S,
    out: W,
    closed: bool,
}

impl<S: RenderSurface, W: Write + Send> BarCore<S, W> {
    pub fn new(mut surface: S, out: W, files: BarSpec, bytes: BarSpec) -> Self {
        let files = surface.add_bar(files);
        let bytes = surface.add_bar(bytes);

        Self {
            start: Instant::now(),
            state: Mutex::new(BarState {
                progress: ProgressUpdate::default(),
                files,
                bytes,
                surface,
                out,
                closed: false,
            }),
        }
    }

    pub fn lock(&self) -> MutexGuard<'_, BarState<S, W>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn status(&self) -> ProgressUpdate {
        self.lock().progress
    }

    /// Pin each bar's total to its position, mark the bars done, wait for the display to settle,
    /// and print the summary.
    pub fn close(&self) -> Result<()> {
        let mut state = self.lock();
        if state.closed {
            log::debug!(target: LOG_TARGET, "Tracker already closed");
            return Ok(());
        }
        state.closed = true;

        for bar in [&state.files, &state.bytes] {
            bar.set_total(bar.current());
            bar.complete();
        }
        state.surface.wait();

        let message = completion_message(&state.progress, self.start.elapsed());
        log::debug!(target: LOG_TARGET, "Closing bar tracker with totals {:?}", state.progress);

        writeln!(state.out, "{message}").into_app_err("writing completion message")?;
        state.out.flush().into_app_err("flushing progress output")
    }
}

impl<S: RenderSurface, W> BarState<S, W> {
    /// Refresh the "in progress" text next to each bar.
    pub fn annotate_pending(&self) {
        self.files.set_annotation(&files_in_progress(self.progress.files_pending));
        self.bytes.set_annotation(&bytes_in_progress(self.progress.bytes_pending));
    }
}

/// Convert a running counter to a bar position. Negative totals display as zero.
pub(super) fn position(counter: i64) -> u64 {
    u64::try_from(counter).unwrap_or(0)
}

fn files_in_progress(pending: i64) -> String {
    if pending == 0 {
        String::new()
    } else {
        format!("{pending} in progress")
    }
}

fn bytes_in_progress(pending: i64) -> String {
    if pending == 0 {
        String::new()
    } else {
        format!("{} in progress", format_bytes(pending))
    }
}
