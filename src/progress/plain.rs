use super::format::{completion_message, status_line};
use super::{ProgressTracker, ProgressTrackerWithStatus, ProgressUpdate};
use crate::Result;
use ohno::IntoAppError;
use std::io::{Stdout, Write, stdout};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Instant;

/// Log target for the plain-text tracker
const LOG_TARGET: &str = "     plain";

/// Prints a line on every update and a summary on close.
///
/// Intended for output that is piped or logged rather than shown on an interactive terminal.
#[derive(Debug)]
pub struct PlainTracker<W: Write + Send = Stdout> {
    start: Instant,
    state: Mutex<PlainState<W>>,
}

#[derive(Debug)]
struct PlainState<W> {
    progress: ProgressUpdate,
    out: W,
    closed: bool,
}

impl PlainTracker<Stdout> {
    /// Create a tracker that prints to stdout.
    #[must_use]
    pub fn new() -> Self {
        Self::with_writer(stdout())
    }
}

impl Default for PlainTracker<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write + Send> PlainTracker<W> {
    /// Create a tracker that prints to `out`.
    #[must_use]
    pub fn with_writer(out: W) -> Self {
        Self {
            start: Instant::now(),
            state: Mutex::new(PlainState {
                progress: ProgressUpdate::default(),
                out,
                closed: false,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, PlainState<W>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> ProgressTracker for PlainTracker<W> {
    fn update(&self, delta: &ProgressUpdate) {
        let mut state = self.lock();
        state.progress.merge(delta);

        let line = status_line(&state.progress);
        if let Err(e) = writeln!(state.out, "{line}") {
            log::warn!(target: LOG_TARGET, "Could not write progress line: {e}");
        }
    }

    fn close(&self) -> Result<()> {
        let mut state = self.lock();
        if state.closed {
            log::debug!(target: LOG_TARGET, "Tracker already closed");
            return Ok(());
        }
        state.closed = true;

        let message = completion_message(&state.progress, self.start.elapsed());
        writeln!(state.out, "{message}").into_app_err("writing completion message")?;
        state.out.flush().into_app_err("flushing progress output")
    }
}

impl<W: Write + Send> ProgressTrackerWithStatus for PlainTracker<W> {
    fn status(&self) -> ProgressUpdate {
        self.lock().progress
    }
}
