//! [`RenderSurface`] backed by `indicatif`.

use super::surface::{BarKind, BarSpec, BarUnit, RenderSurface, SurfaceBar};
use crate::config::ProgressConfig;
use core::fmt::{Debug, Formatter};
use core::time::Duration;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::{Write, stdout};
use tokio_util::sync::CancellationToken;

/// Log target for the indicatif surface
const LOG_TARGET: &str = " indicatif";

/// Spinner animation; the last frame is shown once a bar is complete.
const TICK_STRINGS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "✔"];

const SPINNER_INTERVAL: Duration = Duration::from_millis(100);

/// Draws bars on stdout.
///
/// Once `cancel` fires the bars are hidden and left as they are; trackers may keep updating them
/// but nothing more reaches the terminal.
pub struct IndicatifSurface {
    multi: MultiProgress,
    bars: Vec<ProgressBar>,
    bar_width: u16,
    cancel: CancellationToken,
}

impl IndicatifSurface {
    #[must_use]
    pub fn new(config: &ProgressConfig, cancel: CancellationToken) -> Self {
        Self {
            multi: MultiProgress::with_draw_target(ProgressDrawTarget::stdout_with_hz(config.refresh_hz)),
            bars: Vec::new(),
            bar_width: config.bounded_bar_width,
            cancel,
        }
    }

    fn template(&self, spec: &BarSpec) -> String {
        let (pos, len) = match spec.unit {
            BarUnit::Count => ("{pos:<10}", "{len:>10}"),
            BarUnit::Bytes => ("{binary_bytes:<10}", "{binary_total_bytes:>10}"),
        };

        match spec.kind {
            BarKind::Bounded => format!("{{prefix}}{pos} / {len} [{{bar:{}}}] {{percent:>3}}% {{msg}} {{spinner}}", self.bar_width),
            BarKind::Unbounded => format!("{{prefix}}{pos} {{msg}} {{spinner}}"),
        }
    }
}

impl RenderSurface for IndicatifSurface {
    type Bar = IndicatifBar;

    fn add_bar(&mut self, spec: BarSpec) -> Self::Bar {
        let style = ProgressStyle::with_template(&self.template(&spec))
            .unwrap_or_else(|e| {
                log::warn!(target: LOG_TARGET, "Invalid bar template: {e}");
                ProgressStyle::default_bar()
            })
            .tick_strings(TICK_STRINGS)
            .progress_chars("=> ");

        let bar = self.multi.add(ProgressBar::new(spec.total));
        bar.set_style(style);
        bar.set_prefix(spec.label);
        bar.enable_steady_tick(SPINNER_INTERVAL);
        self.bars.push(bar.clone());

        IndicatifBar {
            bar,
            multi: self.multi.clone(),
            cancel: self.cancel.clone(),
        }
    }

    fn wait(&mut self) {
        // Dropping each ticker joins its animation thread.
        for bar in &self.bars {
            bar.disable_steady_tick();
        }

        if let Err(e) = stdout().flush() {
            log::warn!(target: LOG_TARGET, "Could not flush stdout: {e}");
        }
    }
}

impl Debug for IndicatifSurface {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("IndicatifSurface")
            .field("bars", &self.bars.len())
            .field("bar_width", &self.bar_width)
            .field("cancelled", &self.cancel.is_cancelled())
            .finish()
    }
}

/// A bar on an [`IndicatifSurface`].
#[derive(Debug)]
pub struct IndicatifBar {
    bar: ProgressBar,
    multi: MultiProgress,
    cancel: CancellationToken,
}

impl IndicatifBar {
    /// Hide the whole surface once cancellation has been requested.
    fn hide_if_cancelled(&self) {
        if self.cancel.is_cancelled() && !self.multi.is_hidden() {
            log::debug!(target: LOG_TARGET, "Rendering cancelled, hiding progress bars");
            self.multi.set_draw_target(ProgressDrawTarget::hidden());
        }
    }
}

impl SurfaceBar for IndicatifBar {
    fn set_current(&self, current: u64) {
        self.hide_if_cancelled();
        self.bar.set_position(current);
    }

    fn current(&self) -> u64 {
        self.bar.position()
    }

    fn set_total(&self, total: u64) {
        self.hide_if_cancelled();
        self.bar.set_length(total);
    }

    fn total(&self) -> u64 {
        self.bar.length().unwrap_or_default()
    }

    fn set_annotation(&self, annotation: &str) {
        self.hide_if_cancelled();
        self.bar.set_message(annotation.to_owned());
    }

    fn complete(&self) {
        self.hide_if_cancelled();
        if self.cancel.is_cancelled() {
            self.bar.abandon();
        } else {
            self.bar.finish();
        }
    }
}
