use super::Host;
use super::common::CommonArgs;
use crate::Result;
use crate::progress::format::format_bytes;
use crate::progress::{ProgressTrackerWithStatus, ProgressUpdate, tracker_for};
use crate::stats::{UploadStats, for_each_regular_file, upload_stats};
use camino::Utf8PathBuf;
use clap::Parser;
use core::time::Duration;
use ohno::{IntoAppError, bail};
use std::io::Write;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

/// Log target for the simulate command
const LOG_TARGET: &str = "  simulate";

#[derive(Parser, Debug)]
pub struct SimulateArgs {
    /// Directory whose files are fed through the tracker
    #[arg(value_name = "DIR")]
    pub directory: Utf8PathBuf,

    /// Number of concurrent workers reporting progress
    #[arg(long, short = 'w', default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..=256))]
    pub workers: u16,

    /// Measure the directory first and show progress against the known totals
    #[arg(long)]
    pub precompute: bool,

    /// Simulated time spent on each file, in milliseconds
    #[arg(long, value_name = "MS", default_value_t = 0)]
    pub delay_ms: u64,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Replay a directory tree through a progress tracker as if it were being uploaded.
///
/// Each file is reported as started and then finished by one of several concurrent workers.
/// No data is read or transferred. Ctrl-C stops the run early.
pub async fn simulate<H: Host>(host: &mut H, args: &SimulateArgs) -> Result<()> {
    let config = args.common.setup()?;

    let totals = if args.precompute { Some(upload_stats(&args.directory)?) } else { None };

    let mut files = Vec::new();
    for_each_regular_file(args.directory.as_std_path(), |_, len| files.push(len))?;
    let file_count = files.len();

    let cancel = CancellationToken::new();
    let interrupt = tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        }
    });

    let tracker: Arc<dyn ProgressTrackerWithStatus> = Arc::from(tracker_for(&config, cancel.clone(), totals));
    let queue = Arc::new(Mutex::new(files.into_iter()));
    let delay = Duration::from_millis(args.delay_ms);

    log::info!(target: LOG_TARGET, "Replaying {file_count} files with {} workers", args.workers);

    let workers: Vec<_> = (0..args.workers)
        .map(|_| {
            let queue = Arc::clone(&queue);
            let tracker = Arc::clone(&tracker);
            let cancel = cancel.clone();
            tokio::spawn(async move {
                let mut replayed = ProgressUpdate::default();
                while !cancel.is_cancelled() {
                    let Some(len) = queue.lock().await.next() else {
                        break;
                    };

                    tracker.update(&ProgressUpdate::started(len));
                    if !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }
                    let done = ProgressUpdate::finished(len);
                    tracker.update(&done);
                    replayed += done;
                }
                replayed
            })
        })
        .collect();

    let mut replayed = ProgressUpdate::default();
    for worker in workers {
        replayed += worker.await.into_app_err("simulation worker panicked")?;
    }
    interrupt.abort();

    tracker.close()?;

    report_outcome(host, totals, &replayed, file_count, &cancel)
}

/// Tell the user how the replay went.
///
/// Warns on stderr when the precomputed totals disagree with what was replayed, then fails if
/// the run was cancelled and prints the replayed totals otherwise.
fn report_outcome<H: Host>(
    host: &mut H,
    totals: Option<UploadStats>,
    replayed: &ProgressUpdate,
    file_count: usize,
    cancel: &CancellationToken,
) -> Result<()> {
    if let Some(totals) = totals
        && (totals.files != replayed.files_written || totals.bytes != replayed.bytes_written)
    {
        let _ = writeln!(
            host.error(),
            "warning: directory changed while replaying; measured {} files, {} but replayed {} files, {}",
            totals.files,
            format_bytes(totals.bytes),
            replayed.files_written,
            format_bytes(replayed.bytes_written)
        );
    }

    if cancel.is_cancelled() {
        bail!("cancelled after {} of {file_count} files", replayed.files_written);
    }

    let _ = writeln!(
        host.output(),
        "Replayed {} files, {}",
        replayed.files_written,
        format_bytes(replayed.bytes_written)
    );
    Ok(())
}
