//! Human-readable sizes, rates, and summary lines.

use super::ProgressUpdate;
use core::time::Duration;
use indicatif::BinaryBytes;

/// Elapsed times shorter than this are treated as zero when computing rates.
const MIN_RATE_SECONDS: f64 = 1e-9;

/// Format a byte count using binary (1024-based) units, e.g. `1.50KiB`.
#[must_use]
pub fn format_bytes(bytes: i64) -> String {
    let size = BinaryBytes(bytes.unsigned_abs()).to_string().replace(' ', "");
    if bytes < 0 { format!("-{size}") } else { size }
}

/// Format the average transfer rate of `bytes` over `elapsed`, e.g. `1.00KiB/s`.
///
/// A zero elapsed time yields a rate of zero.
#[must_use]
pub fn format_rate(bytes: i64, elapsed: Duration) -> String {
    format!("{}/s", format_bytes(per_second(bytes, elapsed)))
}

/// Average number of files per second over `elapsed`, rounded to the nearest integer.
#[must_use]
pub fn files_per_second(files: i64, elapsed: Duration) -> i64 {
    per_second(files, elapsed)
}

#[expect(clippy::cast_precision_loss, reason = "counters far below 2^52 in practice")]
#[expect(clippy::cast_possible_truncation, reason = "rate is bounded by the input count")]
fn per_second(count: i64, elapsed: Duration) -> i64 {
    let secs = elapsed.as_secs_f64();
    if secs < MIN_RATE_SECONDS {
        return 0;
    }

    (count as f64 / secs).round() as i64
}

/// Format a duration truncated to a tenth of a second, e.g. `4.2s`, `3m7.1s`, `1h2m3.0s`.
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    let tenths = elapsed.as_millis() / 100;
    let hours = tenths / 36_000;
    let minutes = (tenths / 600) % 60;
    let seconds = (tenths / 10) % 60;
    let fraction = tenths % 10;

    if hours > 0 {
        format!("{hours}h{minutes}m{seconds}.{fraction}s")
    } else if minutes > 0 {
        format!("{minutes}m{seconds}.{fraction}s")
    } else {
        format!("{seconds}.{fraction}s")
    }
}

/// The line printed once a tracker is closed.
#[must_use]
pub fn completion_message(progress: &ProgressUpdate, elapsed: Duration) -> String {
    format!(
        "Completed in {}: {}, {} files/s",
        format_elapsed(elapsed),
        format_rate(progress.bytes_written, elapsed),
        files_per_second(progress.files_written, elapsed),
    )
}

/// The line printed by the plain-text tracker after every update.
#[must_use]
pub fn status_line(progress: &ProgressUpdate) -> String {
    format!(
        "Complete: {:>8} files, {:<10} In Progress: {:>8} files, {:<10}",
        progress.files_written,
        format_bytes(progress.bytes_written),
        progress.files_pending,
        format_bytes(progress.bytes_pending),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes_zero() {
        assert_eq!(format_bytes(0), "0B");
    }

    #[test]
    fn test_format_bytes_small() {
        assert_eq!(format_bytes(1023), "1023B");
    }

    #[test]
    fn test_format_bytes_kibibyte() {
        assert_eq!(format_bytes(1024), "1.00KiB");
        assert_eq!(format_bytes(1536), "1.50KiB");
    }

    #[test]
    fn test_format_bytes_larger_units() {
        assert_eq!(format_bytes(5 * 1024 * 1024), "5.00MiB");
        assert_eq!(format_bytes(3 * 1024 * 1024 * 1024), "3.00GiB");
    }

    #[test]
    fn test_format_bytes_negative() {
        assert_eq!(format_bytes(-2048), "-2.00KiB");
    }

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(1024 * 10, Duration::from_secs(10)), "1.00KiB/s");
    }

    #[test]
    fn test_format_rate_rounds_before_formatting() {
        // 1000 bytes over 3 seconds is 333.33 B/s
        assert_eq!(format_rate(1000, Duration::from_secs(3)), "333B/s");
    }

    #[test]
    fn test_format_rate_zero_elapsed() {
        assert_eq!(format_rate(1 << 20, Duration::ZERO), "0B/s");
    }

    #[test]
    fn test_files_per_second() {
        assert_eq!(files_per_second(25, Duration::from_secs(10)), 3);
        assert_eq!(files_per_second(24, Duration::from_secs(10)), 2);
        assert_eq!(files_per_second(10, Duration::ZERO), 0);
    }

    #[test]
    fn test_format_elapsed_truncates_to_tenths() {
        assert_eq!(format_elapsed(Duration::from_millis(4_299)), "4.2s");
        assert_eq!(format_elapsed(Duration::ZERO), "0.0s");
    }

    #[test]
    fn test_format_elapsed_minutes_and_hours() {
        assert_eq!(format_elapsed(Duration::from_millis(187_100)), "3m7.1s");
        assert_eq!(format_elapsed(Duration::from_secs(3_723)), "1h2m3.0s");
    }

    #[test]
    fn test_completion_message() {
        let progress = ProgressUpdate {
            files_written: 20,
            bytes_written: 10 * 1024 * 1024,
            ..ProgressUpdate::default()
        };
        assert_eq!(
            completion_message(&progress, Duration::from_secs(10)),
            "Completed in 10.0s: 1.00MiB/s, 2 files/s"
        );
    }

    #[test]
    fn test_status_line_contains_all_counters() {
        let progress = ProgressUpdate {
            files_pending: 2,
            files_written: 5,
            bytes_pending: 2048,
            bytes_written: 1024,
        };
        let line = status_line(&progress);
        assert!(line.starts_with("Complete:"));
        assert!(line.contains("       5 files, 1.00KiB"));
        assert!(line.contains("In Progress:        2 files, 2.00KiB"));
    }
}
