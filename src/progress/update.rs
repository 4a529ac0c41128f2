use core::ops::AddAssign;

/// Counters describing the progress of a transfer.
///
/// When passed to [`ProgressTracker::update`](super::ProgressTracker::update) each field is a delta.
/// When returned from [`ProgressTrackerWithStatus::status`](super::ProgressTrackerWithStatus::status)
/// each field is the running total of all deltas seen so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ProgressUpdate {
    pub files_pending: i64,
    pub files_written: i64,
    pub bytes_pending: i64,
    pub bytes_written: i64,
}

impl ProgressUpdate {
    /// Delta for a single file of `bytes` bytes entering the in-flight set.
    #[must_use]
    pub const fn started(bytes: i64) -> Self {
        Self {
            files_pending: 1,
            files_written: 0,
            bytes_pending: bytes,
            bytes_written: 0,
        }
    }

    /// Delta for a single file of `bytes` bytes moving from in-flight to written.
    #[must_use]
    pub const fn finished(bytes: i64) -> Self {
        Self {
            files_pending: -1,
            files_written: 1,
            bytes_pending: -bytes,
            bytes_written: bytes,
        }
    }

    /// Add each counter of `delta` into `self`.
    pub const fn merge(&mut self, delta: &Self) {
        self.files_pending += delta.files_pending;
        self.files_written += delta.files_written;
        self.bytes_pending += delta.bytes_pending;
        self.bytes_written += delta.bytes_written;
    }

    /// Returns `true` if every counter is zero.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.files_pending == 0 && self.files_written == 0 && self.bytes_pending == 0 && self.bytes_written == 0
    }
}

impl AddAssign<&Self> for ProgressUpdate {
    fn add_assign(&mut self, rhs: &Self) {
        self.merge(rhs);
    }
}

impl AddAssign for ProgressUpdate {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
