//! Up-front sizing of a directory tree, used to give bounded trackers their totals.

use crate::Result;
use ohno::IntoAppError;
use std::path::Path;
use walkdir::WalkDir;

/// Log target for stats
const LOG_TARGET: &str = "     stats";

/// The number of regular files in a directory tree and their combined size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UploadStats {
    pub files: i64,
    pub bytes: i64,
}

/// Count the regular files under `directory` and sum their sizes.
///
/// Directories, symbolic links, and other special files are skipped; links are not followed.
///
/// # Errors
///
/// Returns the first error hit while walking the tree, such as an unreadable directory.
/// No partial totals are returned.
pub fn upload_stats(directory: impl AsRef<Path>) -> Result<UploadStats> {
    let directory = directory.as_ref();
    let mut stats = UploadStats::default();

    for_each_regular_file(directory, |_, len| {
        stats.files += 1;
        stats.bytes = stats.bytes.saturating_add(len);
    })?;

    log::debug!(
        target: LOG_TARGET,
        "Found {} files, {} bytes under '{}'",
        stats.files,
        stats.bytes,
        directory.display()
    );

    Ok(stats)
}

/// Call `f` with the path and size of every regular file under `directory`.
///
/// # Errors
///
/// Stops at, and returns, the first error hit while walking the tree.
pub fn for_each_regular_file(directory: &Path, mut f: impl FnMut(&Path, i64)) -> Result<()> {
    for entry in WalkDir::new(directory) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e.path().unwrap_or(directory).to_path_buf();
                return Err(e).into_app_err_with(|| format!("walking '{}'", path.display()));
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let metadata = entry
            .metadata()
            .into_app_err_with(|| format!("reading metadata of '{}'", entry.path().display()))?;

        f(entry.path(), i64::try_from(metadata.len()).unwrap_or(i64::MAX));
    }

    Ok(())
}
