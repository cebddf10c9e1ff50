// Progress Indicator - platform/fs.rs
//
// Filesystem helpers: making the watched path safe to open, and reading it.

use crate::core::model::FileState;
use crate::util::error::{Result, WatchError};
use std::io;
use std::path::Path;

/// Make sure `path` can be opened for reading before watching begins.
///
/// Creates missing parent directories (a failure there is logged and
/// ignored; the file check below decides whether we can go on), then creates
/// the file empty if it is absent. Existing files are never read or touched.
///
/// Safe to call repeatedly: a second call reports `FileState::Existing`.
pub fn ensure_path(path: &Path) -> Result<FileState> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(source) = std::fs::create_dir_all(parent) {
            let err = WatchError::DirectoryCreateFailed {
                path: parent.to_path_buf(),
                source,
            };
            tracing::warn!(error = %err, "Continuing without parent directory");
        }
    }

    // create_new makes check-and-create a single step, so a producer that
    // creates the file at the same moment is reported as Existing.
    match std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
    {
        Ok(_) => {
            tracing::info!(path = %path.display(), "Created empty status file");
            Ok(FileState::Created)
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            tracing::debug!(path = %path.display(), "Status file already exists");
            Ok(FileState::Existing)
        }
        Err(source) => Err(WatchError::FileCreateFailed {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Read the full content of a file as UTF-8 text.
///
/// Invalid UTF-8 (including a multi-byte character cut in half by a producer
/// mid-write) fails with `io::ErrorKind::InvalidData`, like any other read error.
pub fn read_file_text(path: &Path) -> io::Result<String> {
    std::fs::read_to_string(path)
}
