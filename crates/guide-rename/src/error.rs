//! Error types for the renamer

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using RenameError
pub type RenameResult<T> = std::result::Result<T, RenameError>;

/// Per-file failures are surfaced to the caller instead of being coerced
/// into a zero replacement count, so "no change needed" and "could not
/// read/write" stay distinguishable.
#[derive(Error, Debug)]
pub enum RenameError {
    #[error("failed to read {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk directory tree: {0}")]
    Walk(#[from] walkdir::Error),
}
