//! Error types for asset synchronization.

use std::path::PathBuf;

/// Errors produced while copying an asset tree.
///
/// Every variant names the path that failed so a partial sync can be
/// diagnosed from the message alone.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("source is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("failed to walk {}: {source}", root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to copy {} to {}: {source}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
