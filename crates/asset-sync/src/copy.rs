//! Extension-filtered recursive copy.
//!
//! Relative paths are preserved exactly: a file at `<source>/a/b.glsl` lands
//! at `<dest>/a/b.glsl`. Existing destination files are overwritten.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::SyncError;

/// A single copy of one source tree into one destination tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyTask {
    source_root: PathBuf,
    dest_root: PathBuf,
    extension_filter: Option<String>,
}

/// Counters for a completed copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyReport {
    /// Files written to a destination that did not exist yet.
    pub copied: usize,
    /// Files that overwrote an existing destination.
    pub replaced: usize,
}

/// Result of running a [`CopyTask`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The walk finished and every matching file was copied.
    Copied(CopyReport),
    /// The source root does not exist; nothing was touched.
    SourceMissing(PathBuf),
}

impl CopyReport {
    /// Total number of files written.
    pub fn total(&self) -> usize {
        self.copied + self.replaced
    }

    /// Adds another report's counters to this one.
    pub fn merge(&mut self, other: CopyReport) {
        self.copied += other.copied;
        self.replaced += other.replaced;
    }
}

impl CopyOutcome {
    pub fn report(&self) -> Option<CopyReport> {
        match self {
            Self::Copied(report) => Some(*report),
            Self::SourceMissing(_) => None,
        }
    }
}

impl CopyTask {
    /// Creates a task that copies every file under `source_root`.
    pub fn new(source_root: impl Into<PathBuf>, dest_root: impl Into<PathBuf>) -> Self {
        Self {
            source_root: source_root.into(),
            dest_root: dest_root.into(),
            extension_filter: None,
        }
    }

    /// Restricts the task to files whose extension equals `extension`
    /// (leading dot included, e.g. `".glsl"`).
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension_filter = Some(extension.into());
        self
    }

    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    pub fn dest_root(&self) -> &Path {
        &self.dest_root
    }

    pub fn extension_filter(&self) -> Option<&str> {
        self.extension_filter.as_deref()
    }

    /// Returns whether `path` passes this task's extension filter.
    pub fn accepts(&self, path: &Path) -> bool {
        match &self.extension_filter {
            Some(filter) => matches_extension(path, filter),
            None => true,
        }
    }

    /// Copies every accepted file into the destination tree.
    ///
    /// A missing source root is reported and leaves the destination
    /// untouched. Any I/O failure aborts the copy with the offending path;
    /// files copied before the failure stay in place.
    pub fn run(&self) -> Result<CopyOutcome, SyncError> {
        if !self.source_root.exists() {
            tracing::warn!(
                source = %self.source_root.display(),
                "source folder does not exist, skipping"
            );
            return Ok(CopyOutcome::SourceMissing(self.source_root.clone()));
        }
        if !self.source_root.is_dir() {
            return Err(SyncError::NotADirectory(self.source_root.clone()));
        }

        ensure_dir(&self.dest_root)?;

        let mut report = CopyReport::default();
        let walker = WalkDir::new(&self.source_root)
            .min_depth(1)
            .follow_links(false)
            .sort_by_file_name();

        for entry in walker {
            let entry = entry.map_err(|source| SyncError::Walk {
                root: self.source_root.clone(),
                source,
            })?;

            let path = entry.path();
            if !is_file_entry(&entry) {
                continue;
            }

            if !self.accepts(path) {
                tracing::debug!(file = %path.display(), "extension filtered out");
                continue;
            }

            // Entries are always yielded under the walk root.
            let Ok(relative) = path.strip_prefix(&self.source_root) else {
                continue;
            };
            let dest = self.dest_root.join(relative);

            if let Some(parent) = dest.parent() {
                ensure_dir(parent)?;
            }

            let replacing = dest.exists();
            std::fs::copy(path, &dest).map_err(|source| SyncError::Copy {
                from: path.to_path_buf(),
                to: dest.clone(),
                source,
            })?;

            if replacing {
                tracing::info!(file = %relative.display(), "replaced in destination folder");
                report.replaced += 1;
            } else {
                tracing::info!(file = %relative.display(), "copied to destination folder");
                report.copied += 1;
            }
        }

        Ok(CopyOutcome::Copied(report))
    }
}

/// Returns whether the file name of `path` ends in exactly `filter`.
///
/// The comparison is case-sensitive and the filter carries its leading dot.
/// Dot-files such as `.glsl` have no extension and never match.
pub fn matches_extension(path: &Path, filter: &str) -> bool {
    let Some(wanted) = filter.strip_prefix('.') else {
        return false;
    };
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == wanted)
}

/// Regular files and symlinks to files count; symlinked directories are
/// listed but not descended into. A dangling link is kept so the copy
/// reports it.
fn is_file_entry(entry: &walkdir::DirEntry) -> bool {
    let file_type = entry.file_type();
    if entry.path_is_symlink() {
        return std::fs::metadata(entry.path()).map_or(true, |meta| meta.is_file());
    }
    file_type.is_file()
}

fn ensure_dir(path: &Path) -> Result<(), SyncError> {
    if path.is_dir() {
        return Ok(());
    }
    std::fs::create_dir_all(path).map_err(|source| SyncError::CreateDir {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "created directory");
    Ok(())
}
