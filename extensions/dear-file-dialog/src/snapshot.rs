use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::fs::{FileSystem, FsEntry};

#[cfg(feature = "tracing")]
use tracing::{trace, warn};

/// One subdirectory captured at listing time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirEntry {
    /// Base name (no parent path).
    pub name: String,
    /// Full path.
    pub path: PathBuf,
    /// Last modified timestamp (when available).
    pub modified: Option<SystemTime>,
}

/// One file captured at listing time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileEntry {
    /// Base name (no parent path).
    pub name: String,
    /// Full path.
    pub path: PathBuf,
    /// Size in bytes.
    pub size: u64,
    /// Last modified timestamp (when available).
    pub modified: Option<SystemTime>,
    /// Extension including the leading dot (`".txt"`), empty when there is none.
    pub extension: String,
}

/// Point-in-time listing of a directory's immediate children, in enumeration order.
#[derive(Clone, Debug, Default)]
pub struct DirSnapshot {
    /// Subdirectories.
    pub directories: Vec<DirEntry>,
    /// Regular files (and anything else that is not a directory).
    pub files: Vec<FileEntry>,
}

impl DirSnapshot {
    /// Total number of entries.
    pub fn len(&self) -> usize {
        self.directories.len() + self.files.len()
    }

    /// Returns `true` when neither directories nor files were captured.
    pub fn is_empty(&self) -> bool {
        self.directories.is_empty() && self.files.is_empty()
    }
}

/// Result of the last snapshot refresh.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// No refresh has happened yet.
    Pending,
    /// The directory was listed.
    Loaded {
        /// Number of subdirectories captured.
        directories: usize,
        /// Number of files captured.
        files: usize,
    },
    /// The directory could not be read; the listing was left empty.
    Unreadable {
        /// Directory that failed to list.
        dir: PathBuf,
        /// I/O error kind.
        kind: std::io::ErrorKind,
        /// Human-readable error message.
        message: String,
    },
}

/// Extension of `name` from its last dot, dot included.
///
/// A trailing dot or a name without dots yields an empty string.
pub(crate) fn extension_of(name: &str) -> &str {
    match name.rfind('.') {
        Some(i) if i + 1 < name.len() => &name[i..],
        _ => "",
    }
}

/// Fills in a missing path or name; `None` when the entry has neither.
///
/// Whitespace-only names are real entries and are kept as they are.
fn sanitize_entry(mut entry: FsEntry, dir: &Path) -> Option<FsEntry> {
    if entry.path.as_os_str().is_empty() {
        if entry.name.is_empty() {
            return None;
        }
        entry.path = dir.join(&entry.name);
    }
    if entry.name.is_empty() {
        entry.name = entry
            .path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .filter(|n| !n.is_empty())?;
    }
    Some(entry)
}

fn split_entry(entry: FsEntry, dir: &Path, out: &mut DirSnapshot) {
    let Some(FsEntry {
        name,
        path,
        is_dir,
        size,
        modified,
    }) = sanitize_entry(entry, dir)
    else {
        return;
    };
    if is_dir {
        out.directories.push(DirEntry {
            name,
            path,
            modified,
        });
    } else {
        let extension = extension_of(&name).to_string();
        out.files.push(FileEntry {
            name,
            path,
            size,
            modified,
            extension,
        });
    }
}

/// Lists `dir` through `fs`, splitting entries into directories and files.
pub fn read_snapshot(fs: &dyn FileSystem, dir: &Path) -> std::io::Result<DirSnapshot> {
    let mut out = DirSnapshot::default();
    for entry in fs.read_dir(dir)? {
        split_entry(entry, dir, &mut out);
    }
    Ok(out)
}

/// Lists `dir`, degrading an unreadable directory to an empty snapshot.
pub(crate) fn load_snapshot(fs: &dyn FileSystem, dir: &Path) -> (DirSnapshot, RefreshOutcome) {
    match read_snapshot(fs, dir) {
        Ok(snapshot) => {
            let outcome = RefreshOutcome::Loaded {
                directories: snapshot.directories.len(),
                files: snapshot.files.len(),
            };
            trace_snapshot_loaded(dir, &snapshot);
            (snapshot, outcome)
        }
        Err(err) => {
            trace_snapshot_unreadable(dir, &err);
            (
                DirSnapshot::default(),
                RefreshOutcome::Unreadable {
                    dir: dir.to_path_buf(),
                    kind: err.kind(),
                    message: err.to_string(),
                },
            )
        }
    }
}

#[cfg(feature = "tracing")]
fn trace_snapshot_loaded(dir: &Path, snapshot: &DirSnapshot) {
    trace!(
        event = "snapshot.refreshed",
        cwd = %dir.display(),
        dirs = snapshot.directories.len(),
        files = snapshot.files.len(),
        "directory snapshot refreshed"
    );
}

#[cfg(not(feature = "tracing"))]
fn trace_snapshot_loaded(_dir: &Path, _snapshot: &DirSnapshot) {}

#[cfg(feature = "tracing")]
fn trace_snapshot_unreadable(dir: &Path, err: &std::io::Error) {
    warn!(
        event = "snapshot.unreadable",
        cwd = %dir.display(),
        error = %err,
        "directory could not be listed"
    );
}

#[cfg(not(feature = "tracing"))]
fn trace_snapshot_unreadable(_dir: &Path, _err: &std::io::Error) {}
