use std::path::{Path, PathBuf};

/// Minimal metadata consulted when confirming a target path.
#[derive(Clone, Copy, Debug)]
pub struct FsMetadata {
    /// Whether the path refers to a directory.
    pub is_dir: bool,
    /// Whether the path refers to a regular file.
    pub is_file: bool,
}

/// Directory entry returned by [`FileSystem::read_dir`].
#[derive(Clone, Debug)]
pub struct FsEntry {
    /// Base name (no parent path)
    pub name: String,
    /// Full path
    pub path: PathBuf,
    /// Whether this entry is a directory.
    pub is_dir: bool,
    /// File size in bytes (`0` for directories or when unavailable).
    pub size: u64,
    /// Last modified timestamp (when available).
    pub modified: Option<std::time::SystemTime>,
}

/// Filesystem collaborator used by the dialog.
///
/// The dialog never writes; saving the chosen file is up to the caller.
pub trait FileSystem {
    /// List entries of a directory.
    fn read_dir(&self, dir: &Path) -> std::io::Result<Vec<FsEntry>>;
    /// Fetch minimal metadata for a path (following symlinks).
    fn metadata(&self, path: &Path) -> std::io::Result<FsMetadata>;

    /// Returns `true` if a regular file exists at `path`.
    fn is_file(&self, path: &Path) -> bool {
        self.metadata(path).map(|m| m.is_file).unwrap_or(false)
    }

    /// Returns `true` if a directory exists at `path`.
    fn is_dir(&self, path: &Path) -> bool {
        self.metadata(path).map(|m| m.is_dir).unwrap_or(false)
    }
}

/// Default filesystem implementation using `std::fs`.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn read_dir(&self, dir: &Path) -> std::io::Result<Vec<FsEntry>> {
        let mut out = Vec::new();
        for e in std::fs::read_dir(dir)? {
            let e = match e {
                Ok(v) => v,
                Err(_) => continue,
            };
            let name = e.file_name().to_string_lossy().to_string();
            let path = e.path();
            // Follow symlinks so a link to a directory lists as a directory.
            let meta = match std::fs::metadata(&path) {
                Ok(m) => m,
                Err(_) => match e.metadata() {
                    Ok(m) => m,
                    Err(_) => continue,
                },
            };
            let is_dir = meta.is_dir();
            out.push(FsEntry {
                name,
                path,
                is_dir,
                size: if is_dir { 0 } else { meta.len() },
                modified: meta.modified().ok(),
            });
        }
        Ok(out)
    }

    fn metadata(&self, path: &Path) -> std::io::Result<FsMetadata> {
        let md = std::fs::metadata(path)?;
        Ok(FsMetadata {
            is_dir: md.is_dir(),
            is_file: md.is_file(),
        })
    }
}
