use std::path::Path;

use crate::snapshot::{DirEntry, FileEntry};

/// What a listed row stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowKind<'a> {
    /// Synthetic `..` entry leading to the parent directory.
    Parent,
    /// A subdirectory.
    Directory(&'a DirEntry),
    /// A file.
    File(&'a FileEntry),
}

/// One row of the file list with its position in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Row<'a> {
    /// Position in display order, starting at 0.
    pub index: usize,
    /// Entry behind the row.
    pub kind: RowKind<'a>,
}

impl Row<'_> {
    /// Label shown in the Name column.
    pub fn label(&self) -> &str {
        match self.kind {
            RowKind::Parent => "..",
            RowKind::Directory(d) => &d.name,
            RowKind::File(f) => &f.name,
        }
    }
}

/// Builds the display sequence: parent (when `cwd` has one), directories, files.
pub fn enumerate_rows<'a>(
    cwd: &Path,
    directories: &'a [DirEntry],
    files: &'a [FileEntry],
) -> Vec<Row<'a>> {
    let parent = cwd.parent().map(|_| RowKind::Parent);
    parent
        .into_iter()
        .chain(directories.iter().map(RowKind::Directory))
        .chain(files.iter().map(RowKind::File))
        .enumerate()
        .map(|(index, kind)| Row { index, kind })
        .collect()
}
