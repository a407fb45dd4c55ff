use std::path::PathBuf;
use thiserror::Error;

/// Dialog mode
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogMode {
    /// Pick an existing file
    Open,
    /// Choose a file to save to
    Save,
}

impl DialogMode {
    /// Label of the confirm button for this mode.
    pub fn confirm_label(self) -> &'static str {
        match self {
            DialogMode::Open => "Open",
            DialogMode::Save => "Save",
        }
    }
}

/// Three-state sort toggle of one column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Smallest first (shortest name, smallest size, oldest time)
    Ascending,
    /// Largest first (longest name, largest size, newest time)
    Descending,
    /// Column does not participate in sorting
    #[default]
    Unset,
}

impl SortOrder {
    /// Returns `true` unless the toggle is [`SortOrder::Unset`].
    pub fn is_set(self) -> bool {
        !matches!(self, SortOrder::Unset)
    }

    /// Next state when the column header is clicked.
    ///
    /// The first activation goes to `Descending`, later clicks alternate.
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Descending => SortOrder::Ascending,
            SortOrder::Ascending | SortOrder::Unset => SortOrder::Descending,
        }
    }
}

/// Sortable columns of the file list
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortColumn {
    /// Entry name
    Name,
    /// File size in bytes
    Size,
    /// File extension
    Type,
    /// Last modified time
    Date,
}

impl SortColumn {
    /// All columns in header order.
    pub const ALL: [SortColumn; 4] = [
        SortColumn::Name,
        SortColumn::Size,
        SortColumn::Type,
        SortColumn::Date,
    ];

    /// Header label.
    pub fn label(self) -> &'static str {
        match self {
            SortColumn::Name => "Name",
            SortColumn::Size => "Size",
            SortColumn::Type => "Type",
            SortColumn::Date => "Date",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            SortColumn::Name => 0,
            SortColumn::Size => 1,
            SortColumn::Type => 2,
            SortColumn::Date => 3,
        }
    }
}

/// Where file sorting takes its direction from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortCoupling {
    /// Name/Size/Type file sorts read their direction from the Date toggle.
    ///
    /// While another column is active the Date toggle is unset, which reads as
    /// descending, so these sorts keep the largest entries first regardless of
    /// how often the header is clicked.
    #[default]
    Legacy,
    /// Every column sorts in its own direction.
    Independent,
}

/// Save behavior knobs (Save mode only).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SavePolicy {
    /// Only accept targets that already exist as regular files.
    pub require_existing: bool,
}

/// Errors reported when the dialog cannot confirm
#[derive(Error, Debug)]
pub enum FileDialogError {
    /// I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// No file exists at the requested path
    #[error("no such file: {}", .0.display())]
    NotFound(PathBuf),
    /// The requested path exists but is not a regular file
    #[error("not a file: {}", .0.display())]
    NotAFile(PathBuf),
    /// The file name field is empty
    #[error("file name is empty")]
    EmptyFileName,
    /// The directory of a save target does not exist
    #[error("no such directory: {}", .0.display())]
    ParentMissing(PathBuf),
}
