#![deny(missing_docs)]
//! Modal open/save file dialog for `dear-imgui-rs`.
//!
//! The dialog lists one directory at a time (parent entry, subdirectories,
//! files), sorts it by one of four columns, lets the user navigate by
//! double-clicking and pick or type a file name, and yields an absolute path
//! when the user confirms.
//!
//! The state machine ([`DialogSession`], [`SortState`]) does not depend on
//! Dear ImGui. Frames are drawn through the [`DialogSurface`] trait; the `imgui`
//! feature implements it for a Dear ImGui frame and adds
//! `ui.file_dialog().show(&mut open, &mut session)`.

mod core;
mod fs;
mod manager;
mod render;
mod rows;
mod session;
mod snapshot;
mod sort;
mod surface;
#[cfg(feature = "imgui")]
mod ui;

pub use crate::core::{
    DialogMode, FileDialogError, SavePolicy, SortColumn, SortCoupling, SortOrder,
};
pub use fs::{FileSystem, FsEntry, FsMetadata, StdFileSystem};
pub use manager::{DialogManager, DialogStatus};
pub use render::render_dialog;
pub use rows::{Row, RowKind, enumerate_rows};
pub use session::{ConfirmOutcome, DialogId, DialogSession, DialogStyle, RowAction};
pub use snapshot::{DirEntry, DirSnapshot, FileEntry, RefreshOutcome, read_snapshot};
pub use sort::{SortState, shared_sort_state};
pub use surface::{DialogSurface, RowClick};
#[cfg(feature = "imgui")]
pub use ui::{FileDialog, FileDialogExt, ImguiSurface};
