use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::core::{DialogMode, FileDialogError, SavePolicy, SortCoupling};
use crate::fs::FileSystem;
use crate::rows::{Row, RowKind, enumerate_rows};
use crate::snapshot::{DirEntry, FileEntry, RefreshOutcome, load_snapshot};
use crate::sort::SortState;

#[cfg(feature = "tracing")]
use tracing::{debug, trace};

/// Opaque identity of one dialog instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DialogId(u64);

impl DialogId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    #[cfg_attr(not(feature = "imgui"), allow(dead_code))]
    pub(crate) fn as_imgui_id(self) -> i32 {
        (self.0 as i32) ^ ((self.0 >> 32) as i32)
    }
}

/// Layout and behavior knobs of a dialog.
#[derive(Clone, Debug)]
pub struct DialogStyle {
    /// Window size applied the first time the window appears.
    pub window_size: [f32; 2],
    /// Height of the scrollable file list.
    pub browser_height: f32,
    /// Initial widths of the Name, Size and Type columns (Date takes the rest).
    pub column_widths: [f32; 3],
    /// Capacity of the file name field; longer names are cut to `capacity - 1` chars.
    pub file_name_capacity: usize,
    /// Where file sorts take their direction from.
    pub sort_coupling: SortCoupling,
    /// Save mode confirmation rules.
    pub save_policy: SavePolicy,
}

impl Default for DialogStyle {
    fn default() -> Self {
        Self {
            window_size: [740.0, 410.0],
            browser_height: 300.0,
            column_widths: [230.0, 80.0, 90.0],
            file_name_capacity: 200,
            sort_coupling: SortCoupling::default(),
            save_policy: SavePolicy::default(),
        }
    }
}

/// What a row click did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowAction {
    /// No row exists at the clicked index.
    Ignored,
    /// The row was highlighted.
    Selected(usize),
    /// A file row was highlighted and its name copied into the file name field.
    FileChosen(usize),
    /// The current directory changed; a refresh is scheduled.
    Navigated(PathBuf),
}

/// Result of pressing the confirm button.
#[derive(Debug)]
pub enum ConfirmOutcome {
    /// The dialog completed with this path.
    Completed(PathBuf),
    /// The dialog stays open.
    Rejected(FileDialogError),
}

impl ConfirmOutcome {
    /// Returns `true` for [`ConfirmOutcome::Completed`].
    pub fn is_completed(&self) -> bool {
        matches!(self, ConfirmOutcome::Completed(_))
    }

    /// Converts into a `Result`.
    pub fn into_result(self) -> Result<PathBuf, FileDialogError> {
        match self {
            ConfirmOutcome::Completed(path) => Ok(path),
            ConfirmOutcome::Rejected(err) => Err(err),
        }
    }
}

/// Mutable state of one open dialog.
///
/// The caller creates the session before the first frame and drops it after the
/// dialog closes. Sort toggles are not part of it; they are shared by every
/// dialog (see [`crate::shared_sort_state`]).
#[derive(Debug)]
pub struct DialogSession {
    /// Window title.
    pub title: String,
    /// Open or Save.
    pub mode: DialogMode,
    /// Layout and behavior knobs.
    pub style: DialogStyle,

    id: DialogId,
    cwd: PathBuf,
    file_name: String,
    result_path: Option<PathBuf>,
    needs_refresh: bool,
    selected_index: usize,
    directories: Vec<DirEntry>,
    files: Vec<FileEntry>,
    last_refresh: RefreshOutcome,
    last_error: Option<String>,
    layout_pending: bool,
}

impl DialogSession {
    /// Creates a session listing `dir`.
    ///
    /// Relative paths are resolved against the process working directory.
    pub fn new(title: impl Into<String>, mode: DialogMode, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let cwd = std::path::absolute(&dir).unwrap_or(dir);
        Self {
            title: title.into(),
            mode,
            style: DialogStyle::default(),
            id: DialogId::next(),
            cwd,
            file_name: String::new(),
            result_path: None,
            needs_refresh: true,
            selected_index: 0,
            directories: Vec::new(),
            files: Vec::new(),
            last_refresh: RefreshOutcome::Pending,
            last_error: None,
            layout_pending: true,
        }
    }

    /// Pre-fills the file name field.
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = name.into();
        self
    }

    /// Replaces the style.
    pub fn with_style(mut self, style: DialogStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets where file sorts take their direction from.
    pub fn with_sort_coupling(mut self, coupling: SortCoupling) -> Self {
        self.style.sort_coupling = coupling;
        self
    }

    /// Sets the Save mode confirmation rules.
    pub fn with_save_policy(mut self, policy: SavePolicy) -> Self {
        self.style.save_policy = policy;
        self
    }

    /// Identity of this dialog instance.
    pub fn id(&self) -> DialogId {
        self.id
    }

    /// Directory currently listed.
    pub fn current_dir(&self) -> &Path {
        &self.cwd
    }

    /// Text of the file name field.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Path chosen on a successful confirm.
    pub fn result_path(&self) -> Option<&Path> {
        self.result_path.as_deref()
    }

    /// Whether a refresh has been scheduled by navigation.
    pub fn needs_refresh(&self) -> bool {
        self.needs_refresh
    }

    /// Highlighted row index.
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Cached subdirectories in current display order.
    pub fn directories(&self) -> &[DirEntry] {
        &self.directories
    }

    /// Cached files in current display order.
    pub fn files(&self) -> &[FileEntry] {
        &self.files
    }

    /// Outcome of the last refresh.
    pub fn last_refresh(&self) -> &RefreshOutcome {
        &self.last_refresh
    }

    /// Message of the last rejected confirm, until the user acts again.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Whether the next frame should reload the listing.
    ///
    /// Also true while the listing is empty, so an empty directory is
    /// re-read every frame.
    pub fn should_refresh(&self) -> bool {
        self.needs_refresh || (self.directories.is_empty() && self.files.is_empty())
    }

    /// Reloads the listing of the current directory.
    ///
    /// An unreadable directory leaves the listing empty; the reason is kept in
    /// [`DialogSession::last_refresh`].
    pub fn refresh(&mut self, fs: &dyn FileSystem) -> &RefreshOutcome {
        let (snapshot, outcome) = load_snapshot(fs, &self.cwd);
        self.directories = snapshot.directories;
        self.files = snapshot.files;
        self.selected_index = 0;
        self.needs_refresh = false;
        self.last_refresh = outcome;
        &self.last_refresh
    }

    /// Refreshes when [`DialogSession::should_refresh`] says so.
    ///
    /// Returns `true` if a refresh happened.
    pub fn refresh_if_needed(&mut self, fs: &dyn FileSystem) -> bool {
        if !self.should_refresh() {
            return false;
        }
        self.refresh(fs);
        true
    }

    /// Changes the current directory and schedules a refresh.
    pub fn navigate_to(&mut self, dir: impl Into<PathBuf>) {
        self.cwd = dir.into();
        self.needs_refresh = true;
        self.last_error = None;
        trace_navigated(&self.cwd);
    }

    /// Orders the cached listing by the given toggles.
    pub fn apply_sort(&mut self, sort: &SortState) {
        sort.sort_directories(&mut self.directories);
        sort.sort_files(&mut self.files, self.style.sort_coupling);
    }

    /// Rows in display order: parent, directories, files.
    pub fn rows(&self) -> Vec<Row<'_>> {
        enumerate_rows(&self.cwd, &self.directories, &self.files)
    }

    /// Handles a click on the row at `index`.
    ///
    /// Every click highlights the row and a click on a file copies its name into
    /// the file name field. A double click on the parent or a directory row
    /// navigates there.
    pub fn click_row(&mut self, index: usize, double_click: bool) -> RowAction {
        enum Target {
            Parent(PathBuf),
            Directory(PathBuf),
            File(String),
        }

        let target = {
            let rows = self.rows();
            let Some(row) = rows.get(index) else {
                return RowAction::Ignored;
            };
            match row.kind {
                RowKind::Parent => match self.cwd.parent() {
                    Some(parent) => Target::Parent(parent.to_path_buf()),
                    None => return RowAction::Ignored,
                },
                RowKind::Directory(d) => Target::Directory(d.path.clone()),
                RowKind::File(f) => Target::File(f.name.clone()),
            }
        };

        self.selected_index = index;
        match target {
            Target::File(name) => {
                self.file_name = name;
                self.last_error = None;
                RowAction::FileChosen(index)
            }
            Target::Parent(dir) | Target::Directory(dir) if double_click => {
                self.navigate_to(dir.clone());
                RowAction::Navigated(dir)
            }
            Target::Parent(_) | Target::Directory(_) => RowAction::Selected(index),
        }
    }

    /// The file name as shown in the bounded text field.
    pub fn file_name_field(&self) -> String {
        truncate_chars(&self.file_name, self.style.file_name_capacity)
    }

    /// Stores an edit of the file name field and clears the row highlight.
    pub fn edit_file_name(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.file_name = truncate_chars(&text, self.style.file_name_capacity);
        self.selected_index = 0;
        self.last_error = None;
    }

    /// Attempts to finish the dialog with `current_dir / file_name`.
    ///
    /// On success the result path is stored, the listing is dropped and the
    /// sort toggles are reset. On rejection nothing but the error message changes.
    pub fn confirm(&mut self, sort: &mut SortState, fs: &dyn FileSystem) -> ConfirmOutcome {
        let target = self.cwd.join(&self.file_name);
        match self.validate_target(&target, fs) {
            Ok(()) => {
                trace_confirm_completed(&target);
                self.clear_listing();
                sort.reset();
                self.last_error = None;
                self.result_path = Some(target.clone());
                ConfirmOutcome::Completed(target)
            }
            Err(err) => {
                trace_confirm_rejected(&target, &err);
                self.last_error = Some(err.to_string());
                ConfirmOutcome::Rejected(err)
            }
        }
    }

    /// Abandons the dialog: drops the listing and resets the sort toggles.
    ///
    /// The result path is left as it was.
    pub fn cancel(&mut self, sort: &mut SortState) {
        trace_cancelled(&self.cwd);
        self.clear_listing();
        sort.reset();
        self.last_error = None;
    }

    pub(crate) fn take_pending_layout(&mut self) -> bool {
        std::mem::replace(&mut self.layout_pending, false)
    }

    fn validate_target(&self, target: &Path, fs: &dyn FileSystem) -> Result<(), FileDialogError> {
        if self.file_name.is_empty() {
            return Err(FileDialogError::EmptyFileName);
        }
        let require_existing = match self.mode {
            DialogMode::Open => true,
            DialogMode::Save => self.style.save_policy.require_existing,
        };
        match fs.metadata(target) {
            Ok(md) if md.is_file => Ok(()),
            Ok(_) => Err(FileDialogError::NotAFile(target.to_path_buf())),
            Err(err) if err.kind() != std::io::ErrorKind::NotFound => {
                Err(FileDialogError::Io(err))
            }
            Err(_) if require_existing => Err(FileDialogError::NotFound(target.to_path_buf())),
            Err(_) => match target.parent() {
                Some(parent) if fs.is_dir(parent) => Ok(()),
                Some(parent) => Err(FileDialogError::ParentMissing(parent.to_path_buf())),
                None => Err(FileDialogError::NotAFile(target.to_path_buf())),
            },
        }
    }

    fn clear_listing(&mut self) {
        self.directories.clear();
        self.files.clear();
        self.selected_index = 0;
        self.needs_refresh = false;
    }
}

fn truncate_chars(s: &str, capacity: usize) -> String {
    let max = capacity.saturating_sub(1);
    match s.char_indices().nth(max) {
        Some((cut, _)) => s[..cut].to_string(),
        None => s.to_string(),
    }
}

#[cfg(feature = "tracing")]
fn trace_navigated(cwd: &Path) {
    trace!(event = "dialog.navigated", cwd = %cwd.display(), "directory changed");
}

#[cfg(not(feature = "tracing"))]
fn trace_navigated(_cwd: &Path) {}

#[cfg(feature = "tracing")]
fn trace_confirm_completed(path: &Path) {
    debug!(event = "dialog.confirmed", path = %path.display(), "file dialog confirmed");
}

#[cfg(not(feature = "tracing"))]
fn trace_confirm_completed(_path: &Path) {}

#[cfg(feature = "tracing")]
fn trace_confirm_rejected(path: &Path, err: &FileDialogError) {
    debug!(
        event = "dialog.confirm_rejected",
        path = %path.display(),
        error = %err,
        "file dialog confirm rejected"
    );
}

#[cfg(not(feature = "tracing"))]
fn trace_confirm_rejected(_path: &Path, _err: &FileDialogError) {}

#[cfg(feature = "tracing")]
fn trace_cancelled(cwd: &Path) {
    debug!(event = "dialog.cancelled", cwd = %cwd.display(), "file dialog cancelled");
}

#[cfg(not(feature = "tracing"))]
fn trace_cancelled(_cwd: &Path) {}
