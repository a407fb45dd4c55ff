use std::time::SystemTime;

use chrono::{DateTime, Local};

use crate::core::SortColumn;
use crate::fs::FileSystem;
use crate::rows::RowKind;
use crate::session::{ConfirmOutcome, DialogSession};
use crate::sort::SortState;
use crate::surface::{DialogSurface, RowClick};

/// How one frame left the dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FrameOutcome {
    Idle,
    Cancelled,
    Completed,
}

/// Draws one frame of the dialog and applies the user's input.
///
/// Returns `true` exactly on the frame a confirm succeeds; the result is then
/// in [`DialogSession::result_path`]. Cancel and confirm clear `open`; the
/// dialog never sets it. A closed dialog or a missing session draws nothing.
///
/// ```no_run
/// use dear_file_dialog::{DialogMode, DialogSession, DialogSurface, SortState, StdFileSystem};
/// # fn frame<S: DialogSurface>(surface: &mut S) {
/// let mut open = true;
/// let mut session = DialogSession::new("Open file", DialogMode::Open, "/tmp");
/// let mut sort = SortState::new();
/// if dear_file_dialog::render_dialog(surface, &mut open, Some(&mut session), &mut sort, &StdFileSystem) {
///     println!("picked {:?}", session.result_path());
/// }
/// # }
/// ```
pub fn render_dialog<S: DialogSurface>(
    surface: &mut S,
    open: &mut bool,
    session: Option<&mut DialogSession>,
    sort: &mut SortState,
    fs: &dyn FileSystem,
) -> bool {
    if !*open {
        return false;
    }
    let Some(session) = session else {
        return false;
    };

    let title = session.title.clone();
    let size = session.style.window_size;
    let outcome = surface.with_id(session.id(), |surface| {
        surface.window(&title, size, open, |surface| {
            draw_contents(surface, session, sort, fs)
        })
    });

    match outcome {
        Some(FrameOutcome::Completed) => {
            *open = false;
            true
        }
        Some(FrameOutcome::Cancelled) => {
            *open = false;
            false
        }
        Some(FrameOutcome::Idle) | None => false,
    }
}

fn draw_contents<S: DialogSurface>(
    surface: &mut S,
    session: &mut DialogSession,
    sort: &mut SortState,
    fs: &dyn FileSystem,
) -> FrameOutcome {
    session.refresh_if_needed(fs);

    surface.text(&format!("Path: {}", session.current_dir().display()));

    let width = surface.content_width();
    let height = session.style.browser_height;
    surface.child("##browser", [width, height], |surface| {
        draw_browser(surface, session, sort)
    });

    let mut field = session.file_name_field();
    let width = surface.content_width();
    if surface.input_text("File Name", &mut field, width) {
        session.edit_file_name(field);
    }

    let mut outcome = FrameOutcome::Idle;
    if surface.button("Cancel") {
        session.cancel(sort);
        outcome = FrameOutcome::Cancelled;
    }
    surface.same_line();
    if surface.button(session.mode.confirm_label()) && outcome == FrameOutcome::Idle {
        if let ConfirmOutcome::Completed(_) = session.confirm(sort, fs) {
            outcome = FrameOutcome::Completed;
        }
    }

    if let Some(err) = session.last_error() {
        surface.error_text(err);
    }
    outcome
}

fn draw_browser<S: DialogSurface>(
    surface: &mut S,
    session: &mut DialogSession,
    sort: &mut SortState,
) {
    surface.columns(SortColumn::ALL.len());
    if session.take_pending_layout() {
        for (index, width) in session.style.column_widths.into_iter().enumerate() {
            surface.set_column_width(index, width);
        }
    }

    for column in SortColumn::ALL {
        if surface.header(column.label()) {
            sort.activate(column);
        }
        surface.next_column();
    }
    surface.separator();

    session.apply_sort(sort);

    let mut clicked = None;
    {
        let selected = session.selected_index();
        for row in session.rows() {
            let width = surface.content_width();
            match surface.row(row.label(), row.index == selected, width) {
                RowClick::None => {}
                RowClick::Single => clicked = Some((row.index, false)),
                RowClick::Double => clicked = Some((row.index, true)),
            }
            surface.next_column();
            for cell in row_cells(row.kind) {
                surface.text(&cell);
                surface.next_column();
            }
        }
    }
    surface.columns(1);

    if let Some((index, double_click)) = clicked {
        session.click_row(index, double_click);
    }
}

/// Size, Type and Date cells of a row.
fn row_cells(kind: RowKind<'_>) -> [String; 3] {
    match kind {
        RowKind::Parent => ["-".into(), "<parent>".into(), "-".into()],
        RowKind::Directory(d) => ["-".into(), "<directory>".into(), format_modified(d.modified)],
        RowKind::File(f) => [
            f.size.to_string(),
            f.extension.clone(),
            format_modified(f.modified),
        ],
    }
}

fn format_modified(modified: Option<SystemTime>) -> String {
    match modified {
        Some(m) => {
            let dt: DateTime<Local> = DateTime::<Local>::from(m);
            dt.format("%Y-%m-%d %H:%M:%S").to_string()
        }
        None => String::new(),
    }
}
