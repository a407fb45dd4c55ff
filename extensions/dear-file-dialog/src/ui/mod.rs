use std::ffi::CString;

use dear_imgui_rs::input::MouseButton;
use dear_imgui_rs::{Condition, Ui, WindowFlags, sys};

use crate::fs::StdFileSystem;
use crate::manager::{DialogManager, DialogStatus};
use crate::render::render_dialog;
use crate::session::{DialogId, DialogSession};
use crate::sort::shared_sort_state;
use crate::surface::{DialogSurface, RowClick};

const ERROR_COLOR: [f32; 4] = [0.9, 0.3, 0.3, 1.0];

/// [`DialogSurface`] backed by a Dear ImGui frame.
pub struct ImguiSurface<'ui> {
    ui: &'ui Ui,
}

impl<'ui> ImguiSurface<'ui> {
    /// Wraps the current frame.
    pub fn new(ui: &'ui Ui) -> Self {
        Self { ui }
    }
}

impl DialogSurface for ImguiSurface<'_> {
    fn with_id<R>(&mut self, id: DialogId, f: impl FnOnce(&mut Self) -> R) -> R {
        let _id = self.ui.push_id(id.as_imgui_id());
        f(self)
    }

    fn window<R>(
        &mut self,
        title: &str,
        size: [f32; 2],
        open: &mut bool,
        f: impl FnOnce(&mut Self) -> R,
    ) -> Option<R> {
        let name = window_name(title);
        let visible = unsafe {
            let size_vec = sys::ImVec2 {
                x: size[0],
                y: size[1],
            };
            sys::igSetNextWindowSize(size_vec, Condition::FirstUseEver as i32);
            sys::igBegin(name.as_ptr(), open, WindowFlags::empty().bits())
        };
        let result = visible.then(|| f(self));
        unsafe { sys::igEnd() };
        result
    }

    fn child<R>(&mut self, id: &str, size: [f32; 2], f: impl FnOnce(&mut Self) -> R) -> Option<R> {
        let ui = self.ui;
        ui.child_window(id.to_string())
            .size(size)
            .border(true)
            .flags(WindowFlags::HORIZONTAL_SCROLLBAR)
            .build(ui, || f(self))
    }

    fn content_width(&self) -> f32 {
        self.ui.content_region_avail_width()
    }

    fn columns(&mut self, count: usize) {
        self.ui.columns(count as i32, "##columns", true);
    }

    fn set_column_width(&mut self, index: usize, width: f32) {
        self.ui.set_column_width(index as i32, width);
    }

    fn next_column(&mut self) {
        self.ui.next_column();
    }

    fn separator(&mut self) {
        self.ui.separator();
    }

    fn header(&mut self, label: &str) -> bool {
        self.ui.selectable_config(label).build()
    }

    fn row(&mut self, label: &str, selected: bool, width: f32) -> RowClick {
        let clicked = self
            .ui
            .selectable_config(label)
            .selected(selected)
            .allow_double_click(true)
            .size([width, 0.0])
            .build();
        if !clicked {
            RowClick::None
        } else if self.ui.is_mouse_double_clicked(MouseButton::Left) {
            RowClick::Double
        } else {
            RowClick::Single
        }
    }

    fn text(&mut self, text: &str) {
        self.ui.text(text);
    }

    fn error_text(&mut self, text: &str) {
        self.ui.text_colored(ERROR_COLOR, text);
    }

    fn input_text(&mut self, label: &str, buf: &mut String, width: f32) -> bool {
        self.ui.set_next_item_width(width);
        self.ui.input_text(label, buf).build()
    }

    fn button(&mut self, label: &str) -> bool {
        self.ui.button(label)
    }

    fn same_line(&mut self) {
        self.ui.same_line();
    }
}

/// Window name for `ImGui_Begin`: interior NUL bytes are dropped and an empty
/// title falls back to a hidden label.
fn window_name(title: &str) -> CString {
    let mut bytes: Vec<u8> = title.bytes().filter(|b| *b != 0).collect();
    if bytes.is_empty() {
        bytes = b"##file_dialog".to_vec();
    }
    CString::new(bytes).unwrap_or_default()
}

/// UI handle for the file dialog
pub struct FileDialog<'ui> {
    ui: &'ui Ui,
}

/// Extend Ui with a file dialog entry point
pub trait FileDialogExt {
    /// Entry point for showing file dialogs
    fn file_dialog(&self) -> FileDialog<'_>;
}

impl FileDialogExt for Ui {
    fn file_dialog(&self) -> FileDialog<'_> {
        FileDialog { ui: self }
    }
}

impl FileDialog<'_> {
    /// Draws the dialog for one frame using the process-wide sort toggles and
    /// the real filesystem.
    ///
    /// Returns `true` on the frame the user confirms a path.
    ///
    /// ```no_run
    /// use dear_file_dialog::{DialogMode, DialogSession, FileDialogExt};
    /// # use dear_imgui_rs::*;
    /// # let mut ctx = Context::create();
    /// # let ui = ctx.frame();
    /// let mut open = true;
    /// let mut session = DialogSession::new("Open file", DialogMode::Open, "/tmp");
    /// if ui.file_dialog().show(&mut open, &mut session) {
    ///     eprintln!("{:?}", session.result_path());
    /// }
    /// ```
    pub fn show(&self, open: &mut bool, session: &mut DialogSession) -> bool {
        let mut surface = ImguiSurface::new(self.ui);
        let mut sort = shared_sort_state();
        render_dialog(&mut surface, open, Some(session), &mut sort, &StdFileSystem)
    }

    /// Draws one dialog owned by `manager`; see [`DialogManager::show`].
    pub fn show_managed(&self, manager: &mut DialogManager, id: DialogId) -> Option<DialogStatus> {
        let mut surface = ImguiSurface::new(self.ui);
        let mut sort = shared_sort_state();
        manager.show(&mut surface, id, &mut sort, &StdFileSystem)
    }
}
