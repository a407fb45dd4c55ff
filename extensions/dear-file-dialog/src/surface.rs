use crate::session::DialogId;

/// How a row selectable was clicked this frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RowClick {
    /// Not clicked.
    #[default]
    None,
    /// Clicked once.
    Single,
    /// Double-clicked.
    Double,
}

/// Immediate-mode drawing surface the dialog renders through.
///
/// The dialog calls these in a fixed order every frame and keeps no drawing
/// state between frames. Dear ImGui's `Ui` implements it with the `imgui`
/// feature; tests drive the dialog with scripted implementations.
pub trait DialogSurface {
    /// Runs `f` with `id` pushed on the id stack.
    fn with_id<R>(&mut self, id: DialogId, f: impl FnOnce(&mut Self) -> R) -> R;

    /// Draws a top-level window.
    ///
    /// `size` applies on first use only. `open` is cleared when the user closes
    /// the window from its title bar. Returns `None` when the window is hidden
    /// or collapsed.
    fn window<R>(
        &mut self,
        title: &str,
        size: [f32; 2],
        open: &mut bool,
        f: impl FnOnce(&mut Self) -> R,
    ) -> Option<R>;

    /// Draws a bordered, scrollable child region.
    fn child<R>(&mut self, id: &str, size: [f32; 2], f: impl FnOnce(&mut Self) -> R) -> Option<R>;

    /// Width available to the next widget.
    fn content_width(&self) -> f32;

    /// Starts a column layout (`1` ends it).
    fn columns(&mut self, count: usize);

    /// Sets the width of column `index`.
    fn set_column_width(&mut self, index: usize, width: f32);

    /// Moves to the next column.
    fn next_column(&mut self);

    /// Horizontal separator.
    fn separator(&mut self);

    /// Clickable column header; returns `true` when clicked.
    fn header(&mut self, label: &str) -> bool;

    /// Full-width selectable row label with double-click detection.
    fn row(&mut self, label: &str, selected: bool, width: f32) -> RowClick;

    /// Plain text.
    fn text(&mut self, text: &str);

    /// Text drawn in an error color.
    fn error_text(&mut self, text: &str);

    /// Single-line text input bound to `buf`; returns `true` when edited.
    fn input_text(&mut self, label: &str, buf: &mut String, width: f32) -> bool;

    /// Push button; returns `true` when pressed.
    fn button(&mut self, label: &str) -> bool;

    /// Keeps the next widget on the current line.
    fn same_line(&mut self);
}
