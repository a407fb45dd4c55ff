use std::collections::HashMap;
use std::path::PathBuf;

use crate::fs::FileSystem;
use crate::render::render_dialog;
use crate::session::{DialogId, DialogSession};
use crate::sort::SortState;
use crate::surface::DialogSurface;

/// State of a managed dialog after a frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DialogStatus {
    /// Still open.
    Open,
    /// Confirmed with this path; the dialog was removed.
    Completed(PathBuf),
    /// Cancelled or closed from the title bar; the dialog was removed.
    Closed,
}

struct Managed {
    session: DialogSession,
    open: bool,
}

/// Owner of several dialog sessions, keyed by their [`DialogId`].
///
/// The caller opens a dialog once and drives it each frame with
/// [`DialogManager::show`] until it reports a final status.
#[derive(Default)]
pub struct DialogManager {
    dialogs: HashMap<DialogId, Managed>,
}

impl std::fmt::Debug for DialogManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialogManager")
            .field("dialogs", &self.dialogs.len())
            .finish()
    }
}

impl DialogManager {
    /// Create a new manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes ownership of `session` and marks it open.
    pub fn open(&mut self, session: DialogSession) -> DialogId {
        let id = session.id();
        self.dialogs.insert(id, Managed { session, open: true });
        id
    }

    /// Removes a dialog and returns its session (if any).
    pub fn close(&mut self, id: DialogId) -> Option<DialogSession> {
        self.dialogs.remove(&id).map(|m| m.session)
    }

    /// Returns `true` if the dialog exists in the manager.
    pub fn contains(&self, id: DialogId) -> bool {
        self.dialogs.contains_key(&id)
    }

    /// Number of managed dialogs.
    pub fn len(&self) -> usize {
        self.dialogs.len()
    }

    /// Returns `true` when no dialog is managed.
    pub fn is_empty(&self) -> bool {
        self.dialogs.is_empty()
    }

    /// Get immutable access to a session.
    pub fn session(&self, id: DialogId) -> Option<&DialogSession> {
        self.dialogs.get(&id).map(|m| &m.session)
    }

    /// Get mutable access to a session.
    pub fn session_mut(&mut self, id: DialogId) -> Option<&mut DialogSession> {
        self.dialogs.get_mut(&id).map(|m| &mut m.session)
    }

    /// Draws dialog `id` for one frame.
    ///
    /// Returns `None` for an unknown id. A dialog that completes or closes is
    /// removed from the manager.
    pub fn show<S: DialogSurface>(
        &mut self,
        surface: &mut S,
        id: DialogId,
        sort: &mut SortState,
        fs: &dyn FileSystem,
    ) -> Option<DialogStatus> {
        let managed = self.dialogs.get_mut(&id)?;
        let complete = render_dialog(
            surface,
            &mut managed.open,
            Some(&mut managed.session),
            sort,
            fs,
        );
        if complete {
            let path = managed.session.result_path().map(PathBuf::from);
            self.dialogs.remove(&id);
            return Some(path.map_or(DialogStatus::Closed, DialogStatus::Completed));
        }
        if !managed.open {
            self.dialogs.remove(&id);
            return Some(DialogStatus::Closed);
        }
        Some(DialogStatus::Open)
    }
}
