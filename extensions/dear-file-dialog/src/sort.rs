//! Column sort toggles and how they order the cached listing.
//!
//! Exactly one of the four columns may be active at a time. The toggles are
//! process-wide in the ImGui entry point (see [`shared_sort_state`]), so a newly
//! opened dialog inherits whatever sort the previous one left behind until an
//! explicit cancel or confirm resets it.

use std::cmp::Ordering;

use parking_lot::{Mutex, MutexGuard};

use crate::core::{SortColumn, SortCoupling, SortOrder};
use crate::snapshot::{DirEntry, FileEntry};

#[cfg(feature = "tracing")]
use tracing::trace;

/// Sort toggles of the Name, Size, Type and Date columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortState {
    orders: [SortOrder; 4],
}

impl Default for SortState {
    fn default() -> Self {
        Self::new()
    }
}

impl SortState {
    /// All four columns unset.
    pub const fn new() -> Self {
        Self {
            orders: [SortOrder::Unset; 4],
        }
    }

    /// Current toggle of `column`.
    pub fn order(&self, column: SortColumn) -> SortOrder {
        self.orders[column.index()]
    }

    /// The active column and its order, if any.
    pub fn active(&self) -> Option<(SortColumn, SortOrder)> {
        SortColumn::ALL
            .into_iter()
            .map(|c| (c, self.order(c)))
            .find(|(_, order)| order.is_set())
    }

    /// Returns `true` when no column is active.
    pub fn is_unset(&self) -> bool {
        self.active().is_none()
    }

    /// Header click: unset the other three columns and toggle `column`.
    ///
    /// Returns the new order of `column`.
    pub fn activate(&mut self, column: SortColumn) -> SortOrder {
        let next = self.order(column).toggled();
        self.orders = [SortOrder::Unset; 4];
        self.orders[column.index()] = next;
        trace_sort_toggled(column, next);
        next
    }

    /// Unset every column.
    pub fn reset(&mut self) {
        self.orders = [SortOrder::Unset; 4];
    }

    /// Orders directories in place.
    ///
    /// Any of Name/Size/Type sorts by name length, Date sorts by modification
    /// time, and no active column keeps enumeration order.
    pub fn sort_directories(&self, dirs: &mut [DirEntry]) {
        let by_length = [SortColumn::Name, SortColumn::Size, SortColumn::Type]
            .into_iter()
            .map(|c| self.order(c))
            .find(|o| o.is_set());
        if let Some(order) = by_length {
            sort_with(dirs, order, |a, b| name_len(&a.name).cmp(&name_len(&b.name)));
        } else if self.order(SortColumn::Date).is_set() {
            sort_with(dirs, self.order(SortColumn::Date), |a, b| {
                a.modified.cmp(&b.modified)
            });
        }
    }

    /// Orders files in place.
    ///
    /// The first active column in Name > Size > Type > Date picks the key; see
    /// [`SortCoupling`] for where the direction comes from.
    pub fn sort_files(&self, files: &mut [FileEntry], coupling: SortCoupling) {
        let Some((column, order)) = self.active() else {
            return;
        };
        let order = match coupling {
            SortCoupling::Independent => order,
            SortCoupling::Legacy => match self.order(SortColumn::Date) {
                SortOrder::Ascending => SortOrder::Ascending,
                SortOrder::Descending | SortOrder::Unset => SortOrder::Descending,
            },
        };
        match column {
            SortColumn::Name => {
                sort_with(files, order, |a, b| name_len(&a.name).cmp(&name_len(&b.name)))
            }
            SortColumn::Size => sort_with(files, order, |a, b| a.size.cmp(&b.size)),
            SortColumn::Type => sort_with(files, order, |a, b| {
                name_len(&a.extension).cmp(&name_len(&b.extension))
            }),
            SortColumn::Date => sort_with(files, order, |a, b| a.modified.cmp(&b.modified)),
        }
    }
}

fn name_len(s: &str) -> usize {
    s.chars().count()
}

fn sort_with<T>(items: &mut [T], order: SortOrder, cmp: impl Fn(&T, &T) -> Ordering) {
    match order {
        SortOrder::Ascending => items.sort_by(|a, b| cmp(a, b)),
        SortOrder::Descending => items.sort_by(|a, b| cmp(b, a)),
        SortOrder::Unset => {}
    }
}

static SHARED_SORT_STATE: Mutex<SortState> = parking_lot::const_mutex(SortState::new());

/// Locks the process-wide sort toggles shared by every dialog instance.
///
/// Only explicit cancel/confirm resets them; closing a dialog any other way
/// leaves them in place for the next one.
pub fn shared_sort_state() -> MutexGuard<'static, SortState> {
    SHARED_SORT_STATE.lock()
}

#[cfg(feature = "tracing")]
fn trace_sort_toggled(column: SortColumn, order: SortOrder) {
    trace!(
        event = "sort.toggled",
        column = column.label(),
        order = ?order,
        "sort column toggled"
    );
}

#[cfg(not(feature = "tracing"))]
fn trace_sort_toggled(_column: SortColumn, _order: SortOrder) {}
