//! Change observers registered on the store.

use crate::template::Document;

/// What kind of state change was just committed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// Components inserted, removed, moved, duplicated or edited
    Components,
    /// Canvas style edited
    CanvasStyle,
    /// Placeholder set edited
    Placeholders,
    /// Selection changed
    Selection,
    /// View mode switched
    ViewMode,
    /// Document renamed
    Name,
    /// Undo or redo restored a snapshot
    History,
    /// Whole document replaced by reset or load
    Replaced,
}

impl Change {
    /// Whether this change touched state that is written to storage
    pub fn is_persisted(&self) -> bool {
        !matches!(self, Change::Selection)
    }
}

/// Observer notified after every committed change
pub trait StoreListener {
    fn on_change(&mut self, change: Change, document: &Document);
}

impl<F> StoreListener for F
where
    F: FnMut(Change, &Document),
{
    fn on_change(&mut self, change: Change, document: &Document) {
        self(change, document)
    }
}
