//! Undo/Redo history for template edits.
//!
//! Every structural or style mutation records a [`Snapshot`] of the document's
//! components, canvas style and placeholders as they are once the change has
//! been applied. Undo moves the live state onto the redo stack and restores the
//! newest snapshot; redo does the reverse.
//!
//! ## Module Structure
//!
//! - [`snapshot`] - Shared-structure copy of the undoable document state
//! - [`command_history`] - Bounded undo/redo stacks

mod command_history;
mod snapshot;


// Re-exports
pub use command_history::CommandHistory;
pub use snapshot::Snapshot;

pub(crate) use crate::constants::MAX_HISTORY_SIZE;
