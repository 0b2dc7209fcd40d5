//! The template document store and the collaborators driving it.
//!
//! ## Module Structure
//!
//! - [`store`] - TemplateStore: document, mutations, selection, view mode
//! - [`history`] - Snapshot-based undo/redo stacks
//! - [`listener`] - Change observers (auto-save hooks in here)
//! - [`dnd`] - Drag-and-drop event translation
//! - [`properties`] - Property-panel style routing

pub mod dnd;
pub mod history;
pub mod listener;
pub mod properties;
pub mod store;

#[cfg(test)]
mod tests;

pub use dnd::{DragController, DragSource, DropTarget};
pub use history::{CommandHistory, Snapshot};
pub use listener::{Change, StoreListener};
pub use properties::{PropertyTarget, apply_style};
pub use store::{StoreOptions, TemplateStore};
