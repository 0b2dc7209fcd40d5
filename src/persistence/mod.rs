//! Template persistence.
//!
//! The whole document lives in a single key-value entry, rewritten after every
//! committed change by the [`AutoSave`] observer. History is not persisted, so
//! a restored session starts with empty undo/redo stacks.
//!
//! ## Module Structure
//!
//! - [`storage`] - KeyValueStore trait with file and in-memory backends
//! - [`saved`] - Stored entry layout, restore, import/export
//! - [`autosave`] - Store listener that writes on every change

mod autosave;
mod saved;
mod storage;


pub use autosave::AutoSave;
pub use saved::{
    SavedTemplate, decode, encode, export_template, import_template, persist, restore,
};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
