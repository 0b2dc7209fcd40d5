//! # Mailforged - Email Template Document Store
//!
//! The state engine behind a block-based email template editor:
//!
//! - **Data model**: ordered content blocks, canvas style, placeholders
//! - **Store**: insert/remove/reorder/duplicate/update with selection and view mode
//! - **History**: bounded undo/redo over shared-structure snapshots
//! - **Persistence**: one key-value entry, rewritten by an auto-save observer
//!
//! ## Quick Start
//!
//! ```
//! use mailforged::editor::TemplateStore;
//! use mailforged::template::{ComponentPatch, ComponentType};
//!
//! let mut store = TemplateStore::default();
//! let id = store.add_element(ComponentType::Button, None);
//! store.update_element(&id, ComponentPatch::content("Get started"));
//! assert_eq!(store.component(&id).unwrap().content.as_deref(), Some("Get started"));
//!
//! // History holds the state after each edit; step back past the update
//! store.undo();
//! store.undo();
//! assert_eq!(store.component(&id).unwrap().content.as_deref(), Some("Button"));
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`template`] | Components, canvas style, document |
//! | [`editor`] | The store, history and UI collaborators |
//! | [`persistence`] | Key-value storage and auto-save |
//! | [`session`] | Per-session store ownership |
//! | [`cli`] | Editing shell |
//! | [`config`] | Persisted application settings |

pub mod cli;
pub mod config;
pub mod constants;
pub mod editor;
pub mod error;
pub mod paths;
pub mod persistence;
pub mod session;
pub mod template;

// Re-exports for convenience
pub use editor::TemplateStore;
pub use error::TemplateError;
pub use session::EditorSession;
