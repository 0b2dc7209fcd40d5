//! Editing session: one store per session, restored from storage at start
//! and auto-saved on every change.

use tracing::{info, warn};

use crate::config::AppConfigData;
use crate::editor::TemplateStore;
use crate::error::TemplateError;
use crate::persistence::{AutoSave, FileStore, KeyValueStore, restore};
use crate::template::Document;

/// Owns the template store for the lifetime of one editing session
pub struct EditorSession {
    pub store: TemplateStore,
    /// Why the persisted template could not be restored, if it could not
    pub restore_warning: Option<String>,
}

impl EditorSession {
    /// Open a session backed by the configured storage directory
    pub fn open(config: &AppConfigData) -> Self {
        let storage = FileStore::new(config.storage_dir());
        info!("Opening session with storage at {:?}", storage.dir());
        Self::with_storage(config, storage)
    }

    /// Open a session over any storage backend
    pub fn with_storage<S>(config: &AppConfigData, storage: S) -> Self
    where
        S: KeyValueStore + 'static,
    {
        let (document, restore_warning) = match restore(&storage, &config.storage_key) {
            Ok(Some(doc)) => {
                info!(
                    "Restored template {:?} ({} components)",
                    doc.name(),
                    doc.len()
                );
                (doc, None)
            }
            Ok(None) => {
                info!("No saved template, starting from default");
                (Document::default(), None)
            }
            Err(e) => {
                warn!("Failed to restore saved template: {}", e);
                (
                    Document::default(),
                    Some(format!("Saved template could not be restored: {}", e)),
                )
            }
        };

        let mut store = TemplateStore::with_document(document, config.store_options());
        if config.autosave {
            store.subscribe(AutoSave::new(storage, config.storage_key.clone()));
        }

        Self {
            store,
            restore_warning,
        }
    }

    /// Read the persisted template without opening a session
    pub fn peek(config: &AppConfigData) -> Result<Document, TemplateError> {
        let storage = FileStore::new(config.storage_dir());
        Ok(restore(&storage, &config.storage_key)?.unwrap_or_default())
    }
}
