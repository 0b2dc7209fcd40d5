//! Auto-save observer: writes the document after every committed change.

use tracing::{trace, warn};

use crate::editor::{Change, StoreListener};
use crate::template::Document;

use super::saved::persist;
use super::storage::KeyValueStore;

/// Store listener that overwrites one storage entry on every change.
///
/// Failed writes are logged and counted, never retried.
pub struct AutoSave<S: KeyValueStore> {
    storage: S,
    key: String,
    writes: usize,
    failures: usize,
    last_error: Option<String>,
}

impl<S: KeyValueStore> AutoSave<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            writes: 0,
            failures: 0,
            last_error: None,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Successful writes so far
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Failed writes so far
    pub fn failures(&self) -> usize {
        self.failures
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

impl<S: KeyValueStore> StoreListener for AutoSave<S> {
    fn on_change(&mut self, change: Change, document: &Document) {
        if !change.is_persisted() {
            return;
        }
        match persist(&mut self.storage, &self.key, document) {
            Ok(()) => {
                self.writes += 1;
                trace!("Auto-saved {:?} after {:?}", self.key, change);
            }
            Err(e) => {
                self.failures += 1;
                warn!("Auto-save of {:?} failed: {}", self.key, e);
                self.last_error = Some(e.to_string());
            }
        }
    }
}
