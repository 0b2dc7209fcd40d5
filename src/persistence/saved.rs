//! Persisted entry layout and template import/export.

use serde::{Deserialize, Serialize};
use std::path::Path;

use tracing::info;

use crate::constants::PERSISTED_VERSION;
use crate::error::TemplateError;
use crate::template::Document;

use super::storage::KeyValueStore;

/// The single stored entry: the document plus a format version.
/// History and selection are never written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedTemplate {
    pub state: Document,
    #[serde(default)]
    pub version: u32,
}

impl SavedTemplate {
    pub fn new(state: Document) -> Self {
        Self {
            state,
            version: PERSISTED_VERSION,
        }
    }
}

/// Serialize `doc` into the stored entry format
pub fn encode(doc: &Document) -> Result<String, TemplateError> {
    #[derive(Serialize)]
    struct SavedRef<'a> {
        state: &'a Document,
        version: u32,
    }

    Ok(serde_json::to_string_pretty(&SavedRef {
        state: doc,
        version: PERSISTED_VERSION,
    })?)
}

/// Parse a stored entry, rejecting versions this build does not understand.
/// Repeated component ids and placeholder keys are repaired.
pub fn decode(raw: &str) -> Result<Document, TemplateError> {
    let saved: SavedTemplate = serde_json::from_str(raw)?;
    if saved.version != PERSISTED_VERSION {
        return Err(TemplateError::UnsupportedVersion(saved.version));
    }
    let mut doc = saved.state;
    doc.normalize();
    Ok(doc)
}

/// Write `doc` under `key`, replacing whatever was there
pub fn persist(
    storage: &mut dyn KeyValueStore,
    key: &str,
    doc: &Document,
) -> Result<(), TemplateError> {
    let raw = encode(doc)?;
    storage.set(key, &raw)
}

/// Read the document stored under `key`, if any
pub fn restore(storage: &dyn KeyValueStore, key: &str) -> Result<Option<Document>, TemplateError> {
    match storage.get(key)? {
        Some(raw) => decode(&raw).map(Some),
        None => Ok(None),
    }
}

/// Write a standalone template file (the document body, no envelope)
pub fn export_template(doc: &Document, path: &Path) -> Result<(), TemplateError> {
    let json = serde_json::to_string_pretty(doc)?;
    std::fs::write(path, json)?;
    info!("Exported template {:?} to {:?}", doc.name(), path);
    Ok(())
}

/// Read a template file written by [`export_template`]. A stored entry
/// (with envelope) is accepted too.
pub fn import_template(path: &Path) -> Result<Document, TemplateError> {
    let json = std::fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&json)?;
    let doc = if value.get("state").is_some() {
        decode(&json)?
    } else {
        let mut doc: Document = serde_json::from_value(value)?;
        doc.normalize();
        doc
    };
    info!("Imported template {:?} from {:?}", doc.name(), path);
    Ok(doc)
}
