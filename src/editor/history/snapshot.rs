//! Snapshot of the undoable part of a document.

use std::sync::Arc;

use crate::template::{CanvasStyle, Component, Document, Placeholder};

/// Components, canvas style and placeholders at one point in time.
///
/// Taking a snapshot copies pointers only; the component bodies are shared
/// with the live document until one side mutates them.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub components: Vec<Arc<Component>>,
    pub canvas_style: Arc<CanvasStyle>,
    pub placeholders: Arc<Vec<Placeholder>>,
}

impl From<&Document> for Snapshot {
    fn from(doc: &Document) -> Self {
        Self {
            components: doc.components.clone(),
            canvas_style: Arc::clone(&doc.canvas_style),
            placeholders: Arc::clone(&doc.placeholders),
        }
    }
}

impl Snapshot {
    /// Write this snapshot back into `doc`, leaving name, view mode and
    /// selection alone
    pub fn restore_into(self, doc: &mut Document) {
        doc.components = self.components;
        doc.canvas_style = self.canvas_style;
        doc.placeholders = self.placeholders;
    }

    /// Whether `doc` currently holds exactly this snapshot's contents
    pub fn matches(&self, doc: &Document) -> bool {
        self.components == doc.components
            && self.canvas_style == doc.canvas_style
            && self.placeholders == doc.placeholders
    }

    /// Number of component bodies shared with `doc` rather than copied
    pub fn shared_components(&self, doc: &Document) -> usize {
        self.components
            .iter()
            .filter(|c| doc.components.iter().any(|d| Arc::ptr_eq(c, d)))
            .count()
    }
}
