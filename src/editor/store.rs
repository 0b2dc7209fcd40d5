//! The template document store.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::constants::MAX_HISTORY_SIZE;
use crate::template::{
    CanvasStyle, CanvasStylePatch, Component, ComponentId, ComponentPatch, ComponentType,
    Document, Placeholder, ViewMode,
};

use super::history::{CommandHistory, Snapshot};
use super::listener::{Change, StoreListener};

/// Tunables for a store instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreOptions {
    /// Undo entries kept before the oldest is dropped
    pub history_limit: usize,
    /// Record an undo entry for duplicates like every other mutation
    pub record_duplicates: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            history_limit: MAX_HISTORY_SIZE,
            record_duplicates: false,
        }
    }
}

/// Single authoritative holder of one editing session's document and history.
///
/// Every operation runs to completion and never fails: lookups that miss are
/// no-ops and out-of-range indices leave the order untouched.
pub struct TemplateStore {
    document: Document,
    history: CommandHistory,
    options: StoreOptions,
    listeners: Vec<Box<dyn StoreListener>>,
}

impl Default for TemplateStore {
    fn default() -> Self {
        Self::new(StoreOptions::default())
    }
}

impl TemplateStore {
    /// A store holding the default document
    pub fn new(options: StoreOptions) -> Self {
        Self::with_document(Document::default(), options)
    }

    /// A store holding `document` with empty history
    pub fn with_document(mut document: Document, options: StoreOptions) -> Self {
        document.normalize();
        Self {
            document,
            history: CommandHistory::with_limit(options.history_limit),
            options,
            listeners: Vec::new(),
        }
    }

    /// Register an observer called after every committed change
    pub fn subscribe(&mut self, listener: impl StoreListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn options(&self) -> StoreOptions {
        self.options
    }

    pub fn name(&self) -> &str {
        self.document.name()
    }

    pub fn components(&self) -> &[Arc<Component>] {
        self.document.components()
    }

    pub fn component(&self, id: &ComponentId) -> Option<&Component> {
        self.document.component(id)
    }

    pub fn index_of(&self, id: &ComponentId) -> Option<usize> {
        self.document.index_of(id)
    }

    pub fn canvas_style(&self) -> &CanvasStyle {
        self.document.canvas_style()
    }

    pub fn placeholders(&self) -> &[Placeholder] {
        self.document.placeholders()
    }

    pub fn view_mode(&self) -> ViewMode {
        self.document.view_mode()
    }

    pub fn selected_element(&self) -> Option<&Component> {
        self.document.selected_element()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_count(&self) -> usize {
        self.history.undo_count()
    }

    pub fn redo_count(&self) -> usize {
        self.history.redo_count()
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Insert a new component of `kind` at `position`, or append when the
    /// position is absent or past the end. Returns the new id.
    pub fn add_element(&mut self, kind: ComponentType, position: Option<usize>) -> ComponentId {
        let component = Component::new(kind);
        let id = component.id().clone();
        let len = self.document.components.len();
        let index = match position {
            Some(pos) if pos <= len => pos,
            _ => len,
        };
        self.document.components.insert(index, Arc::new(component));
        debug!("Added {} component {} at index {}", kind, id, index);

        self.checkpoint();
        self.commit(Change::Components);
        id
    }

    /// Move the component at `old_index` to `new_index`, shifting the rest
    pub fn reorder_element(&mut self, old_index: usize, new_index: usize) {
        let len = self.document.components.len();
        if old_index < len && new_index < len {
            let component = self.document.components.remove(old_index);
            self.document.components.insert(new_index, component);
            debug!("Moved component from {} to {}", old_index, new_index);
        } else {
            warn!(
                "Ignoring reorder {} -> {} on {} components",
                old_index, new_index, len
            );
        }

        self.checkpoint();
        self.commit(Change::Components);
    }

    /// Delete the component with `id`, clearing the selection if it pointed there
    pub fn remove_element(&mut self, id: &ComponentId) {
        let before = self.document.components.len();
        self.document.components.retain(|c| c.id() != id);
        if self.document.components.len() < before {
            debug!("Removed component {}", id);
        }
        if self.document.selected.as_ref() == Some(id) {
            self.document.selected = None;
        }

        self.checkpoint();
        self.commit(Change::Components);
    }

    /// Append a copy of the component with `id` under a fresh id.
    ///
    /// Unless [`StoreOptions::record_duplicates`] is set this leaves the undo
    /// stack as it is, but still discards redo entries.
    pub fn duplicate_element(&mut self, id: &ComponentId) -> Option<ComponentId> {
        let copy = self.document.component(id)?.duplicate();
        let new_id = copy.id().clone();

        self.document.components.push(Arc::new(copy));
        debug!("Duplicated component {} as {}", id, new_id);

        if self.options.record_duplicates {
            self.checkpoint();
        } else {
            self.history.clear_redo();
        }

        self.commit(Change::Components);
        Some(new_id)
    }

    /// Shallow-merge `patch` into the component with `id`
    pub fn update_element(&mut self, id: &ComponentId, patch: ComponentPatch) {
        if let Some(component) = self.document.components.iter_mut().find(|c| c.id() == id) {
            patch.apply(Arc::make_mut(component));
            debug!("Updated component {}", id);
        }

        self.checkpoint();
        self.commit(Change::Components);
    }

    /// Shallow-merge `patch` into the canvas style
    pub fn update_canvas_style(&mut self, patch: CanvasStylePatch) {
        Arc::make_mut(&mut self.document.canvas_style).merge(patch);
        debug!("Updated canvas style");
        self.checkpoint();
        self.commit(Change::CanvasStyle);
    }

    /// Select the component with `id`, or clear the selection
    pub fn select_element(&mut self, id: Option<&ComponentId>) {
        self.document.selected = id
            .filter(|id| self.document.index_of(id).is_some())
            .cloned();
        self.commit(Change::Selection);
    }

    pub fn switch_view_mode(&mut self, mode: ViewMode) {
        self.document.view_mode = mode;
        debug!("Switched view mode to {}", mode);
        self.commit(Change::ViewMode);
    }

    /// Declare a placeholder; an existing key has its description replaced
    pub fn add_placeholder(&mut self, placeholder: Placeholder) {
        let placeholders = Arc::make_mut(&mut self.document.placeholders);
        match placeholders.iter_mut().find(|p| p.key == placeholder.key) {
            Some(existing) => existing.description = placeholder.description,
            None => placeholders.push(placeholder),
        }

        self.checkpoint();
        self.commit(Change::Placeholders);
    }

    pub fn remove_placeholder(&mut self, key: &str) {
        Arc::make_mut(&mut self.document.placeholders).retain(|p| p.key != key);
        self.checkpoint();
        self.commit(Change::Placeholders);
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.document.name = name.into();
        self.commit(Change::Name);
    }

    /// Replace everything with the default document and forget history
    pub fn reset_template(&mut self) {
        self.document = Document::default();
        self.history.clear();
        debug!("Template reset");
        self.commit(Change::Replaced);
    }

    /// Replace everything with `document` and forget history. Repeated
    /// component ids and placeholder keys are repaired first.
    pub fn load_template(&mut self, mut document: Document) {
        document.selected = None;
        document.normalize();
        self.document = document;
        self.history.clear();
        debug!(
            "Loaded template {:?} with {} components",
            self.document.name,
            self.document.components.len()
        );
        self.commit(Change::Replaced);
    }

    /// Record the current state as an undo point
    pub fn save_snapshot(&mut self) {
        self.checkpoint();
    }

    pub fn undo(&mut self) {
        let Some(previous) = self.history.pop_undo() else {
            return;
        };
        self.history.push_redo(Snapshot::from(&self.document));
        previous.restore_into(&mut self.document);
        self.document.resolve_selection();
        debug!("Undo ({} left)", self.history.undo_count());
        self.commit(Change::History);
    }

    pub fn redo(&mut self) {
        let Some(next) = self.history.pop_redo() else {
            return;
        };
        self.history.push_undo(Snapshot::from(&self.document));
        next.restore_into(&mut self.document);
        self.document.resolve_selection();
        debug!("Redo ({} left)", self.history.redo_count());
        self.commit(Change::History);
    }

    /// Push the current (post-mutation) state onto the undo stack
    fn checkpoint(&mut self) {
        self.history.push(Snapshot::from(&self.document));
    }

    fn commit(&mut self, change: Change) {
        for listener in &mut self.listeners {
            listener.on_change(change, &self.document);
        }
    }
}
