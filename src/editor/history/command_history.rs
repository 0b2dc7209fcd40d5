//! Snapshot history for tracking undo/redo state.

use tracing::trace;

use super::MAX_HISTORY_SIZE;
use super::snapshot::Snapshot;

/// Bounded undo/redo stacks of document snapshots
#[derive(Debug, Clone)]
pub struct CommandHistory {
    /// Snapshots that can be undone (most recent last)
    undo_stack: Vec<Snapshot>,
    /// Snapshots that can be redone (next redo last)
    redo_stack: Vec<Snapshot>,
    /// Undo entries kept before the oldest is dropped
    limit: usize,
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::with_limit(MAX_HISTORY_SIZE)
    }
}

impl CommandHistory {
    /// History keeping at most `limit` undo entries (at least one)
    pub fn with_limit(limit: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// Record a new entry, discarding anything that could be redone
    pub fn push(&mut self, snapshot: Snapshot) {
        // Clear redo stack when a new action is performed
        self.redo_stack.clear();

        self.undo_stack.push(snapshot);

        // Trim history if it exceeds max size
        while self.undo_stack.len() > self.limit {
            self.undo_stack.remove(0);
            trace!("History limit {} reached, dropped oldest entry", self.limit);
        }
    }

    /// Forget every redo entry without touching the undo stack
    pub fn clear_redo(&mut self) {
        self.redo_stack.clear();
    }

    /// Pop the last snapshot for undo
    pub fn pop_undo(&mut self) -> Option<Snapshot> {
        self.undo_stack.pop()
    }

    /// Pop the next snapshot for redo
    pub fn pop_redo(&mut self) -> Option<Snapshot> {
        self.redo_stack.pop()
    }

    /// Push a snapshot to the redo stack (used after undo)
    pub fn push_redo(&mut self, snapshot: Snapshot) {
        self.redo_stack.push(snapshot);
    }

    /// Push a snapshot to the undo stack (used after redo)
    pub fn push_undo(&mut self, snapshot: Snapshot) {
        self.undo_stack.push(snapshot);
        while self.undo_stack.len() > self.limit {
            self.undo_stack.remove(0);
        }
    }

    /// Check if there are snapshots to undo
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if there are snapshots to redo
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Get the count of undoable entries
    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    /// Get the count of redoable entries
    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    /// Undo entries, oldest first
    pub fn past(&self) -> impl Iterator<Item = &Snapshot> {
        self.undo_stack.iter()
    }

    /// Redo entries, next redo first
    pub fn future(&self) -> impl Iterator<Item = &Snapshot> {
        self.redo_stack.iter().rev()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Clear all history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
