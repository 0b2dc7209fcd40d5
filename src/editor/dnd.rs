//! Drag-and-drop translation.
//!
//! The drag controller reports raw ids; this turns them into index-based
//! store calls. Ids prefixed with `new-` are palette items whose suffix names
//! the component type, and the drop target `canvas` means the canvas itself.

use tracing::debug;

use crate::constants::{CANVAS_TARGET, PALETTE_PREFIX};
use crate::error::TemplateError;
use crate::template::{ComponentId, ComponentType};

use super::store::TemplateStore;

/// What is being dragged
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragSource {
    /// Unplaced item from the component palette
    Palette(ComponentType),
    /// Component already on the canvas
    Existing(ComponentId),
}

impl DragSource {
    /// Interpret a raw drag id
    pub fn parse(raw: &str) -> Result<Self, TemplateError> {
        match raw.strip_prefix(PALETTE_PREFIX) {
            Some(kind) => Ok(DragSource::Palette(kind.parse()?)),
            None => Ok(DragSource::Existing(ComponentId::from(raw))),
        }
    }

    /// Palette id for a component type
    pub fn palette_id(kind: ComponentType) -> String {
        format!("{}{}", PALETTE_PREFIX, kind)
    }
}

/// Where the pointer is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    Canvas,
    Component(ComponentId),
}

impl DropTarget {
    pub fn parse(raw: &str) -> Self {
        if raw == CANVAS_TARGET {
            DropTarget::Canvas
        } else {
            DropTarget::Component(ComponentId::from(raw))
        }
    }
}

/// Tracks the drag in progress between start and end events
#[derive(Debug, Default)]
pub struct DragController {
    active: Option<DragSource>,
}

impl DragController {
    /// The source currently being dragged
    pub fn active(&self) -> Option<&DragSource> {
        self.active.as_ref()
    }

    /// Palette type being dragged, for the drag overlay preview
    pub fn active_component(&self) -> Option<ComponentType> {
        match &self.active {
            Some(DragSource::Palette(kind)) => Some(*kind),
            _ => None,
        }
    }

    /// Begin a drag. Existing components become the selection.
    pub fn drag_start(&mut self, store: &mut TemplateStore, source: DragSource) {
        if let DragSource::Existing(id) = &source {
            store.select_element(Some(id));
        }
        self.active = Some(source);
    }

    /// Live reorder while an existing component hovers over another one
    pub fn drag_over(
        &mut self,
        store: &mut TemplateStore,
        source: &DragSource,
        over: Option<&DropTarget>,
    ) {
        let (DragSource::Existing(active), Some(DropTarget::Component(target))) = (source, over)
        else {
            return;
        };
        if active == target {
            return;
        }
        if let (Some(old_index), Some(new_index)) = (store.index_of(active), store.index_of(target))
        {
            store.reorder_element(old_index, new_index);
        }
    }

    /// Finish a drag, placing palette items. Returns the id of any new component.
    pub fn drag_end(
        &mut self,
        store: &mut TemplateStore,
        source: &DragSource,
        over: Option<&DropTarget>,
    ) -> Option<ComponentId> {
        self.active = None;

        let DragSource::Palette(kind) = source else {
            return None;
        };

        match over {
            Some(DropTarget::Component(target)) => {
                let position = store
                    .index_of(target)
                    .map(|index| index + 1)
                    .unwrap_or(store.components().len());
                Some(store.add_element(*kind, Some(position)))
            }
            Some(DropTarget::Canvas) => Some(store.add_element(*kind, None)),
            None if store.components().is_empty() => Some(store.add_element(*kind, None)),
            None => {
                debug!("Dropped {} outside the canvas", kind);
                None
            }
        }
    }
}
