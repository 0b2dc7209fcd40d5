//! Property-editor routing: style edits go to the selection, or to the canvas
//! when nothing is selected.

use serde_json::Value;

use crate::template::{CanvasStylePatch, ComponentId, ComponentPatch, with_style_property};

use super::store::TemplateStore;

/// What the property panel is currently editing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyTarget {
    Component(ComponentId),
    Canvas,
}

impl PropertyTarget {
    pub fn current(store: &TemplateStore) -> Self {
        match store.selected_element() {
            Some(component) => PropertyTarget::Component(component.id().clone()),
            None => PropertyTarget::Canvas,
        }
    }
}

/// Set one style property on the current target
pub fn apply_style(store: &mut TemplateStore, property: &str, value: Value) {
    match PropertyTarget::current(store) {
        PropertyTarget::Component(id) => {
            let Some(component) = store.component(&id) else {
                return;
            };
            let style = with_style_property(&component.style, property, value);
            store.update_element(&id, ComponentPatch::style(style));
        }
        PropertyTarget::Canvas => {
            store.update_canvas_style(CanvasStylePatch::property(property, value));
        }
    }
}
