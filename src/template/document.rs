//! The template document aggregate.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use tracing::warn;

use crate::constants::DEFAULT_TEMPLATE_NAME;
use crate::error::TemplateError;

use super::canvas::CanvasStyle;
use super::component::{Component, ComponentId};

/// A named substitution variable declared for later templating
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placeholder {
    pub key: String,
    #[serde(default)]
    pub description: String,
}

impl Placeholder {
    pub fn new(key: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            description: description.into(),
        }
    }
}

/// Presentation of the editing surface
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Desktop,
    Mobile,
    Code,
}

impl ViewMode {
    pub fn all() -> &'static [ViewMode] {
        &[ViewMode::Desktop, ViewMode::Mobile, ViewMode::Code]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Desktop => "desktop",
            ViewMode::Mobile => "mobile",
            ViewMode::Code => "code",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewMode::all()
            .iter()
            .copied()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| TemplateError::UnknownViewMode(s.to_string()))
    }
}

/// An email template: ordered components plus document-wide state.
///
/// Components, canvas style and placeholders sit behind [`Arc`] so history
/// snapshots share them with the live document; a mutation clones only the
/// piece it touches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Document {
    pub(crate) name: String,
    pub(crate) components: Vec<Arc<Component>>,
    pub(crate) placeholders: Arc<Vec<Placeholder>>,
    pub(crate) view_mode: ViewMode,
    pub(crate) canvas_style: Arc<CanvasStyle>,
    /// Transient, never persisted
    #[serde(skip)]
    pub(crate) selected: Option<ComponentId>,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            name: DEFAULT_TEMPLATE_NAME.to_string(),
            components: Vec::new(),
            placeholders: Arc::new(Vec::new()),
            view_mode: ViewMode::Desktop,
            canvas_style: Arc::new(CanvasStyle::default()),
            selected: None,
        }
    }
}

impl Document {
    /// An empty document with the given name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_component(mut self, component: Component) -> Self {
        self.components.push(Arc::new(component));
        self
    }

    pub fn with_placeholder(mut self, placeholder: Placeholder) -> Self {
        Arc::make_mut(&mut self.placeholders).push(placeholder);
        self
    }

    pub fn with_canvas_style(mut self, style: CanvasStyle) -> Self {
        self.canvas_style = Arc::new(style);
        self
    }

    pub fn with_view_mode(mut self, mode: ViewMode) -> Self {
        self.view_mode = mode;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn components(&self) -> &[Arc<Component>] {
        &self.components
    }

    pub fn placeholders(&self) -> &[Placeholder] {
        &self.placeholders
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn canvas_style(&self) -> &CanvasStyle {
        &self.canvas_style
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Position of the component with `id` in render order
    pub fn index_of(&self, id: &ComponentId) -> Option<usize> {
        self.components.iter().position(|c| &c.id == id)
    }

    pub fn component(&self, id: &ComponentId) -> Option<&Component> {
        self.components
            .iter()
            .find(|c| &c.id == id)
            .map(|c| c.as_ref())
    }

    /// The selected component, if the selection still resolves
    pub fn selected_element(&self) -> Option<&Component> {
        self.selected.as_ref().and_then(|id| self.component(id))
    }

    /// Repair documents from outside the store so ids and placeholder keys are
    /// unique. Later components repeating an id get a fresh one; repeated
    /// placeholder keys fold into the first entry with the last description.
    /// Returns the number of entries changed or dropped.
    pub(crate) fn normalize(&mut self) -> usize {
        let mut repaired = 0;

        let mut seen = HashSet::new();
        for component in &mut self.components {
            if !seen.insert(component.id.clone()) {
                let fresh = ComponentId::generate();
                warn!(
                    "Duplicate component id {}, reassigned as {}",
                    component.id, fresh
                );
                Arc::make_mut(component).id = fresh.clone();
                seen.insert(fresh);
                repaired += 1;
            }
        }

        let keys = self.placeholders.iter().map(|p| p.key.as_str());
        if keys.collect::<HashSet<_>>().len() < self.placeholders.len() {
            let mut merged: Vec<Placeholder> = Vec::new();
            for placeholder in self.placeholders.iter() {
                match merged.iter_mut().find(|p| p.key == placeholder.key) {
                    Some(existing) => {
                        warn!(
                            "Duplicate placeholder key {:?}, keeping last description",
                            placeholder.key
                        );
                        existing.description = placeholder.description.clone();
                        repaired += 1;
                    }
                    None => merged.push(placeholder.clone()),
                }
            }
            self.placeholders = Arc::new(merged);
        }

        self.resolve_selection();
        repaired
    }

    /// Drop the selection when it no longer points at a live component
    pub(crate) fn resolve_selection(&mut self) {
        if let Some(id) = &self.selected
            && self.index_of(id).is_none()
        {
            self.selected = None;
        }
    }
}
