//! Document-wide canvas style.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Presentation of the email body itself
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasStyle {
    pub background_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Any other properties, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for CanvasStyle {
    fn default() -> Self {
        Self {
            background_color: "#1c1919".to_string(),
            padding: Some("10px".to_string()),
            font_family: None,
            text_color: None,
            width: None,
            extra: Map::new(),
        }
    }
}

/// Partial canvas style update; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CanvasStylePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CanvasStylePatch {
    pub fn is_empty(&self) -> bool {
        self.background_color.is_none()
            && self.padding.is_none()
            && self.font_family.is_none()
            && self.text_color.is_none()
            && self.width.is_none()
            && self.extra.is_empty()
    }

    /// Build a patch touching one property by its camelCase name
    pub fn property(name: &str, value: Value) -> Self {
        let mut patch = Self::default();
        match (name, value) {
            ("backgroundColor", Value::String(s)) => patch.background_color = Some(s),
            ("padding", Value::String(s)) => patch.padding = Some(s),
            ("fontFamily", Value::String(s)) => patch.font_family = Some(s),
            ("textColor", Value::String(s)) => patch.text_color = Some(s),
            ("width", Value::Number(n)) if n.as_f64().is_some() => patch.width = n.as_f64(),
            (other, value) => {
                patch.extra.insert(other.to_string(), value);
            }
        }
        patch
    }
}

impl CanvasStyle {
    /// Shallow-merge `patch` into this style
    pub fn merge(&mut self, patch: CanvasStylePatch) {
        if let Some(color) = patch.background_color {
            self.background_color = color;
        }
        if patch.padding.is_some() {
            self.padding = patch.padding;
        }
        if patch.font_family.is_some() {
            self.font_family = patch.font_family;
        }
        if patch.text_color.is_some() {
            self.text_color = patch.text_color;
        }
        if patch.width.is_some() {
            self.width = patch.width;
        }
        self.extra.extend(patch.extra);
    }
}
