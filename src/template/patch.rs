//! Partial component updates issued by property editors.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::component::{Component, HeadingLevel, Style};

/// Fields to overwrite on a component.
///
/// The merge is shallow: a present `style` replaces the whole style map.
/// Optional fields distinguish "absent" (left alone) from `null` (cleared):
/// `{"href": null}` removes the link target. `id` and `type` are not patchable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComponentPatch {
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub content: Option<Option<String>>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub href: Option<Option<String>>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub src: Option<Option<String>>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub alt: Option<Option<String>>,
    #[serde(
        rename = "as",
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub heading: Option<Option<HeadingLevel>>,
}

/// A key that is present maps to `Some`, even when its value is `null`
fn present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl ComponentPatch {
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(Some(content.into())),
            ..Default::default()
        }
    }

    pub fn style(style: Style) -> Self {
        Self {
            style: Some(style),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Shallow-merge into `component`
    pub fn apply(self, component: &mut Component) {
        if let Some(content) = self.content {
            component.content = content;
        }
        if let Some(placeholder) = self.placeholder {
            component.placeholder = placeholder;
        }
        if let Some(style) = self.style {
            component.style = style;
        }
        if let Some(href) = self.href {
            component.href = href;
        }
        if let Some(src) = self.src {
            component.src = src;
        }
        if let Some(alt) = self.alt {
            component.alt = alt;
        }
        if let Some(heading) = self.heading {
            component.heading = heading;
        }
    }
}

/// Copy of `style` with one property set
pub fn with_style_property(style: &Style, name: &str, value: Value) -> Style {
    let mut style = style.clone();
    style.insert(name.to_string(), value);
    style
}
