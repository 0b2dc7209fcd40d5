//! Content blocks placed on the template canvas.
//!
//! A [`Component`] is created through [`Component::new`], which stamps a fresh
//! id and applies the editor defaults for its [`ComponentType`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::fmt;
use std::str::FromStr;

use crate::error::TemplateError;

/// Style properties keyed by CSS camelCase name, in insertion order.
pub type Style = Map<String, Value>;

/// Opaque component identifier, unique within a document
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(String);

impl ComponentId {
    /// Generate a fresh random id
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ComponentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ComponentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The closed set of block kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentType {
    #[serde(rename = "container")]
    Container,
    #[serde(rename = "button")]
    Button,
    #[serde(rename = "heading")]
    Heading,
    #[serde(rename = "text")]
    Text,
    #[serde(rename = "codeblock")]
    CodeBlock,
    #[serde(rename = "image")]
    Image,
    #[serde(rename = "codeinline")]
    CodeInline,
    #[serde(rename = "divider")]
    Divider,
    #[serde(rename = "link")]
    Link,
    #[serde(rename = "column")]
    Column,
    #[serde(rename = "2-column")]
    TwoColumn,
    #[serde(rename = "3-column")]
    ThreeColumn,
    #[serde(rename = "4-column")]
    FourColumn,
}

impl ComponentType {
    /// Get all component types in palette order
    pub fn all() -> &'static [ComponentType] {
        &[
            ComponentType::Container,
            ComponentType::Button,
            ComponentType::Heading,
            ComponentType::Text,
            ComponentType::CodeBlock,
            ComponentType::Image,
            ComponentType::CodeInline,
            ComponentType::Divider,
            ComponentType::Link,
            ComponentType::Column,
            ComponentType::TwoColumn,
            ComponentType::ThreeColumn,
            ComponentType::FourColumn,
        ]
    }

    /// Wire name, as used in persisted documents and palette ids
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::Container => "container",
            ComponentType::Button => "button",
            ComponentType::Heading => "heading",
            ComponentType::Text => "text",
            ComponentType::CodeBlock => "codeblock",
            ComponentType::Image => "image",
            ComponentType::CodeInline => "codeinline",
            ComponentType::Divider => "divider",
            ComponentType::Link => "link",
            ComponentType::Column => "column",
            ComponentType::TwoColumn => "2-column",
            ComponentType::ThreeColumn => "3-column",
            ComponentType::FourColumn => "4-column",
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentType {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComponentType::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| TemplateError::UnknownComponentType(s.to_string()))
    }
}

/// Heading tag used when `type == heading`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
}

/// A single placeable content block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub(crate) id: ComponentId,
    #[serde(rename = "type")]
    pub(crate) kind: ComponentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub style: Style,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(rename = "as", default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<HeadingLevel>,
}

impl Component {
    /// Create a component of `kind` with a fresh id and the editor defaults
    pub fn new(kind: ComponentType) -> Self {
        let mut component = Self::bare(ComponentId::generate(), kind);
        component.apply_defaults();
        component
    }

    /// A component with no content and an empty style
    pub fn bare(id: ComponentId, kind: ComponentType) -> Self {
        Self {
            id,
            kind,
            content: None,
            placeholder: None,
            style: Style::new(),
            href: None,
            src: None,
            alt: None,
            heading: None,
        }
    }

    pub fn id(&self) -> &ComponentId {
        &self.id
    }

    pub fn kind(&self) -> ComponentType {
        self.kind
    }

    /// Copy every field except the id, which is freshly generated
    pub fn duplicate(&self) -> Self {
        Self {
            id: ComponentId::generate(),
            ..self.clone()
        }
    }

    fn apply_defaults(&mut self) {
        match self.kind {
            ComponentType::Button => {
                self.href = Some("#".into());
                self.content = Some("Button".into());
                self.style = style_of(json!({
                    "backgroundColor": "#5e6ad2",
                    "borderRadius": "3px",
                    "fontWeight": "600",
                    "color": "#fff",
                    "fontSize": "15px",
                    "textDecoration": "none",
                    "textAlign": "center",
                    "display": "block",
                    "padding": "11px 23px",
                }));
            }
            ComponentType::Heading => {
                self.content = Some("Title".into());
                self.heading = Some(HeadingLevel::H1);
            }
            ComponentType::Text => {
                self.style = style_of(json!({
                    "fontSize": "14px",
                    "color": "#000000",
                }));
                self.content = Some("Add your text here".into());
            }
            ComponentType::Divider => {
                self.style
                    .insert("borderColor".into(), Value::from("#dfe1e4"));
            }
            ComponentType::Image => {
                self.src = Some(String::new());
                self.alt = Some("Image description".into());
                self.style = style_of(json!({ "width": "100%" }));
            }
            ComponentType::Container => {
                self.style = style_of(json!({
                    "margin": "0 auto",
                    "padding": "20px 0 48px",
                    "maxWidth": "560px",
                }));
            }
            ComponentType::Link => {
                self.href = Some("#".into());
                self.content = Some("Link".into());
                self.style = style_of(json!({
                    "color": "#5e6ad2",
                    "textDecoration": "underline",
                }));
            }
            ComponentType::CodeBlock => {
                self.content = Some("Code Block".into());
                self.style = style_of(json!({
                    "backgroundColor": "#f6f8fa",
                    "borderRadius": "3px",
                    "fontSize": "13px",
                    "lineHeight": "1.4",
                    "overflowWrap": "break-word",
                    "wordWrap": "break-word",
                    "hyphens": "auto",
                    "padding": "16px",
                }));
            }
            ComponentType::Column => {
                self.style = style_of(json!({
                    "padding": "10px",
                    "width": "50%",
                }));
            }
            ComponentType::CodeInline
            | ComponentType::TwoColumn
            | ComponentType::ThreeColumn
            | ComponentType::FourColumn => {}
        }
    }
}

fn style_of(value: Value) -> Style {
    match value {
        Value::Object(map) => map,
        _ => Style::new(),
    }
}
