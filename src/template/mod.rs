//! Template data model.
//!
//! ## Module Structure
//!
//! - [`component`] - Content blocks, their types and editor defaults
//! - [`canvas`] - Document-wide canvas style
//! - [`document`] - The document aggregate, placeholders and view modes
//! - [`patch`] - Partial component updates

pub mod canvas;
pub mod component;
pub mod document;
pub mod patch;

pub use canvas::{CanvasStyle, CanvasStylePatch};
pub use component::{Component, ComponentId, ComponentType, HeadingLevel, Style};
pub use document::{Document, Placeholder, ViewMode};
pub use patch::{ComponentPatch, with_style_property};
