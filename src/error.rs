//! # Error Types
//!
//! Store operations never fail; these cover the fallible edges around them:
//! storage, configuration, import/export and the command shell.

use thiserror::Error;

/// Main error type for mailforged operations
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Component type name outside the closed set
    #[error("Unknown component type: {0}")]
    UnknownComponentType(String),

    /// View mode name outside desktop/mobile/code
    #[error("Unknown view mode: {0}")]
    UnknownViewMode(String),

    /// Persisted entry written by an incompatible version
    #[error("Unsupported persisted version: {0}")]
    UnsupportedVersion(u32),

    /// Key-value storage backend failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// Malformed shell input
    #[error("Usage: {0}")]
    Usage(String),

    /// JSON encoding or decoding failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
