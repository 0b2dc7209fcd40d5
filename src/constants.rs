//! Centralized constants used across the application.

/// Maximum number of snapshots kept on the undo stack
pub const MAX_HISTORY_SIZE: usize = 100;

/// Name given to new and reset templates
pub const DEFAULT_TEMPLATE_NAME: &str = "Untitled Template";

/// Key of the single persisted template entry
pub const DEFAULT_STORAGE_KEY: &str = "email-template";

/// Version written into the persisted envelope
pub const PERSISTED_VERSION: u32 = 0;

/// Source id prefix marking an unplaced palette item
pub const PALETTE_PREFIX: &str = "new-";

/// Drop target id meaning the canvas itself
pub const CANVAS_TARGET: &str = "canvas";
