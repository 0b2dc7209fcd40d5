use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use crate::constants::{DEFAULT_STORAGE_KEY, MAX_HISTORY_SIZE};
use crate::editor::StoreOptions;
use crate::error::TemplateError;

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_history_limit() -> usize {
    MAX_HISTORY_SIZE
}

fn default_true() -> bool {
    true
}

/// Application configuration persisted to disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfigData {
    /// Directory holding the persisted template (platform data dir when unset)
    #[serde(default)]
    pub storage_dir: Option<PathBuf>,

    /// Name of the single persisted template entry
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Undo entries kept per session
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Write the template after every change
    #[serde(default = "default_true")]
    pub autosave: bool,

    /// Make duplicating a component undoable
    #[serde(default)]
    pub record_duplicates: bool,
}

impl Default for AppConfigData {
    fn default() -> Self {
        Self {
            storage_dir: None,
            storage_key: default_storage_key(),
            history_limit: default_history_limit(),
            autosave: true,
            record_duplicates: false,
        }
    }
}

impl AppConfigData {
    /// Effective storage directory
    pub fn storage_dir(&self) -> PathBuf {
        self.storage_dir
            .clone()
            .unwrap_or_else(crate::paths::storage_dir)
    }

    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            history_limit: self.history_limit,
            record_duplicates: self.record_duplicates,
        }
    }
}

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// The persisted configuration data
    pub data: AppConfigData,
    /// Path to the config file
    pub config_path: PathBuf,
    /// Whether config needs to be saved (dirty flag)
    pub dirty: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: AppConfigData::default(),
            config_path: crate::paths::config_file(),
            dirty: false,
        }
    }
}

/// Result of loading config from disk
#[derive(Debug)]
pub struct LoadConfigResult {
    pub config: AppConfig,
    /// Error message if config was reset to defaults due to an error
    pub reset_reason: Option<String>,
}

/// Load configuration from `config_path`, falling back to defaults
pub fn load_config(config_path: &Path) -> LoadConfigResult {
    let (data, reset_reason) = if config_path.exists() {
        match std::fs::read_to_string(config_path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(data) => {
                    info!("Loaded config from {:?}", config_path);
                    (data, None)
                }
                Err(e) => {
                    warn!("Failed to parse config file: {}", e);
                    (
                        AppConfigData::default(),
                        Some(format!("Configuration file was corrupted: {}", e)),
                    )
                }
            },
            Err(e) => {
                warn!("Failed to read config file: {}", e);
                (
                    AppConfigData::default(),
                    Some(format!("Could not read configuration file: {}", e)),
                )
            }
        }
    } else {
        info!("No config file found, using defaults");
        (AppConfigData::default(), None)
    };

    LoadConfigResult {
        config: AppConfig {
            data,
            config_path: config_path.to_path_buf(),
            dirty: false,
        },
        reset_reason,
    }
}

/// Save configuration to disk and clear the dirty flag
pub fn save_config(config: &mut AppConfig) -> Result<(), TemplateError> {
    let json = serde_json::to_string_pretty(&config.data).inspect_err(|e| {
        error!("Failed to serialize config: {}", e);
    })?;
    if let Some(parent) = config.config_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&config.config_path, json).inspect_err(|e| {
        error!("Failed to save config: {}", e);
    })?;
    info!("Config saved to {:?}", config.config_path);
    config.dirty = false;
    Ok(())
}
