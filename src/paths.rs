//! Where mailforged keeps its config file, stored templates and logs.
//!
//! Setting `MAILFORGED_HOME` puts everything under that one directory.
//! Otherwise paths resolve to platform-specific locations:
//! - Linux: `~/.config/mailforged/` (config), `~/.local/share/mailforged/` (data)
//! - macOS: `~/Library/Application Support/mailforged/`
//! - Windows: `%APPDATA%\mailforged\`

use std::path::PathBuf;

/// Environment variable overriding every directory
pub const HOME_ENV: &str = "MAILFORGED_HOME";

const APP_DIR: &str = "mailforged";

/// Resolved config and data roots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    pub config: PathBuf,
    pub data: PathBuf,
}

impl AppDirs {
    /// Resolve from the environment
    pub fn resolve() -> Self {
        Self::from_home(std::env::var_os(HOME_ENV).map(PathBuf::from))
    }

    /// Use `home` for both roots when given, platform directories otherwise
    pub fn from_home(home: Option<PathBuf>) -> Self {
        if let Some(home) = home {
            return Self {
                config: home.clone(),
                data: home,
            };
        }

        let data = dirs::data_dir()
            .map(|p| p.join(APP_DIR))
            .unwrap_or_else(|| PathBuf::from("."));
        let config = dirs::config_dir()
            .map(|p| p.join(APP_DIR))
            .unwrap_or_else(|| data.clone());
        Self { config, data }
    }

    pub fn config_file(&self) -> PathBuf {
        self.config.join("config.json")
    }

    /// Default directory for the stored template entry
    pub fn storage_dir(&self) -> PathBuf {
        self.data.join("storage")
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.data.join("logs")
    }

    /// Create the config, storage and log directories
    pub fn ensure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.config)?;
        std::fs::create_dir_all(self.storage_dir())?;
        std::fs::create_dir_all(self.logs_dir())
    }
}

pub fn config_file() -> PathBuf {
    AppDirs::resolve().config_file()
}

pub fn storage_dir() -> PathBuf {
    AppDirs::resolve().storage_dir()
}

pub fn logs_dir() -> PathBuf {
    AppDirs::resolve().logs_dir()
}

/// Called early in startup so first saves do not fail on a missing directory
pub fn ensure_directories() -> std::io::Result<()> {
    AppDirs::resolve().ensure()
}
