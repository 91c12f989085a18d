//! Path management for outlay
//!
//! Provides XDG-compliant path resolution for configuration and data files.
//!
//! ## Path Resolution Order
//!
//! 1. `OUTLAY_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/outlay` or `~/.config/outlay`
//! 3. Windows: `%APPDATA%\outlay`

use std::path::PathBuf;

use crate::error::OutlayError;

/// Manages all paths used by outlay
#[derive(Debug, Clone)]
pub struct OutlayPaths {
    /// Base directory for all outlay data
    base_dir: PathBuf,
}

impl OutlayPaths {
    /// Create a new OutlayPaths instance
    ///
    /// Path resolution:
    /// 1. `OUTLAY_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/outlay` or `~/.config/outlay`
    /// 3. Windows: `%APPDATA%\outlay`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, OutlayError> {
        let base_dir = if let Ok(custom) = std::env::var("OUTLAY_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create OutlayPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/outlay/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the config directory (same as base for simplicity)
    pub fn config_dir(&self) -> PathBuf {
        self.base_dir.clone()
    }

    /// Get the data directory (~/.config/outlay/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to state.json (the persisted key-value state)
    pub fn state_file(&self) -> PathBuf {
        self.data_dir().join("state.json")
    }

    /// Ensure all required directories exist
    ///
    /// Creates:
    /// - Base directory (~/.config/outlay/)
    /// - Data directory (~/.config/outlay/data/)
    pub fn ensure_directories(&self) -> Result<(), OutlayError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| OutlayError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| OutlayError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if outlay has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, OutlayError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
    Ok(config_base.join("outlay"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, OutlayError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| OutlayError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("outlay"))
}
