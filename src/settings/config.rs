//! Settings persistence for location and calculation preferences

use crate::error::{AppError, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Portable mode marker filename
const PORTABLE_MARKER: &str = "portable.txt";

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.toml";

/// Environment override for the settings directory (used by tests)
const SETTINGS_DIR_ENV: &str = "ADHAN_TIMES_CONFIG_DIR";

/// How a location is obtained for API queries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationMode {
    /// Resolve the device's current position
    #[default]
    Geo,
    /// Use the configured city and country
    City,
}

/// Persisted user settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub location_mode: LocationMode,

    #[serde(default)]
    pub city: String,

    #[serde(default)]
    pub country: String,

    /// Calculation method id (ISNA by default)
    #[serde(default = "default_method")]
    pub method: String,

    /// Asr jurisprudence school id
    #[serde(default = "default_zero")]
    pub school: String,

    /// Signed day offset reconciling the calculated Hijri date
    #[serde(default = "default_zero")]
    pub hijri_adjustment: String,

    /// Logging settings
    #[serde(default)]
    pub logging: LogSettings,
}

fn default_method() -> String {
    "2".to_string()
}

fn default_zero() -> String {
    "0".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            location_mode: LocationMode::Geo,
            city: String::new(),
            country: String::new(),
            method: default_method(),
            school: default_zero(),
            hijri_adjustment: default_zero(),
            logging: LogSettings::default(),
        }
    }
}

impl Settings {
    /// Copy with city/country whitespace trimmed, as written on save
    pub fn normalized(&self) -> Settings {
        let mut record = self.clone();
        record.city = record.city.trim().to_string();
        record.country = record.country.trim().to_string();
        record
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Maximum log file size in bytes
    #[serde(default = "default_max_log_size")]
    pub max_file_size: u64,

    /// Number of log files to keep
    #[serde(default = "default_max_log_files")]
    pub max_files: u32,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_log_size() -> u64 {
    2 * 1024 * 1024 // 2MB
}

fn default_max_log_files() -> u32 {
    2
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            max_file_size: default_max_log_size(),
            max_files: default_max_log_files(),
        }
    }
}

/// Manages settings loading and saving
pub struct SettingsStore {
    settings_path: PathBuf,
    is_portable: bool,
}

impl SettingsStore {
    /// Create a new store, detecting portable vs installed mode
    pub fn new() -> Result<Self> {
        let (settings_path, is_portable) = Self::detect_settings_path()?;
        Ok(Self {
            settings_path,
            is_portable,
        })
    }

    /// Detect whether we're running in portable mode and get the settings path
    fn detect_settings_path() -> Result<(PathBuf, bool)> {
        if let Ok(dir) = std::env::var(SETTINGS_DIR_ENV) {
            debug!("Settings directory overridden via {}", SETTINGS_DIR_ENV);
            return Ok((PathBuf::from(dir).join(SETTINGS_FILENAME), false));
        }

        let exe_path = std::env::current_exe()
            .map_err(|e| AppError::ConfigError(format!("Could not get exe path: {}", e)))?;
        let exe_dir = exe_path
            .parent()
            .ok_or_else(|| AppError::ConfigError("Could not get exe directory".to_string()))?;

        // Check for portable marker
        let portable_marker = exe_dir.join(PORTABLE_MARKER);
        if portable_marker.exists() {
            debug!("Portable mode detected via marker file");
            return Ok((exe_dir.join(SETTINGS_FILENAME), true));
        }

        // Installed mode - use the per-user config directory
        let config_base = std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|_| {
                std::env::var("HOME").map(|home| PathBuf::from(home).join(".config"))
            })
            .map_err(|_| AppError::ConfigError("Neither XDG_CONFIG_HOME nor HOME set".to_string()))?;

        Ok((config_base.join("adhan-times").join(SETTINGS_FILENAME), false))
    }

    /// Check if running in portable mode
    pub fn is_portable(&self) -> bool {
        self.is_portable
    }

    /// Get the settings file path
    pub fn settings_path(&self) -> &PathBuf {
        &self.settings_path
    }

    /// Get the log directory
    pub fn log_dir(&self) -> PathBuf {
        if self.is_portable {
            self.settings_path.parent().unwrap().join("logs")
        } else {
            self.settings_path.parent().unwrap().to_path_buf()
        }
    }

    /// Load settings, merging the persisted file over defaults
    pub fn load(&self) -> Result<Settings> {
        if !self.settings_path.exists() {
            info!("Settings file not found, using defaults");
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(&self.settings_path)
            .map_err(|e| AppError::ConfigError(format!("Could not read settings: {}", e)))?;

        let settings: Settings = toml::from_str(&content)
            .map_err(|e| AppError::ConfigError(format!("Could not parse settings: {}", e)))?;

        debug!("Loaded settings from {:?}", self.settings_path);
        Ok(settings)
    }

    /// Save the full record back, trimming city/country whitespace
    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.settings_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let record = settings.normalized();
        let content = toml::to_string_pretty(&record)
            .map_err(|e| AppError::ConfigError(format!("Could not serialize settings: {}", e)))?;

        fs::write(&self.settings_path, content)
            .map_err(|e| AppError::ConfigError(format!("Could not write settings: {}", e)))?;

        info!("Saved settings to {:?}", self.settings_path);
        Ok(())
    }
}
