use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeConfig,
    pub panel: PanelConfig,
    pub font: FontConfig,
    pub preview: PreviewConfig,
    pub ui: UiConfig,
}

/// Theme configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ThemeConfig {
    /// "dark" or "light"
    pub mode: String,
}

/// Panel layout configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PanelConfig {
    /// Width of the file list pane (in pixels)
    pub files_width: f32,
}

/// Font configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FontConfig {
    /// Size of the preview text (in points)
    pub font_size: f32,
}

/// Preview handler configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PreviewConfig {
    /// Names of the handlers to enable, e.g. "text", "binary"
    pub enabled_handlers: Vec<String>,
}

/// UI behavior configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UiConfig {
    /// Show hidden files by default
    pub show_hidden: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            theme: ThemeConfig {
                mode: "dark".to_string(),
            },
            panel: PanelConfig { files_width: 260.0 },
            font: FontConfig { font_size: 13.0 },
            preview: PreviewConfig {
                enabled_handlers: vec!["text".to_string(), "binary".to_string()],
            },
            ui: UiConfig { show_hidden: false },
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "textpeek")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from file, or return defaults if the file is missing or broken
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Config::default();
        };
        if !path.exists() {
            return Config::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{}; using default configuration", e);
                Config::default()
            }
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(ConfigError::ReadFailed)?;
        toml::from_str(&contents).map_err(ConfigError::ParseFailed)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::config_path().ok_or(ConfigError::NoDirFound)?;
        self.save_to(&path)
    }

    /// Save configuration to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::WriteFailed)?;
        }
        let contents = toml::to_string_pretty(self).map_err(ConfigError::SerializeFailed)?;
        fs::write(path, contents).map_err(ConfigError::WriteFailed)
    }

    /// Create a default config file if it doesn't exist
    pub fn create_default() -> Result<PathBuf, ConfigError> {
        let path = Self::config_path().ok_or(ConfigError::NoDirFound)?;
        if !path.exists() {
            Config::default().save_to(&path)?;
            info!("Wrote default configuration to {}", path.display());
        }
        Ok(path)
    }

    pub fn is_dark(&self) -> bool {
        !self.theme.mode.eq_ignore_ascii_case("light")
    }
}
