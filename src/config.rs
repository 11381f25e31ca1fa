use std::path::Path;

use crate::error::ConfigError;
use crate::game::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
}

/// Board dimensions, fixed for the lifetime of a game.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            board: BoardConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.width == 0 {
            return Err(ConfigError::Validation("board.width must be > 0".into()));
        }
        if self.board.height == 0 {
            return Err(ConfigError::Validation("board.height must be > 0".into()));
        }
        if self.board.width < 4 && self.board.height < 4 {
            return Err(ConfigError::Validation(
                "board must fit four in a row (width or height must be >= 4)".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
