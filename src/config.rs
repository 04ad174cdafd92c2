use std::path::Path;

use crate::error::ConfigError;
use crate::game::{DeckConfig, Rules};
use crate::scores::ScoreConfig;
use crate::ui::ConsoleConfig;

/// Log filter settings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` env-filter directive; `RUST_LOG` takes precedence.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            filter: "warn".to_string(),
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub deck: DeckConfig,
    pub rules: Rules,
    pub scores: ScoreConfig,
    pub console: ConsoleConfig,
    pub logging: LoggingConfig,
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

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.deck.rows == 0 {
            return Err(ConfigError::Validation("deck.rows must be > 0".into()));
        }
        if self.deck.cols == 0 {
            return Err(ConfigError::Validation("deck.cols must be > 0".into()));
        }
        self.deck
            .pairs()
            .map_err(|e| ConfigError::Validation(format!("deck: {e}")))?;

        if self.scores.capacity == 0 {
            return Err(ConfigError::Validation(
                "scores.capacity must be >= 1".into(),
            ));
        }
        if self.scores.path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "scores.path must not be empty".into(),
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
