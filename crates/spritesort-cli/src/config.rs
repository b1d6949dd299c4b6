//! Sort configuration: config files, command-line overrides, and defaults.
//!
//! A config file may be JSON or YAML, dispatched by extension. Recognized
//! keys are `inputPath`, `outputPath`, `width`, and `height`. Values given on
//! the command line take precedence over the file, which takes precedence
//! over the built-in defaults.

use serde::Deserialize;
use spritesort_core::{GridSize, SortError, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Input path used when neither the command line nor a config file names one.
pub const DEFAULT_INPUT_PATH: &str = "resources/characters2.json";

/// Recognized JSON extensions.
pub const JSON_EXTENSIONS: &[&str] = &["json"];

/// Recognized YAML extensions.
pub const YAML_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// Errors that can occur while loading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown config file extension: {extension:?} (expected json, yaml, or yml)")]
    UnknownExtension { extension: Option<String> },

    #[error("invalid JSON config {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid YAML config {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Settings as they appear in a config file or on the command line.
///
/// Every field is optional; missing values fall through to the next source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SortSettings {
    #[serde(default)]
    pub input_path: Option<PathBuf>,
    #[serde(default)]
    pub output_path: Option<PathBuf>,
    #[serde(default)]
    pub width: Option<usize>,
    #[serde(default)]
    pub height: Option<usize>,
}

impl SortSettings {
    /// Loads settings from a JSON or YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        let is_json = extension
            .as_deref()
            .is_some_and(|e| JSON_EXTENSIONS.contains(&e));
        let is_yaml = extension
            .as_deref()
            .is_some_and(|e| YAML_EXTENSIONS.contains(&e));
        if !is_json && !is_yaml {
            return Err(ConfigError::UnknownExtension { extension });
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        if is_json {
            serde_json::from_str(&content).map_err(|source| ConfigError::Json {
                path: path.to_path_buf(),
                source,
            })
        } else {
            serde_yaml::from_str(&content).map_err(|source| ConfigError::Yaml {
                path: path.to_path_buf(),
                source,
            })
        }
    }

    /// Layers `self` over `base`: values set here win.
    pub fn or(self, base: SortSettings) -> SortSettings {
        SortSettings {
            input_path: self.input_path.or(base.input_path),
            output_path: self.output_path.or(base.output_path),
            width: self.width.or(base.width),
            height: self.height.or(base.height),
        }
    }
}

/// Fully resolved configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortConfig {
    pub input_path: PathBuf,
    /// `None` means standard output.
    pub output_path: Option<PathBuf>,
    pub grid: GridSize,
}

impl SortConfig {
    /// Fills unset values with defaults and validates the grid.
    pub fn from_settings(settings: SortSettings) -> Result<Self, SortError> {
        let grid = GridSize::new(
            settings.width.unwrap_or(DEFAULT_WIDTH),
            settings.height.unwrap_or(DEFAULT_HEIGHT),
        )?;
        Ok(Self {
            input_path: settings
                .input_path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_PATH)),
            output_path: settings.output_path,
            grid,
        })
    }

    /// Resolves command-line overrides over an optional config file.
    pub fn resolve(config_path: Option<&Path>, overrides: SortSettings) -> anyhow::Result<Self> {
        let file_settings = match config_path {
            Some(path) => SortSettings::load(path)?,
            None => SortSettings::default(),
        };
        Ok(Self::from_settings(overrides.or(file_settings))?)
    }
}
