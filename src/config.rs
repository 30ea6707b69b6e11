use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use vitae_export::DEFAULT_MAX_JSON_BYTES;
use vitae_layout::LayoutConfig;

use crate::photo::DEFAULT_MAX_PHOTO_BYTES;

/// Application settings. Every field has a default, so a config file only
/// needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VitaeConfig {
    /// Theme used when neither the stored state nor the document names a
    /// registered one.
    ///
    /// Defaults to `"basic"`.
    pub default_theme: String,

    /// Defaults to 5 MiB.
    pub max_photo_bytes: usize,

    /// Largest JSON file accepted for import.
    ///
    /// Defaults to 1 MiB.
    pub max_json_bytes: usize,

    /// Directory for persisted state. Without one, state lives in memory
    /// for the length of the process.
    pub state_dir: Option<PathBuf>,

    pub layout: LayoutConfig,
}

impl Default for VitaeConfig {
    fn default() -> Self {
        Self {
            default_theme: vitae_themes::DEFAULT_THEME.to_string(),
            max_photo_bytes: DEFAULT_MAX_PHOTO_BYTES,
            max_json_bytes: DEFAULT_MAX_JSON_BYTES,
            state_dir: None,
            layout: LayoutConfig::default(),
        }
    }
}

impl VitaeConfig {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded config from {}.", path.display());
        Ok(config)
    }
}
