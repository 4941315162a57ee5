//! Configuration: id prefix, warning text and keybinding overrides
//!
//! Effective config is built as defaults <- JSON file <- CLI flags.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;
use crate::item::DEFAULT_ID_PREFIX;
use crate::keybindings::Keybindings;
use crate::state::EMPTY_WARNING;

/// Application configuration
///
/// All fields are optional in the file:
///
/// ```json
/// {
///   "id_prefix": "listItem",
///   "keybindings": { "add": ["n"] }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Prefix of generated item ids
    pub id_prefix: String,

    /// Banner text for remove on an empty list
    pub empty_warning: String,

    /// Keybindings; entries in a file override the defaults per command
    pub keybindings: Keybindings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
            empty_warning: EMPTY_WARNING.to_string(),
            keybindings: Keybindings::defaults(),
        }
    }
}

impl Config {
    /// `<config dir>/dynlist/config.json`, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("dynlist").join("config.json"))
    }

    /// Parse a config from JSON text, merging keybindings onto the defaults
    pub fn from_json(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let mut config: Config =
            serde_json::from_str(text).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.keybindings = Keybindings::merge(Keybindings::defaults(), config.keybindings);
        config.validate()?;
        Ok(config)
    }

    /// Load and validate the config at `path`
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config");
        Self::from_json(&text, path)
    }

    /// Load the config at [`Config::default_path`], or defaults if there is none
    pub fn load_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.id_prefix.is_empty() {
            return Err(ConfigError::EmptyPrefix);
        }
        self.keybindings.validate()
    }

    /// Pretty JSON of the effective config
    pub fn to_json(&self) -> String {
        // Plain data with string keys, cannot fail
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
