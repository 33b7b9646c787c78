use crate::commands::list::SortOption;
use crate::error::{NotezError, Result};
use crate::store::fs::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::warn;

const CONFIG_FILENAME: &str = "config.json";

pub const CONFIG_KEYS: [&str; 3] = ["theme", "sort", "storage-key"];

/// Concrete color scheme used for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// The stored preference. `Auto` follows the desktop appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Auto,
    Light,
    Dark,
}

impl ThemePreference {
    pub fn resolve(self) -> Theme {
        match self {
            ThemePreference::Light => Theme::Light,
            ThemePreference::Dark => Theme::Dark,
            ThemePreference::Auto => match dark_light::detect() {
                dark_light::Mode::Light => Theme::Light,
                _ => Theme::Dark,
            },
        }
    }
}

impl From<Theme> for ThemePreference {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => ThemePreference::Light,
            Theme::Dark => ThemePreference::Dark,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ThemePreference::Auto => "auto",
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        };
        f.write_str(name)
    }
}

impl FromStr for ThemePreference {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ThemePreference::Auto),
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            other => Err(format!("Unknown theme: {} (expected auto, light or dark)", other)),
        }
    }
}

/// Configuration for notez, stored in `<data_dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotezConfig {
    #[serde(default)]
    pub theme: ThemePreference,

    /// Order used by `list` when no `--sort` is given. `None` keeps manual order.
    #[serde(default)]
    pub default_sort: Option<SortOption>,

    /// Name of the storage slot holding the notes (`<key>.json`)
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

/// Storage keys become file names, so only letters, digits, '-' and '_'.
pub fn is_valid_storage_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

impl Default for NotezConfig {
    fn default() -> Self {
        Self {
            theme: ThemePreference::default(),
            default_sort: None,
            storage_key: default_storage_key(),
        }
    }
}

impl NotezConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(NotezError::Io)?;
        let mut config: NotezConfig =
            serde_json::from_str(&content).map_err(NotezError::Serialization)?;
        if !is_valid_storage_key(&config.storage_key) {
            warn!(key = %config.storage_key, "invalid storage key in config, using default");
            config.storage_key = default_storage_key();
        }
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(NotezError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(NotezError::Serialization)?;
        fs::write(config_path, content).map_err(NotezError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "theme" => Some(self.theme.to_string()),
            "sort" => Some(
                self.default_sort
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "none".to_string()),
            ),
            "storage-key" => Some(self.storage_key.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "theme" => {
                self.theme = value.parse().map_err(NotezError::Config)?;
            }
            "sort" => {
                self.default_sort = if value == "none" {
                    None
                } else {
                    Some(value.parse().map_err(NotezError::Config)?)
                };
            }
            "storage-key" => {
                if !is_valid_storage_key(value) {
                    return Err(NotezError::Config(format!(
                        "Invalid storage key: {:?} (use letters, digits, '-' or '_')",
                        value
                    )));
                }
                self.storage_key = value.to_string();
            }
            other => return Err(NotezError::Config(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }
}
