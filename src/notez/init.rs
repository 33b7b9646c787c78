use crate::api::NotezApi;
use crate::commands::NotezPaths;
use crate::config::NotezConfig;
use crate::error::{NotezError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const HOME_ENV: &str = "NOTEZ_HOME";

pub struct NotezContext {
    pub api: NotezApi<FileStore>,
    pub config: NotezConfig,
}

/// Picks the data directory: an explicit override, then `$NOTEZ_HOME`, then
/// the platform data dir.
pub fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "notez", "notez")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| NotezError::Store("Could not determine a data directory".to_string()))
}

pub fn initialize(data_dir: &Path) -> NotezContext {
    let config = match NotezConfig::load(data_dir) {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "unreadable config, using defaults");
            NotezConfig::default()
        }
    };
    debug!(data_dir = %data_dir.display(), key = %config.storage_key, "initializing");

    let store = FileStore::new(data_dir.to_path_buf()).with_key(&config.storage_key);
    let paths = NotezPaths {
        data_dir: data_dir.to_path_buf(),
    };
    let api = NotezApi::new(store, paths);

    NotezContext { api, config }
}
