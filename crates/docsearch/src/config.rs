use std::path::{Path, PathBuf};
use std::time::Duration;

use pagesource::ThumbnailSize;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};

pub const SEARCH_CONFIG_FILENAME: &str = "search.json";
pub const SEARCH_CONFIG_VERSION: &str = "1.0.0";

/// Tunables for a search session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    pub version: String,
    /// Quiet period after the last keystroke before a scan starts.
    pub debounce_ms: u64,
    /// Cadence at which accumulated matches are flushed to the caller.
    pub batch_interval_ms: u64,
    /// Whether query matching is exact as typed.
    pub case_sensitive: bool,
    pub thumbnail: ThumbnailSize,
    /// Capacity of the outbound event bus.
    pub bus_capacity: usize,
}

impl SearchConfig {
    pub fn default_new() -> Self {
        Self {
            version: SEARCH_CONFIG_VERSION.to_string(),
            debounce_ms: 300,
            batch_interval_ms: 1_000,
            case_sensitive: true,
            thumbnail: ThumbnailSize::new(400, 600),
            bus_capacity: 32,
        }
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn batch_interval(&self) -> Duration {
        Duration::from_millis(self.batch_interval_ms)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::default_new()
    }
}

pub fn search_config_path(dir: &Path) -> PathBuf {
    dir.join(SEARCH_CONFIG_FILENAME)
}

/// Loads the config from `dir`, writing the defaults first if none exists.
pub fn load_or_create_search_config(dir: &Path) -> Result<SearchConfig> {
    std::fs::create_dir_all(dir).map_err(|error| SearchError::Config {
        path: dir.to_path_buf(),
        message: format!("failed to create config directory: {error}"),
    })?;

    let path = search_config_path(dir);
    if !path.exists() {
        let config = SearchConfig::default_new();
        write_search_config(&path, &config)?;
        return Ok(config);
    }

    let data = std::fs::read_to_string(&path).map_err(|error| SearchError::Config {
        path: path.clone(),
        message: format!("failed to read config: {error}"),
    })?;
    let config: SearchConfig = serde_json::from_str(&data).map_err(|error| SearchError::Config {
        path: path.clone(),
        message: format!("failed to parse config: {error}"),
    })?;

    if config.version != SEARCH_CONFIG_VERSION {
        return Err(SearchError::ConfigMigration(config.version));
    }

    Ok(config)
}

fn write_search_config(path: &Path, config: &SearchConfig) -> Result<()> {
    let data = serde_json::to_string_pretty(config).map_err(|error| SearchError::Config {
        path: path.to_path_buf(),
        message: format!("failed to serialize config: {error}"),
    })?;
    std::fs::write(path, data).map_err(|error| SearchError::Config {
        path: path.to_path_buf(),
        message: format!("failed to write config: {error}"),
    })
}
