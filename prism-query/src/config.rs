//! Configuration for request translation
//!
//! Default config location: ~/.prism/query.toml

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct QueryConfig {
    #[serde(default)]
    pub request: RequestConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RequestConfig {
    /// Upper bound for `from + size` (Elasticsearch `index.max_result_window`)
    #[serde(default = "default_max_result_window")]
    pub max_result_window: usize,
    /// Path segment used when a query names no indices
    #[serde(default = "default_all_indices")]
    pub all_indices: String,
    /// Sets `track_total_hits` on every request when present
    #[serde(default)]
    pub track_total_hits: Option<bool>,
}

fn default_max_result_window() -> usize {
    10_000
}

fn default_all_indices() -> String {
    "_all".to_string()
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            max_result_window: default_max_result_window(),
            all_indices: default_all_indices(),
            track_total_hits: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

/// `~/.prism/query.toml`
pub fn default_config_path() -> Result<PathBuf> {
    expand_tilde(Path::new("~/.prism/query.toml"))
}

/// Expand ~ to home directory in path
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let s = path.to_string_lossy();
    if let Some(rest) = s.strip_prefix("~/") {
        let home = dirs::home_dir().ok_or_else(|| anyhow!("Cannot determine home directory"))?;
        Ok(home.join(rest))
    } else if s == "~" {
        dirs::home_dir().ok_or_else(|| anyhow!("Cannot determine home directory"))
    } else {
        Ok(path.to_path_buf())
    }
}

impl QueryConfig {
    /// Load config from `path`, or defaults if the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        let path = expand_tilde(path)?;
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        let config: QueryConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let path = expand_tilde(path)?;
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.request.max_result_window == 0 {
            return Err(anyhow!("request.max_result_window must be greater than zero"));
        }
        if self.request.all_indices.trim().is_empty() {
            return Err(anyhow!("request.all_indices must not be empty"));
        }
        Ok(())
    }
}
