//! Configuration for compass
//!
//! Read from `--config PATH`, or else `config.toml` under
//! `$COMPASS_CONFIG_DIR` / the platform config dir (`~/.config/compass`).
//! A missing file means defaults; command-line flags override both.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CompassError, Result};
use crate::format::OutputFormat;
use crate::loader::{DataPaths, DEFAULT_DATA_DIRS};

const CONFIG_DIR: &str = "compass";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "COMPASS_CONFIG_DIR";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory holding `edges.csv` and `classes.csv`
    pub dir: Option<PathBuf>,
    /// Explicit edge table, overriding `dir`
    pub edges: Option<PathBuf>,
    /// Explicit class table, overriding `dir`
    pub classes: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompassConfig {
    pub data: DataConfig,
    pub output: OutputConfig,
}

impl CompassConfig {
    /// Path of the user-level config file
    pub fn default_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    CompassError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CompassError::io_operation("read config", path.display(), e))?;
        Ok(toml::from_str(&content)?)
    }

    /// Load `explicit` if given (it must exist), else the user config if present
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match Self::default_path() {
            Ok(path) if path.is_file() => {
                tracing::debug!(path = %path.display(), "loading user config");
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Work out where the data tables live.
    ///
    /// Explicit file paths win; then the configured directory; then the
    /// first of the default directories holding both tables.
    pub fn data_paths(&self) -> Result<DataPaths> {
        if let (Some(edges), Some(classes)) = (&self.data.edges, &self.data.classes) {
            return Ok(DataPaths {
                edges: edges.clone(),
                classes: classes.clone(),
            });
        }

        let base = match &self.data.dir {
            Some(dir) => DataPaths::in_dir(dir),
            None => DataPaths::locate(&DEFAULT_DATA_DIRS)?,
        };

        Ok(DataPaths {
            edges: self.data.edges.clone().unwrap_or(base.edges),
            classes: self.data.classes.clone().unwrap_or(base.classes),
        })
    }
}
