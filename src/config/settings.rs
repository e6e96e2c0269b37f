//! Application settings
//!
//! Stored as RON in the platform config directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::chart::{ChartKind, Viewport};

/// User-facing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Login shown in the profile panel
    pub login: String,
    /// JSON export of xp transactions
    pub records_path: PathBuf,
    /// Logical drawing surface
    pub viewport: Viewport,
    /// Chart shown on start-up
    pub initial_chart: ChartKind,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            login: "guest".to_string(),
            records_path: PathBuf::from("records.json"),
            viewport: Viewport::default(),
            initial_chart: ChartKind::LevelByTime,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("invalid viewport {width}x{height} in config {path:?}")]
    InvalidViewport { path: PathBuf, width: f64, height: f64 },
}

/// Default config file location
pub fn config_path() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "xpchart", "Xpchart") {
        let mut path = proj_dirs.config_dir().to_path_buf();
        path.push("config.ron");
        path
    } else {
        PathBuf::from("./config.ron")
    }
}

/// Load config from an explicit path
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let config: AppConfig = ron::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if !config.viewport.is_valid() {
        return Err(ConfigError::InvalidViewport {
            path: path.to_path_buf(),
            width: config.viewport.width,
            height: config.viewport.height,
        });
    }

    Ok(config)
}

/// Load config from the default location, falling back to defaults
pub fn load_config() -> AppConfig {
    let path = config_path();

    if path.exists() {
        match load_config_from(&path) {
            Ok(config) => {
                log::info!("Config loaded from {:?}", path);
                return config;
            }
            Err(e) => log::warn!("{}, using defaults", e),
        }
    }

    AppConfig::default()
}

/// Render a config as pretty RON
pub fn config_to_ron(config: &AppConfig) -> Result<String, ron::Error> {
    ron::ser::to_string_pretty(config, ron::ser::PrettyConfig::default())
}
