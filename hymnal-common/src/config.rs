//! Configuration loading and data folder resolution
//!
//! Bootstrap settings come from an optional TOML file. The data folder that
//! holds the catalog and the two documents is resolved in priority order:
//! 1. Command-line argument (highest priority)
//! 2. `HYMNAL_DATA_DIR` environment variable
//! 3. `data_dir` in the TOML config file
//! 4. OS-dependent default (fallback)

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable naming the data folder
pub const DATA_DIR_ENV: &str = "HYMNAL_DATA_DIR";

/// Settings read from `config.toml`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TomlConfig {
    /// Folder holding catalog and documents (optional)
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Catalog file, relative to the data folder unless absolute
    #[serde(default = "default_catalog_file")]
    pub catalog_file: PathBuf,

    #[serde(default = "default_tags_file")]
    pub tags_file: PathBuf,

    #[serde(default = "default_history_file")]
    pub history_file: PathBuf,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub report: ReportConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// History report output settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ReportConfig {
    #[serde(default = "default_report_output")]
    pub output: PathBuf,

    #[serde(default = "default_report_width")]
    pub width: u32,

    #[serde(default = "default_report_height")]
    pub height: u32,
}

fn default_catalog_file() -> PathBuf {
    PathBuf::from("hymns.csv")
}

fn default_tags_file() -> PathBuf {
    PathBuf::from("tags.json")
}

fn default_history_file() -> PathBuf {
    PathBuf::from("history.json")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_report_output() -> PathBuf {
    PathBuf::from("history.svg")
}

fn default_report_width() -> u32 {
    1500
}

fn default_report_height() -> u32 {
    800
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            catalog_file: default_catalog_file(),
            tags_file: default_tags_file(),
            history_file: default_history_file(),
            logging: LoggingConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output: default_report_output(),
            width: default_report_width(),
            height: default_report_height(),
        }
    }
}

impl TomlConfig {
    /// Read and parse a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Read {} failed: {}", path.display(), e)))?;
        let config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Parse {} failed: {}", path.display(), e)))?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load an explicitly given file, else the platform default file if it
    /// exists, else built-in defaults
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match default_config_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => {
                info!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }
}

/// Platform config file location, e.g. `~/.config/hymnal/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("hymnal").join("config.toml"))
}

/// OS-dependent default data folder
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("hymnal"))
        .unwrap_or_else(|| PathBuf::from("./hymnal_data"))
}

/// Resolve the data folder following the priority order above
pub fn resolve_data_dir(cli_arg: Option<&Path>, config: &TomlConfig) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(DATA_DIR_ENV) {
        if !path.trim().is_empty() {
            return PathBuf::from(path);
        }
        warn!("{} is set but empty; ignoring", DATA_DIR_ENV);
    }

    // Priority 3: TOML config file
    if let Some(path) = &config.data_dir {
        return path.clone();
    }

    // Priority 4: OS-dependent default
    default_data_dir()
}

/// Locations of the three data files for one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub catalog: PathBuf,
    pub tags: PathBuf,
    pub history: PathBuf,
}

impl DataPaths {
    /// Place the configured file names inside `data_dir` (absolute names are kept)
    pub fn in_dir(data_dir: &Path, config: &TomlConfig) -> Self {
        Self {
            catalog: data_dir.join(&config.catalog_file),
            tags: data_dir.join(&config.tags_file),
            history: data_dir.join(&config.history_file),
        }
    }
}
