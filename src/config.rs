/// Application configuration, persisted as TOML (`churn.toml`).
///
/// Only ambient behaviour lives here: log filtering, an optional log directory
/// and JSON output style. The scoring weights are fixed in `engine.rs` and are
/// not configurable.
///
/// Lookup order for the file:
///   1. `--config <FILE>` on the command line
///   2. `./churn.toml`
///   3. built-in defaults
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ScorerError;

pub const CONFIG_FILE: &str = "churn.toml";

// ---------------------------------------------------------------------------
// AppConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// tracing-subscriber directive string. `RUST_LOG` wins when set.
    #[serde(default = "default_filter")]
    pub filter:    String,

    /// When set, logs go to a daily rolling `churn.log` in this directory
    /// instead of stderr.
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print JSON for `score` and `batch`. Examples are always compact.
    #[serde(default)]
    pub pretty: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub output:  OutputConfig,
}

fn default_filter() -> String { "churn_risk_lib=info".to_owned() }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter:    default_filter(),
            directory: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Load / save
// ---------------------------------------------------------------------------

pub fn load_or_default(config_dir: &Path) -> Result<AppConfig> {
    let path = config_dir.join(CONFIG_FILE);
    if path.exists() {
        load_from(&path)
    } else {
        Ok(AppConfig::default())
    }
}

/// Load an explicit file. Unlike `load_or_default`, a missing file is an error.
pub fn load_from(path: &Path) -> Result<AppConfig> {
    let raw = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&raw).map_err(|e| ScorerError::Config {
        path:    path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(cfg)
}

pub fn save(config: &AppConfig, config_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(config_dir)?;
    let raw = toml::to_string_pretty(config)
        .map_err(|e| anyhow::anyhow!("Config serialize error: {}", e))?;
    std::fs::write(config_dir.join(CONFIG_FILE), raw)?;
    Ok(())
}
