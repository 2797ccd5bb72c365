//! Optional per-store configuration file.
//!
//! Looked up as `rji.toml` inside the data directory unless `--config` names
//! a file explicitly:
//!
//! ```toml
//! [datasets]
//! participants = "PARTICIPANTES"
//! companions = "ACOMPANANTES"
//! reconciliation = "UNIFICADO"
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use rji_model::DatasetNames;

pub const CONFIG_FILENAME: &str = "rji.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RjiConfig {
    pub datasets: DatasetNames,
}

/// Default location of the configuration file for a data directory.
pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join(CONFIG_FILENAME)
}

/// Loads configuration for `data_dir`.
///
/// An explicit path must exist and parse. The implicit `rji.toml` falls back
/// to defaults when it is absent or unreadable.
pub fn load_config(explicit: Option<&Path>, data_dir: &Path) -> Result<RjiConfig> {
    if let Some(path) = explicit {
        let content = fs::read_to_string(path)
            .with_context(|| format!("read config: {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("parse config: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        return Ok(config);
    }

    let path = config_path(data_dir);
    match fs::read_to_string(&path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded config");
                Ok(config)
            }
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "invalid config, using defaults");
                Ok(RjiConfig::default())
            }
        },
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(RjiConfig::default()),
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "unreadable config, using defaults");
            Ok(RjiConfig::default())
        }
    }
}
