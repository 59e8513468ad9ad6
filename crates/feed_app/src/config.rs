use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use feed_core::{FeedFilter, UnknownFilter};
use feed_logging::feed_info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::logging::LogDestination;

pub const DEFAULT_CONFIG_FILE: &str = "feed_app.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error(transparent)]
    Filter(#[from] UnknownFilter),
}

/// On-disk shape. Every field is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
struct ConfigFile {
    user_id: String,
    filter: String,
    log: LogDestination,
}

impl Default for ConfigFile {
    fn default() -> Self {
        let defaults = AppConfig::default();
        Self {
            user_id: defaults.user_id,
            filter: defaults.filter.to_string(),
            log: defaults.log,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub user_id: String,
    pub filter: FeedFilter,
    pub log: LogDestination,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            user_id: "0".to_string(),
            filter: FeedFilter::default(),
            log: LogDestination::default(),
        }
    }
}

/// Reads the config at `path`. A missing file means defaults.
pub fn load(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            feed_info!("No config at {:?}; using defaults", path);
            return Ok(AppConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    parse(&content, path)
}

fn parse(content: &str, path: &Path) -> Result<AppConfig, ConfigError> {
    let file: ConfigFile = ron::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(AppConfig {
        user_id: file.user_id,
        filter: file.filter.parse()?,
        log: file.log,
    })
}
