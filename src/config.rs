use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Can't read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Can't parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Connection settings for the time tracking API. Everything except `filter_members` has to be
/// present in the file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    pub api_url: String,
    pub auth_token: String,
    pub app_token: String,
    pub organization: String,
    /// Restricts the report to the members of the organization instead of everyone visible to
    /// the token.
    #[serde(default)]
    pub filter_members: bool,
}

impl Config {
    pub async fn load(path: &Path) -> Result<Config, ConfigError> {
        debug!("Loading config from {path:?}");
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Read {
                path: path.to_owned(),
                source,
            })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })
    }
}
