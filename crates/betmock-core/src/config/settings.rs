//! Server settings, loaded from an optional YAML/JSON/JSONC file.

use crate::config::error::ConfigError;
use crate::config::parser::load_document;
use crate::types::envelope::EnvelopeStrategy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings loading error
#[derive(Debug, thiserror::Error)]
#[error("Failed to load settings from {path}: {source}")]
pub struct SettingsError {
    pub path: PathBuf,
    #[source]
    pub source: ConfigError,
}

/// Version information served to the client's update check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientVersion {
    pub version: String,
    pub latest_version: String,
    pub force_update: bool,
    pub update_url: String,
}

impl Default for ClientVersion {
    fn default() -> Self {
        Self {
            version: "1.0.0".into(),
            latest_version: "1.0.0".into(),
            force_update: false,
            update_url: String::new(),
        }
    }
}

/// Runtime settings for the mock server.
///
/// Every field has a default, so an empty settings file (or none at all)
/// yields a server listening on `0.0.0.0:3000` with fixtures in `./data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Base directory for relative paths below
    pub root: PathBuf,
    /// Directory holding `users.json`, `games.json` and `bets.json`
    pub data_dir: PathBuf,
    /// Candidate locations of the site config document; first existing wins
    pub site_config_paths: Vec<PathBuf>,
    /// Response envelope strategy
    pub envelope: EnvelopeStrategy,
    /// Base URL used in game launch links
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_url: Option<String>,
    /// Update check answer
    pub client_version: ClientVersion,
    /// Reported by the server status endpoint
    pub maintenance_mode: bool,
    /// Seed for bet settlement; random when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rng_seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3000,
            root: PathBuf::from("."),
            data_dir: PathBuf::from("data"),
            site_config_paths: vec![
                PathBuf::from("localConfig.json"),
                PathBuf::from("../assets/localConfig.json"),
                PathBuf::from("assets/localConfig.json"),
            ],
            envelope: EnvelopeStrategy::default(),
            public_url: None,
            client_version: ClientVersion::default(),
            maintenance_mode: false,
            rng_seed: None,
        }
    }
}

impl Settings {
    /// Load settings from `path`, or return defaults when no path is given.
    pub async fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        match path {
            Some(path) => load_document(path).await.map_err(|source| SettingsError {
                path: path.to_path_buf(),
                source,
            }),
            None => Ok(Self::default()),
        }
    }

    /// Get bind address.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Fixture directory resolved against `root`.
    pub fn data_path(&self) -> PathBuf {
        self.root.join(&self.data_dir)
    }

    /// Site config candidates resolved against `root`, in lookup order.
    pub fn site_config_candidates(&self) -> Vec<PathBuf> {
        self.site_config_paths
            .iter()
            .map(|p| self.root.join(p))
            .collect()
    }

    /// Base URL for links handed back to the client.
    pub fn public_base_url(&self) -> String {
        self.public_url
            .as_deref()
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| format!("http://localhost:{}", self.port))
    }
}
