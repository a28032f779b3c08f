//! Client bootstrap config delivery.
//!
//! The site config document is read from disk on every request, so edits to
//! it show up without restarting the server. Only `Common.SiteDomain` is
//! rewritten, using the scheme and host the client used to reach us.

use crate::config::error::ConfigError;
use crate::config::parser::load_document;
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Site config delivery error
#[derive(Debug, thiserror::Error)]
pub enum SiteConfigError {
    /// None of the candidate paths exists
    #[error("Configuration file missing (looked in {})", display_paths(.candidates))]
    Missing { candidates: Vec<PathBuf> },
    /// File exists but could not be read or parsed
    #[error("Error loading configuration: {0}")]
    Load(#[from] ConfigError),
    /// Parsed document lacks a `Common` object
    #[error("Error loading configuration: {path} has no Common section")]
    MissingCommon { path: PathBuf },
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Scheme and host of the inbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOrigin {
    pub scheme: String,
    pub host: String,
}

impl RequestOrigin {
    /// Build from `Host` and `X-Forwarded-Proto` header values.
    pub fn new(host: Option<&str>, forwarded_proto: Option<&str>) -> Self {
        Self {
            scheme: forwarded_proto
                .filter(|s| !s.is_empty())
                .unwrap_or("http")
                .to_string(),
            host: host.filter(|h| !h.is_empty()).unwrap_or("127.0.0.1").to_string(),
        }
    }

    pub fn site_domain(&self) -> String {
        format!("{}://{}", self.scheme, self.host)
    }
}

/// Feature flags the client checks before enabling whole app sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CriticalConfig {
    pub has_section_toto: bool,
    pub has_bet_constructor: bool,
    pub has_financial: bool,
    pub has_section_x_games: bool,
    pub has_section_aggregator: bool,
}

impl Default for CriticalConfig {
    fn default() -> Self {
        Self {
            has_section_toto: true,
            has_bet_constructor: true,
            has_financial: true,
            has_section_x_games: true,
            has_section_aggregator: true,
        }
    }
}

/// The subset of the site config document handed to the client.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SiteConfig {
    pub settings: Value,
    pub common: Value,
    pub bets: Value,
    pub main_menu: Value,
    pub critical_config: CriticalConfig,
}

/// First candidate that exists on disk.
pub async fn find_site_config(candidates: &[PathBuf]) -> Option<&Path> {
    for candidate in candidates {
        if tokio::fs::try_exists(candidate).await.unwrap_or(false) {
            return Some(candidate.as_path());
        }
    }
    None
}

/// Load the site config and stamp `Common.SiteDomain` with the request origin.
pub async fn load_site_config(
    candidates: &[PathBuf],
    origin: &RequestOrigin,
) -> Result<SiteConfig, SiteConfigError> {
    let path = find_site_config(candidates)
        .await
        .ok_or_else(|| SiteConfigError::Missing {
            candidates: candidates.to_vec(),
        })?;

    let mut document: Value = load_document(path).await?;
    let common = document
        .get_mut("Common")
        .and_then(Value::as_object_mut)
        .ok_or_else(|| SiteConfigError::MissingCommon {
            path: path.to_path_buf(),
        })?;
    common.insert("SiteDomain".into(), Value::String(origin.site_domain()));

    let mut take = |key: &str| document.get_mut(key).map(Value::take).unwrap_or(Value::Null);
    Ok(SiteConfig {
        settings: take("Settings"),
        common: take("Common"),
        bets: take("Bets"),
        main_menu: take("MainMenu"),
        critical_config: CriticalConfig::default(),
    })
}
