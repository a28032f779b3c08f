use crate::config::settings::ClientVersion;
use crate::config::site::{load_site_config, RequestOrigin};
use crate::service::error::ApiError;
use crate::service::responses::{Health, ServerStatus, ServerStatusReply, SiteConfigReply};
use crate::service::{iso_now, MockApi};
use crate::store::Store;
use crate::types::bet::BetLedger;
use crate::types::user::UserBook;
use tracing::{error, info};

/// Version reported by health and info endpoints.
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

impl<U, B> MockApi<U, B>
where
    U: Store<UserBook>,
    B: Store<BetLedger>,
{
    /// Client bootstrap config, read from disk on every call.
    pub async fn site_config(&self, origin: &RequestOrigin) -> Result<SiteConfigReply, ApiError> {
        match load_site_config(&self.options.site_config_paths, origin).await {
            Ok(config) => {
                info!(host = %origin.host, "site config served");
                Ok(SiteConfigReply {
                    success: true,
                    result: config,
                })
            }
            Err(err) => {
                error!(%err, "failed to serve site config");
                Err(err.into())
            }
        }
    }

    pub fn server_status(&self) -> ServerStatusReply {
        ServerStatusReply {
            success: true,
            result: ServerStatus {
                server_time: iso_now(),
                maintenance_mode: self.options.maintenance_mode,
            },
        }
    }

    pub fn versions(&self) -> &ClientVersion {
        &self.options.client_version
    }

    pub fn health(&self) -> Health {
        Health {
            status: "healthy",
            timestamp: iso_now(),
            uptime: self.uptime(),
            version: SERVER_VERSION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::fixtures::*;
    use crate::service::{ApiOptions, MockApi};
    use crate::store::MemoryStore;
    use rstest::rstest;
    use std::path::Path;

    fn api_reading(paths: Vec<std::path::PathBuf>) -> TestApi {
        let options = ApiOptions {
            site_config_paths: paths,
            ..ApiOptions::default()
        };
        MockApi::new(
            MemoryStore::new(user_book(5000.0)),
            MemoryStore::new(BetLedger::default()),
            catalog(),
            options,
        )
    }

    async fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        tokio::fs::write(&path, content).await.unwrap();
        path
    }

    #[rstest]
    #[tokio::test]
    async fn test_site_config_stamps_origin() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            dir.path(),
            "localConfig.json",
            r#"{"Settings": {}, "Common": {"SiteDomain": "old"}, "Bets": [], "MainMenu": []}"#,
        )
        .await;
        let api = api_reading(vec![dir.path().join("missing.json"), path]);

        let origin = RequestOrigin::new(Some("10.0.2.2:3000"), Some("https"));
        let reply = api.site_config(&origin).await.unwrap();
        assert!(reply.success);
        assert_eq!(reply.result.common["SiteDomain"], "https://10.0.2.2:3000");
    }

    #[rstest]
    #[tokio::test]
    async fn test_site_config_missing() {
        let dir = tempfile::tempdir().unwrap();
        let api = api_reading(vec![dir.path().join("localConfig.json")]);
        let err = api
            .site_config(&RequestOrigin::new(None, None))
            .await
            .unwrap_err();
        assert_eq!(err.status(), 500);
        assert_eq!(err.client_message(), "Configuration file missing");
    }

    #[rstest]
    #[tokio::test]
    async fn test_site_config_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "localConfig.json", "{ not json").await;
        let api = api_reading(vec![path]);
        let err = api
            .site_config(&RequestOrigin::new(None, None))
            .await
            .unwrap_err();
        assert_eq!(err.client_message(), "Error loading configuration");
    }

    #[rstest]
    fn test_server_status_reports_maintenance_flag() {
        let status = api().server_status();
        assert!(status.success);
        assert!(!status.result.maintenance_mode);
        assert!(status.result.server_time.ends_with('Z'));
    }

    #[rstest]
    fn test_versions_and_health() {
        let api = api();
        assert_eq!(api.versions().version, "1.0.0");
        assert!(!api.versions().force_update);

        let health = api.health();
        assert_eq!(health.status, "healthy");
        assert_eq!(health.version, SERVER_VERSION);
        assert!(health.uptime >= 0.0);
    }
}
