//! Shared server state and fixture loading.

use betmock_core::config::parser::load_document;
use betmock_core::config::ConfigError;
use betmock_core::types::bet::BetLedger;
use betmock_core::types::game::GameCatalog;
use betmock_core::types::user::UserBook;
use betmock_core::{ApiOptions, FileStore, Gateway, MockApi, Settings, Store, StoreError};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

pub const USERS_FILE: &str = "users.json";
pub const GAMES_FILE: &str = "games.json";
pub const BETS_FILE: &str = "bets.json";

/// Gateway over the on-disk fixtures.
pub type FileGateway = Gateway<FileStore<UserBook>, FileStore<BetLedger>>;

/// Startup fixture error. Any of these stops the server.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("Failed to load games from {path}: {source}")]
    Games {
        path: PathBuf,
        #[source]
        source: ConfigError,
    },
    #[error("{path} contains no users")]
    NoUsers { path: PathBuf },
    #[error("{path} has no bet ids left to allocate")]
    BetIdsExhausted { path: PathBuf },
}

/// State handed to every request handler.
#[derive(Debug)]
pub struct ServerState<U, B> {
    pub gateway: Arc<Gateway<U, B>>,
}

impl<U, B> Clone for ServerState<U, B> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
        }
    }
}

impl<U, B> ServerState<U, B> {
    pub fn new(gateway: Gateway<U, B>) -> Self {
        Self {
            gateway: Arc::new(gateway),
        }
    }
}

/// Fixture sizes, for the startup banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixtureCounts {
    pub users: usize,
    pub games: usize,
    pub bets: usize,
}

/// Load the fixtures under `settings.data_path()` and build the gateway.
pub async fn load_gateway(
    settings: &Settings,
) -> Result<(FileGateway, FixtureCounts), FixtureError> {
    let data = settings.data_path();

    let users_path = data.join(USERS_FILE);
    let users: FileStore<UserBook> = FileStore::load(&users_path).await?;
    let user_count = users.get().await.users.len();
    if user_count == 0 {
        return Err(FixtureError::NoUsers { path: users_path });
    }

    let bets_path = data.join(BETS_FILE);
    let bets: FileStore<BetLedger> = FileStore::load(&bets_path).await?;
    let ledger = bets.get().await;
    if ledger.next_id().is_none() {
        return Err(FixtureError::BetIdsExhausted { path: bets_path });
    }
    let bet_count = ledger.bets.len();

    let games_path = data.join(GAMES_FILE);
    let games: GameCatalog = load_document(&games_path)
        .await
        .map_err(|source| FixtureError::Games {
            path: games_path.clone(),
            source,
        })?;

    let counts = FixtureCounts {
        users: user_count,
        games: games.games.len(),
        bets: bet_count,
    };
    info!(data_dir = %data.display(), ?counts, "fixtures loaded");

    let api = MockApi::new(users, bets, games, ApiOptions::from_settings(settings));
    Ok((Gateway::new(api, settings.envelope), counts))
}
