//! API operations over the fixture stores.
//!
//! [`MockApi`] owns the user and bet stores, the read-only game catalog and the
//! settlement RNG. Each endpoint of the route table maps to one async method;
//! methods return typed payloads and leave envelope rendering to the gateway.

pub mod account;
pub mod betting;
pub mod catalog;
pub mod error;
pub mod responses;
pub mod system;
pub mod wallet;

pub use error::ApiError;

use crate::config::settings::{ClientVersion, Settings};
use crate::service::betting::Draw;
use crate::store::Store;
use crate::types::bet::BetLedger;
use crate::types::game::GameCatalog;
use crate::types::user::{User, UserBook};
use chrono::{SecondsFormat, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};
use std::time::Instant;

/// Knobs the operations read at request time.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiOptions {
    /// Site config locations, in lookup order
    pub site_config_paths: Vec<PathBuf>,
    /// Base of game launch URLs, without a trailing slash
    pub public_base_url: String,
    pub client_version: ClientVersion,
    pub maintenance_mode: bool,
    /// Fixed settlement seed
    pub rng_seed: Option<u64>,
}

impl Default for ApiOptions {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl ApiOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            site_config_paths: settings.site_config_candidates(),
            public_base_url: settings.public_base_url(),
            client_version: settings.client_version.clone(),
            maintenance_mode: settings.maintenance_mode,
            rng_seed: settings.rng_seed,
        }
    }
}

/// The mock backend.
#[derive(Debug)]
pub struct MockApi<U, B> {
    users: U,
    bets: B,
    games: GameCatalog,
    rng: Mutex<StdRng>,
    options: ApiOptions,
    started: Instant,
}

impl<U, B> MockApi<U, B>
where
    U: Store<UserBook>,
    B: Store<BetLedger>,
{
    pub fn new(users: U, bets: B, games: GameCatalog, options: ApiOptions) -> Self {
        let rng = match options.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            users,
            bets,
            games,
            rng: Mutex::new(rng),
            options,
            started: Instant::now(),
        }
    }

    pub fn users(&self) -> &U {
        &self.users
    }

    pub fn bets(&self) -> &B {
        &self.bets
    }

    pub fn games(&self) -> &GameCatalog {
        &self.games
    }

    pub fn options(&self) -> &ApiOptions {
        &self.options
    }

    /// Seconds since construction.
    pub fn uptime(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }

    fn draw(&self) -> Draw {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        Draw::sample(&mut *rng)
    }

    /// First user of the fixture, which every unauthenticated call acts on.
    async fn default_user(&self) -> Result<User, ApiError> {
        self.users
            .get()
            .await
            .default_user()
            .cloned()
            .ok_or(ApiError::NoUsers)
    }
}

/// Current time as an ISO-8601 string with millisecond precision.
pub(crate) fn iso_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Suffix for transaction and session ids.
pub(crate) fn unix_millis() -> i64 {
    Utc::now().timestamp_millis()
}
