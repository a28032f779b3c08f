//! The built-in route table.
//!
//! Order matters: the first route whose method and pattern match wins, so
//! literal paths are listed before `{param}` patterns sharing their prefix.

use crate::matching::UrlPattern;
use crate::types::envelope::EnvelopeKind;
use crate::types::route::{Endpoint, HttpMethod, Route};
use serde_json::{Map, Value};

/// Route with its pattern compiled once.
#[derive(Debug, Clone)]
pub struct CompiledRoute {
    pub route: Route,
    pub pattern: UrlPattern,
}

impl From<Route> for CompiledRoute {
    fn from(route: Route) -> Self {
        let pattern = UrlPattern::new(route.url);
        Self { route, pattern }
    }
}

pub fn routes() -> Vec<Route> {
    use EnvelopeKind::{Legacy, Modern, Raw};
    use HttpMethod::{Get, Post};

    vec![
        Route::new(Post, "/UserAuth/Auth", Endpoint::Login, Raw),
        Route::new(Post, "/UserAuth/Auth2", Endpoint::Login, Raw),
        Route::new(Get, "/UserAuth/Auth", Endpoint::Login, Raw),
        Route::new(Get, "/UserAuth/Auth2", Endpoint::Login, Raw),
        Route::new(Post, "/api/v1/auth/login", Endpoint::Login, Raw),
        Route::new(Get, "/api/auth", Endpoint::Login, Raw),
        Route::new(Get, "/Account/v1/Mb/UserData", Endpoint::UserData, Legacy),
        Route::new(
            Post,
            "/UserDevice/v1/MobileDevice/UpdateUserData",
            Endpoint::UpdateDevice,
            Legacy,
        ),
        Route::new(Get, "/api/v1/user/profile", Endpoint::Profile, Legacy),
        Route::new(Get, "/Account/v1/Mb/GetUserBalance", Endpoint::Balances, Legacy),
        Route::new(Get, "/api/v1/wallet/balance", Endpoint::WalletBalance, Modern),
        Route::new(Get, "/api/v1/games/list", Endpoint::GamesList, Modern),
        Route::new(Get, "/api/v1/games/{id}", Endpoint::Game, Modern),
        Route::new(Post, "/api/v1/games/{id}/launch", Endpoint::LaunchGame, Modern),
        Route::new(Post, "/api/v1/bets/place", Endpoint::PlaceBet, Modern),
        Route::new(Get, "/api/v1/bets/history", Endpoint::BetHistory, Modern),
        Route::new(Post, "/api/v1/wallet/deposit", Endpoint::Deposit, Modern),
        Route::new(Post, "/api/v1/wallet/withdraw", Endpoint::Withdraw, Modern),
        Route::new(Get, "/android/versions", Endpoint::Versions, Raw),
        Route::new(Get, "/api/v1/config", Endpoint::SiteConfig, Raw),
        Route::new(Get, "/api/config", Endpoint::ServerStatus, Raw),
        Route::new(Post, "/api/config", Endpoint::ServerStatus, Raw),
        Route::new(Get, "/health", Endpoint::Health, Raw),
        Route::new(Get, "/", Endpoint::Info, Raw),
    ]
}

/// Section of the info listing an endpoint belongs to.
pub fn group(endpoint: Endpoint) -> Option<&'static str> {
    match endpoint {
        Endpoint::Login => Some("auth"),
        Endpoint::UserData | Endpoint::UpdateDevice | Endpoint::Profile => Some("profile"),
        Endpoint::Balances | Endpoint::WalletBalance => Some("balance"),
        Endpoint::GamesList | Endpoint::Game | Endpoint::LaunchGame => Some("games"),
        Endpoint::PlaceBet | Endpoint::BetHistory => Some("betting"),
        Endpoint::Deposit | Endpoint::Withdraw => Some("wallet"),
        Endpoint::SiteConfig
        | Endpoint::ServerStatus
        | Endpoint::Versions
        | Endpoint::Health => Some("system"),
        Endpoint::Info => None,
    }
}

/// Distinct paths per group, plus the number of method/path pairs served.
pub fn endpoint_listing(routes: &[Route]) -> (Map<String, Value>, usize) {
    let mut groups: Map<String, Value> = Map::new();
    let mut total = 0;

    for route in routes {
        let Some(name) = group(route.endpoint) else {
            continue;
        };
        total += 1;

        let paths = groups
            .entry(name)
            .or_insert_with(|| Value::Array(Vec::new()));
        if let Value::Array(paths) = paths {
            let path = Value::String(route.url.to_string());
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
    }

    (groups, total)
}
