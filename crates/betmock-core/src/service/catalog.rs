use crate::service::error::ApiError;
use crate::service::responses::GameLaunch;
use crate::service::{unix_millis, MockApi};
use crate::store::Store;
use crate::types::bet::BetLedger;
use crate::types::game::{Game, GameId};
use crate::types::user::UserBook;
use serde_json::Value;
use tracing::info;

impl<U, B> MockApi<U, B>
where
    U: Store<UserBook>,
    B: Store<BetLedger>,
{
    pub fn list_games(&self) -> Vec<Game> {
        self.games.games.clone()
    }

    /// Look up a game by the raw `{id}` path segment.
    pub fn game(&self, id: &str) -> Result<Game, ApiError> {
        self.find_game(id).cloned()
    }

    /// Hand out a session for a game. Nothing is recorded.
    pub fn launch_game(&self, id: &str, payload: Option<&Value>) -> Result<GameLaunch, ApiError> {
        let game = self.find_game(id)?;
        info!(game_id = game.id, game = %game.name, "launching game");
        Ok(GameLaunch {
            game_url: format!("{}/game/{}", self.options.public_base_url, game.id),
            session_id: format!("session_{}", unix_millis()),
            game_id: game.id,
            demo_mode: payload.and_then(|p| p.get("demo")).is_some_and(is_truthy),
        })
    }

    fn find_game(&self, id: &str) -> Result<&Game, ApiError> {
        leading_id(id)
            .and_then(|id| self.games.find(id))
            .ok_or(ApiError::GameNotFound)
    }
}

/// Id from the leading digits of a path segment, so `1.0` and `1abc` both read as 1.
fn leading_id(segment: &str) -> Option<GameId> {
    let segment = segment.trim_start();
    let segment = segment.strip_prefix('+').unwrap_or(segment);
    let end = segment
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(segment.len());
    segment[..end].parse().ok()
}

/// Demo flag as sent by JSON (`true`) or form (`"true"`, `"1"`) bodies.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => matches!(s.to_ascii_lowercase().as_str(), "true" | "1" | "yes" | "on"),
        _ => false,
    }
}
