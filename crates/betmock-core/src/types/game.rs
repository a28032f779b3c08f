//! Game catalog fixtures.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub type GameId = u64;

/// Read-only catalog entry. Metadata beyond id and name is echoed untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub name: String,
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

/// Game catalog (`games.json`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameCatalog {
    pub games: Vec<Game>,
}

impl GameCatalog {
    pub fn find(&self, id: GameId) -> Option<&Game> {
        self.games.iter().find(|g| g.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn catalog() -> GameCatalog {
        serde_json::from_value(json!({
            "games": [
                {"id": 1, "name": "Crash", "category": "instant", "rtp": 97.0},
                {"id": 2, "name": "Dice", "category": "table"}
            ]
        }))
        .unwrap()
    }

    #[rstest]
    #[case(1, Some("Crash"))]
    #[case(2, Some("Dice"))]
    #[case(99, None)]
    fn test_find(#[case] id: GameId, #[case] expected: Option<&str>) {
        let catalog = catalog();
        assert_eq!(catalog.find(id).map(|g| g.name.as_str()), expected);
    }

    #[rstest]
    fn test_metadata_is_echoed() {
        let value = serde_json::to_value(&catalog().games[0]).unwrap();
        assert_eq!(
            value,
            json!({"id": 1, "name": "Crash", "category": "instant", "rtp": 97.0})
        );
    }
}
