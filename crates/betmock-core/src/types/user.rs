//! User fixtures.

use crate::types::money::Amount;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub type UserId = u64;

/// Fixture user with the pre-issued token the client authenticates with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub token: String,
    pub balance: Amount,
    pub currency: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_date: Option<String>,
    #[serde(default)]
    pub verified: bool,
    /// Fixture fields this server does not interpret, kept across rewrites
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Persisted user collection (`users.json`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserBook {
    pub users: Vec<User>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserBook {
    /// The user every unauthenticated request acts as.
    pub fn default_user(&self) -> Option<&User> {
        self.users.first()
    }

    pub fn default_user_mut(&mut self) -> Option<&mut User> {
        self.users.first_mut()
    }

    /// Linear lookup by token.
    pub fn find_by_token(&self, token: &str) -> Option<&User> {
        self.users.iter().find(|u| u.token == token)
    }
}
