//! Bet records and the persisted bet ledger.

use crate::types::game::GameId;
use crate::types::money::Amount;
use crate::types::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type BetId = u64;

/// Bet lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BetStatus {
    Pending,
    Settled,
}

/// Settlement outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BetOutcome {
    Win,
    Loss,
}

/// A placed bet as stored in `bets.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bet {
    pub id: BetId,
    pub user_id: UserId,
    pub game_id: Option<GameId>,
    pub amount: Amount,
    pub bet_type: String,
    pub status: BetStatus,
    pub timestamp: DateTime<Utc>,
    pub result: Option<BetOutcome>,
    pub payout: Option<Amount>,
}

/// Persisted bet ledger: the id counter plus every bet in placement order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BetLedger {
    #[serde(default = "first_bet_id")]
    pub next_bet_id: BetId,
    #[serde(default)]
    pub bets: Vec<Bet>,
}

fn first_bet_id() -> BetId {
    1
}

impl Default for BetLedger {
    fn default() -> Self {
        Self {
            next_bet_id: first_bet_id(),
            bets: Vec::new(),
        }
    }
}

impl BetLedger {
    /// Id the next bet will get, or `None` once ids are exhausted.
    ///
    /// The id is always above every stored id, even if the counter in the
    /// fixture file lags behind the bets it holds.
    pub fn next_id(&self) -> Option<BetId> {
        let mut next = self.next_bet_id;
        for bet in &self.bets {
            next = next.max(bet.id.checked_add(1)?);
        }
        Some(next).filter(|&id| id < BetId::MAX)
    }

    /// Take the next bet id and advance the counter.
    pub fn allocate_id(&mut self) -> Option<BetId> {
        let id = self.next_id()?;
        self.next_bet_id = id + 1;
        Some(id)
    }

    pub fn record(&mut self, bet: Bet) {
        self.bets.push(bet);
    }

    /// Bets owned by `user_id`, oldest first.
    pub fn for_user(&self, user_id: UserId) -> Vec<Bet> {
        self.bets
            .iter()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect()
    }
}
