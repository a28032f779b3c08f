//! Bet validation and coin-flip settlement.

use crate::service::error::ApiError;
use crate::service::responses::BetReceipt;
use crate::service::MockApi;
use crate::store::Store;
use crate::types::bet::{Bet, BetLedger, BetOutcome, BetStatus};
use crate::types::game::GameId;
use crate::types::money::{parse_amount, parse_id, Amount};
use crate::types::user::{User, UserBook};
use chrono::Utc;
use rand::Rng;
use serde_json::Value;
use tracing::info;

/// A roll above this wins.
pub const WIN_THRESHOLD: f64 = 0.5;
/// Win multipliers span `[1, 1 + MULTIPLIER_SPREAD)`.
pub const MULTIPLIER_SPREAD: f64 = 2.0;

const DEFAULT_BET_TYPE: &str = "single";

/// Bet placement input, read leniently from the request body.
#[derive(Debug, Clone, PartialEq)]
pub struct BetRequest {
    pub game_id: Option<GameId>,
    pub amount: Option<Amount>,
    pub bet_type: String,
}

impl BetRequest {
    pub fn from_payload(payload: Option<&Value>) -> Self {
        let field = |name: &str| payload.and_then(|p| p.get(name));
        Self {
            game_id: parse_id(field("gameId")),
            amount: parse_amount(field("amount")),
            bet_type: field("betType")
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .unwrap_or(DEFAULT_BET_TYPE)
                .to_string(),
        }
    }
}

/// Two uniform samples in `[0, 1)`: one decides the outcome, one the multiplier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Draw {
    pub roll: f64,
    pub spread: f64,
}

impl Draw {
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            roll: rng.gen(),
            spread: rng.gen(),
        }
    }
}

/// Resolved outcome of a stake.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settlement {
    pub stake: Amount,
    pub outcome: BetOutcome,
    pub payout: Amount,
}

/// Resolve `stake` with `draw`: win iff `roll > 0.5`, paying `stake * (1 + 2 * spread)`.
pub fn settle(stake: Amount, draw: Draw) -> Settlement {
    if draw.roll > WIN_THRESHOLD {
        Settlement {
            stake,
            outcome: BetOutcome::Win,
            payout: stake * (1.0 + draw.spread * MULTIPLIER_SPREAD),
        }
    } else {
        Settlement {
            stake,
            outcome: BetOutcome::Loss,
            payout: 0.0,
        }
    }
}

/// Check the stake against the user's balance, then debit it and credit the payout.
pub fn settle_for(
    user: &mut User,
    stake: Option<Amount>,
    draw: Draw,
) -> Result<Settlement, ApiError> {
    let stake = stake
        .filter(|&s| s > 0.0 && s <= user.balance)
        .ok_or(ApiError::InvalidBet)?;

    user.balance -= stake;
    let settlement = settle(stake, draw);
    user.balance += settlement.payout;
    Ok(settlement)
}

impl<U, B> MockApi<U, B>
where
    U: Store<UserBook>,
    B: Store<BetLedger>,
{
    /// Settle a bet for the first user and append it to the ledger.
    ///
    /// The balance is committed before the bet record; a failure writing the
    /// ledger leaves the balance change in place.
    pub async fn place_bet(&self, payload: Option<&Value>) -> Result<BetReceipt, ApiError> {
        let request = BetRequest::from_payload(payload);
        if self.bets.get().await.next_id().is_none() {
            return Err(ApiError::BetIdsExhausted);
        }
        let draw = self.draw();

        let stake = request.amount;
        let (user_id, settlement, new_balance) = self
            .users
            .mutate(|book| {
                let user = book.default_user_mut().ok_or(ApiError::NoUsers)?;
                let settlement = settle_for(user, stake, draw)?;
                Ok::<_, ApiError>((user.id, settlement, user.balance))
            })
            .await?;

        let BetRequest {
            game_id, bet_type, ..
        } = request;
        let bet = self
            .bets
            .mutate(move |ledger| {
                let bet = Bet {
                    id: ledger.allocate_id().ok_or(ApiError::BetIdsExhausted)?,
                    user_id,
                    game_id,
                    amount: settlement.stake,
                    bet_type,
                    status: BetStatus::Settled,
                    timestamp: Utc::now(),
                    result: Some(settlement.outcome),
                    payout: Some(settlement.payout),
                };
                ledger.record(bet.clone());
                Ok::<_, ApiError>(bet)
            })
            .await?;

        info!(
            bet_id = bet.id,
            outcome = ?settlement.outcome,
            payout = settlement.payout,
            new_balance,
            "bet settled"
        );
        Ok(BetReceipt {
            bet_id: bet.id,
            status: bet.status,
            result: settlement.outcome,
            payout: settlement.payout,
            new_balance,
        })
    }

    /// Bets placed by the first user, oldest first.
    pub async fn bet_history(&self) -> Result<Vec<Bet>, ApiError> {
        let user = self.default_user().await?;
        Ok(self.bets.get().await.for_user(user.id))
    }
}
