//! Response payloads, in the PascalCase field naming the client expects.

use crate::config::site::SiteConfig;
use crate::types::bet::{BetId, BetOutcome, BetStatus};
use crate::types::game::GameId;
use crate::types::money::Amount;
use crate::types::user::{User, UserId};
use serde::Serialize;

/// Account fields repeated in login answers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AccountSummary {
    pub id: UserId,
    pub token: String,
    pub balance: Amount,
    pub currency: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub country: String,
    pub verified: bool,
}

impl From<&User> for AccountSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            token: user.token.clone(),
            balance: user.balance,
            currency: user.currency.clone(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            phone: user.phone.clone(),
            country: user.country.clone(),
            verified: user.verified,
        }
    }
}

/// Login answer. The client reads the account from either `Result` or `Value`
/// depending on its version, so both carry it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoginReply {
    pub success: bool,
    pub token: String,
    pub user_id: UserId,
    pub message: String,
    pub result: AccountSummary,
    pub value: AccountSummary,
}

impl From<&User> for LoginReply {
    fn from(user: &User) -> Self {
        let account = AccountSummary::from(user);
        Self {
            success: true,
            token: user.token.clone(),
            user_id: user.id,
            message: "Login Successful - Mock Server".into(),
            result: account.clone(),
            value: account,
        }
    }
}

/// Startup profile read by the mobile client.
///
/// Location and status fields are fixed; only identity and money come from
/// the user fixture.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserData {
    pub id: UserId,
    pub login: String,
    pub money: Amount,
    pub currency: String,
    pub activate_status: u8,
    pub has_bets: bool,
    pub country_code: &'static str,
    pub country: &'static str,
    pub city: &'static str,
    pub city_id: u32,
    pub dt_birthday: &'static str,
    pub registration_dt: &'static str,
    pub email: String,
    pub name: String,
    pub surname: String,
    pub phone_client: String,
    pub has_authenticator: bool,
    pub has_two_factor: bool,
    pub is_vip: bool,
    pub bonus_choice: u8,
    pub verification_status_group_code: &'static str,
    pub points_accumulated: u32,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            login: user.id.to_string(),
            money: user.balance,
            currency: user.currency.clone(),
            activate_status: 1,
            has_bets: true,
            country_code: "RU",
            country: "Russia",
            city: "Moscow",
            city_id: 1,
            dt_birthday: "1990-01-01T00:00:00",
            registration_dt: "2023-01-01T12:00:00",
            email: user.email.clone(),
            name: user.first_name.clone(),
            surname: user.last_name.clone(),
            phone_client: user.phone.clone(),
            has_authenticator: false,
            has_two_factor: false,
            is_vip: true,
            bonus_choice: 1,
            verification_status_group_code: "Verified",
            points_accumulated: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Profile {
    pub id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub country: String,
    pub currency: String,
    pub registration_date: Option<String>,
    pub verified: bool,
}

impl From<&User> for Profile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            phone: user.phone.clone(),
            country: user.country.clone(),
            currency: user.currency.clone(),
            registration_date: user.registration_date.clone(),
            verified: user.verified,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BalanceEntry {
    pub id: UserId,
    pub balance: Amount,
    pub currency: String,
    /// Account kind; 0 is the main account
    #[serde(rename = "Type")]
    pub kind: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct WalletBalance {
    pub balance: Amount,
    pub currency: String,
    pub bonus_balance: Amount,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GameLaunch {
    pub game_url: String,
    pub session_id: String,
    pub game_id: GameId,
    pub demo_mode: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BetReceipt {
    pub bet_id: BetId,
    pub status: BetStatus,
    pub result: BetOutcome,
    pub payout: Amount,
    pub new_balance: Amount,
}

/// Deposit or withdrawal confirmation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Transaction {
    pub amount: Amount,
    pub new_balance: Amount,
    pub transaction_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SiteConfigReply {
    pub success: bool,
    pub result: SiteConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServerStatus {
    pub server_time: String,
    pub maintenance_mode: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServerStatusReply {
    pub success: bool,
    pub result: ServerStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub timestamp: String,
    /// Seconds since the API was created
    pub uptime: f64,
    pub version: &'static str,
}
