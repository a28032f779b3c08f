//! Login, profile and balance lookups.
//!
//! Any credentials are accepted; there is no session store. Token lookup is a
//! linear scan of the user fixture.

use crate::service::error::ApiError;
use crate::service::responses::{BalanceEntry, LoginReply, Profile, UserData, WalletBalance};
use crate::service::MockApi;
use crate::store::Store;
use crate::types::bet::BetLedger;
use crate::types::user::UserBook;
use tracing::{debug, info};

impl<U, B> MockApi<U, B>
where
    U: Store<UserBook>,
    B: Store<BetLedger>,
{
    /// Log in as the first user, whatever the credentials.
    pub async fn login(&self) -> Result<LoginReply, ApiError> {
        let user = self.default_user().await?;
        info!(user_id = user.id, "login accepted");
        Ok(LoginReply::from(&user))
    }

    /// Startup profile for the bearer token, falling back to the first user.
    pub async fn user_data(&self, token: Option<&str>) -> Result<UserData, ApiError> {
        let book = self.users.get().await;
        let user = token
            .and_then(|t| book.find_by_token(t))
            .or_else(|| book.default_user())
            .ok_or(ApiError::NoUsers)?;
        debug!(user_id = user.id, token_matched = token.is_some(), "user data");
        Ok(UserData::from(user))
    }

    /// Device registration stub; accepted and ignored.
    pub async fn update_device(&self) -> Result<(), ApiError> {
        debug!("device data update ignored");
        Ok(())
    }

    /// Profile for the bearer token.
    ///
    /// Without a token the first user is returned; an unknown token is
    /// rejected with [`ApiError::Unauthorized`].
    pub async fn profile(&self, token: Option<&str>) -> Result<Profile, ApiError> {
        let book = self.users.get().await;
        let user = match token {
            Some(token) => book.find_by_token(token).ok_or(ApiError::Unauthorized)?,
            None => book.default_user().ok_or(ApiError::NoUsers)?,
        };
        Ok(Profile::from(user))
    }

    pub async fn balances(&self) -> Result<Vec<BalanceEntry>, ApiError> {
        let user = self.default_user().await?;
        Ok(vec![BalanceEntry {
            id: user.id,
            balance: user.balance,
            currency: user.currency,
            kind: 0,
        }])
    }

    pub async fn wallet_balance(&self) -> Result<WalletBalance, ApiError> {
        let user = self.default_user().await?;
        Ok(WalletBalance {
            balance: user.balance,
            currency: user.currency,
            bonus_balance: 0.0,
        })
    }
}
