//! Deposits and withdrawals against the first user's balance.

use crate::service::error::ApiError;
use crate::service::responses::Transaction;
use crate::service::{unix_millis, MockApi};
use crate::store::Store;
use crate::types::bet::BetLedger;
use crate::types::money::{parse_amount, Amount};
use crate::types::user::UserBook;
use serde_json::Value;
use tracing::info;

/// Accept a positive deposit amount.
pub fn validate_deposit(amount: Option<Amount>) -> Result<Amount, ApiError> {
    amount.filter(|&a| a > 0.0).ok_or(ApiError::InvalidAmount)
}

/// Accept a positive withdrawal covered by `balance`.
pub fn validate_withdrawal(amount: Option<Amount>, balance: Amount) -> Result<Amount, ApiError> {
    amount
        .filter(|&a| a > 0.0 && a <= balance)
        .ok_or(ApiError::InvalidWithdrawal)
}

fn requested_amount(payload: Option<&Value>) -> Option<Amount> {
    parse_amount(payload.and_then(|p| p.get("amount")))
}

impl<U, B> MockApi<U, B>
where
    U: Store<UserBook>,
    B: Store<BetLedger>,
{
    pub async fn deposit(&self, payload: Option<&Value>) -> Result<Transaction, ApiError> {
        let amount = requested_amount(payload);
        let (amount, new_balance) = self
            .users
            .mutate(|book| {
                let user = book.default_user_mut().ok_or(ApiError::NoUsers)?;
                let amount = validate_deposit(amount)?;
                user.balance += amount;
                Ok::<_, ApiError>((amount, user.balance))
            })
            .await?;

        info!(amount, new_balance, "deposit");
        Ok(Transaction {
            amount,
            new_balance,
            transaction_id: format!("dep_{}", unix_millis()),
        })
    }

    pub async fn withdraw(&self, payload: Option<&Value>) -> Result<Transaction, ApiError> {
        let amount = requested_amount(payload);
        let (amount, new_balance) = self
            .users
            .mutate(|book| {
                let user = book.default_user_mut().ok_or(ApiError::NoUsers)?;
                let amount = validate_withdrawal(amount, user.balance)?;
                user.balance -= amount;
                Ok::<_, ApiError>((amount, user.balance))
            })
            .await?;

        info!(amount, new_balance, "withdrawal");
        Ok(Transaction {
            amount,
            new_balance,
            transaction_id: format!("wd_{}", unix_millis()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::fixtures::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(Some(1.0), true)]
    #[case(Some(0.01), true)]
    #[case(Some(0.0), false)]
    #[case(Some(-10.0), false)]
    #[case(None, false)]
    fn test_validate_deposit(#[case] amount: Option<Amount>, #[case] ok: bool) {
        assert_eq!(validate_deposit(amount).is_ok(), ok);
    }

    #[rstest]
    #[case(Some(100.0), 100.0, true)]
    #[case(Some(100.01), 100.0, false)]
    #[case(Some(0.0), 100.0, false)]
    #[case(Some(-1.0), 100.0, false)]
    #[case(None, 100.0, false)]
    fn test_validate_withdrawal(
        #[case] amount: Option<Amount>,
        #[case] balance: Amount,
        #[case] ok: bool,
    ) {
        assert_eq!(validate_withdrawal(amount, balance).is_ok(), ok);
    }

    #[rstest]
    #[tokio::test]
    async fn test_deposit_credits_balance() {
        let api = api();
        let tx = api.deposit(Some(&json!({"amount": 250}))).await.unwrap();
        assert_eq!(tx.amount, 250.0);
        assert_eq!(tx.new_balance, 5250.0);
        assert!(tx.transaction_id.starts_with("dep_"));
        assert_eq!(api.wallet_balance().await.unwrap().balance, 5250.0);
    }

    #[rstest]
    #[tokio::test]
    async fn test_withdraw_accepts_string_amount() {
        let api = api();
        let tx = api.withdraw(Some(&json!({"amount": "1000"}))).await.unwrap();
        assert_eq!(tx.new_balance, 4000.0);
        assert!(tx.transaction_id.starts_with("wd_"));
    }

    #[rstest]
    #[case(json!({"amount": 0}))]
    #[case(json!({"amount": -5}))]
    #[case(json!({"amount": "lots"}))]
    #[case(json!({}))]
    #[tokio::test]
    async fn test_invalid_deposit_leaves_state(#[case] payload: Value) {
        let api = api();
        let result = api.deposit(Some(&payload)).await;
        assert!(matches!(result, Err(ApiError::InvalidAmount)));
        assert_eq!(api.users().commits(), 0);
    }

    #[rstest]
    #[tokio::test]
    async fn test_overdraft_rejected() {
        let api = api();
        let result = api.withdraw(Some(&json!({"amount": 5000.5}))).await;
        assert!(matches!(result, Err(ApiError::InvalidWithdrawal)));
        assert_eq!(api.wallet_balance().await.unwrap().balance, 5000.0);
    }
}
