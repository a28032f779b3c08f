//! Errors surfaced by API operations, with their HTTP mapping.

use crate::config::site::SiteConfigError;
use crate::store::StoreError;

/// Operation failure reported back to the client.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Stake missing, non-positive or above the balance (400)
    #[error("Invalid bet amount or insufficient balance")]
    InvalidBet,
    /// Deposit amount missing or non-positive (400)
    #[error("Invalid amount")]
    InvalidAmount,
    /// Withdrawal amount missing, non-positive or above the balance (400)
    #[error("Invalid amount or insufficient balance")]
    InvalidWithdrawal,
    /// Unknown game id (404)
    #[error("Game not found")]
    GameNotFound,
    /// Unknown token on the strict profile endpoint (401)
    #[error("Unauthorized")]
    Unauthorized,
    /// Bet ledger has no id left to hand out (500)
    #[error("Bet ids exhausted")]
    BetIdsExhausted,
    /// User collection is empty (500)
    #[error("No users loaded")]
    NoUsers,
    /// Site config unavailable (500)
    #[error(transparent)]
    SiteConfig(#[from] SiteConfigError),
    /// Fixture write failed (500)
    #[error("Failed to persist state: {0}")]
    Persistence(#[from] StoreError),
    /// Response payload could not be serialized (500)
    #[error("Failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status code for this error.
    pub fn status(&self) -> u16 {
        match self {
            ApiError::InvalidBet | ApiError::InvalidAmount | ApiError::InvalidWithdrawal => 400,
            ApiError::Unauthorized => 401,
            ApiError::GameNotFound => 404,
            ApiError::NoUsers
            | ApiError::BetIdsExhausted
            | ApiError::SiteConfig(_)
            | ApiError::Persistence(_)
            | ApiError::Encode(_) => 500,
        }
    }

    /// Message placed in the response envelope.
    ///
    /// Server-side failures get a fixed message; details stay in the log.
    pub fn client_message(&self) -> String {
        match self {
            ApiError::SiteConfig(SiteConfigError::Missing { .. }) => {
                "Configuration file missing".into()
            }
            ApiError::SiteConfig(_) => "Error loading configuration".into(),
            ApiError::Persistence(_) => "Failed to persist state".into(),
            ApiError::Encode(_) => "Failed to encode response".into(),
            other => other.to_string(),
        }
    }

    pub fn is_server_error(&self) -> bool {
        self.status() >= 500
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::error::ConfigError;
    use rstest::rstest;
    use std::path::PathBuf;

    fn missing_config() -> ApiError {
        ApiError::SiteConfig(SiteConfigError::Missing {
            candidates: vec![PathBuf::from("localConfig.json")],
        })
    }

    fn invalid_config() -> ApiError {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        ApiError::SiteConfig(SiteConfigError::Load(ConfigError::Json(json_err)))
    }

    fn write_failure() -> ApiError {
        ApiError::Persistence(StoreError::Write {
            path: PathBuf::from("data/users.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        })
    }

    #[rstest]
    #[case(ApiError::InvalidBet, 400, "Invalid bet amount or insufficient balance")]
    #[case(ApiError::InvalidAmount, 400, "Invalid amount")]
    #[case(ApiError::InvalidWithdrawal, 400, "Invalid amount or insufficient balance")]
    #[case(ApiError::Unauthorized, 401, "Unauthorized")]
    #[case(ApiError::GameNotFound, 404, "Game not found")]
    #[case(ApiError::BetIdsExhausted, 500, "Bet ids exhausted")]
    #[case(missing_config(), 500, "Configuration file missing")]
    #[case(invalid_config(), 500, "Error loading configuration")]
    #[case(write_failure(), 500, "Failed to persist state")]
    fn test_status_and_client_message(
        #[case] error: ApiError,
        #[case] status: u16,
        #[case] message: &str,
    ) {
        assert_eq!(error.status(), status);
        assert_eq!(error.client_message(), message);
        assert_eq!(error.is_server_error(), status >= 500);
    }

    #[rstest]
    fn test_display_keeps_detail_for_logs() {
        assert!(write_failure().to_string().contains("data/users.json"));
        assert!(missing_config().to_string().contains("localConfig.json"));
    }
}
