//! Response envelopes.
//!
//! The client speaks two wrapper dialects: the legacy
//! `{Success, Error, ErrorCode, Value}` shape and the newer
//! `{Success, Message, Result}` shape. A few endpoints (login, config, health)
//! use ad hoc bodies and are marked [`EnvelopeKind::Raw`].

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Envelope shape declared by a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeKind {
    /// `{Success, Error, ErrorCode, Value}`
    Legacy,
    /// `{Success, Message, Result}`
    Modern,
    /// Body is sent as built by the handler
    Raw,
}

/// Server-wide envelope policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EnvelopeStrategy {
    /// Each route keeps the shape it declares
    #[default]
    PerRoute,
    /// Every wrapped route answers in the legacy shape
    Legacy,
    /// Every wrapped route answers in the modern shape
    Modern,
}

impl EnvelopeStrategy {
    /// Shape to render for a route declaring `declared`. Raw routes are never rewrapped.
    pub fn resolve(self, declared: EnvelopeKind) -> EnvelopeKind {
        match (self, declared) {
            (_, EnvelopeKind::Raw) => EnvelopeKind::Raw,
            (EnvelopeStrategy::PerRoute, kind) => kind,
            (EnvelopeStrategy::Legacy, _) => EnvelopeKind::Legacy,
            (EnvelopeStrategy::Modern, _) => EnvelopeKind::Modern,
        }
    }

    /// Shape to render a failure in.
    ///
    /// Every error body uses the modern shape unless the legacy strategy is forced.
    pub fn resolve_failure(self) -> EnvelopeKind {
        match self {
            EnvelopeStrategy::Legacy => EnvelopeKind::Legacy,
            EnvelopeStrategy::PerRoute | EnvelopeStrategy::Modern => EnvelopeKind::Modern,
        }
    }
}

impl std::str::FromStr for EnvelopeStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "per-route" => Ok(EnvelopeStrategy::PerRoute),
            "legacy" => Ok(EnvelopeStrategy::Legacy),
            "modern" => Ok(EnvelopeStrategy::Modern),
            other => Err(format!(
                "unknown envelope strategy '{other}' (expected per-route, legacy or modern)"
            )),
        }
    }
}

impl EnvelopeKind {
    /// Wrap a successful payload.
    pub fn success(self, data: Value, message: &str) -> Value {
        match self {
            EnvelopeKind::Legacy => json!({
                "Success": true,
                "Error": "",
                "ErrorCode": 0,
                "Value": data,
            }),
            EnvelopeKind::Modern => json!({
                "Success": true,
                "Message": message,
                "Result": data,
            }),
            EnvelopeKind::Raw => data,
        }
    }

    /// Wrap a failure. Raw routes fall back to the modern error shape.
    pub fn failure(self, message: &str, code: u16) -> Value {
        match self {
            EnvelopeKind::Legacy => json!({
                "Success": false,
                "Error": message,
                "ErrorCode": code,
                "Value": null,
            }),
            EnvelopeKind::Modern | EnvelopeKind::Raw => json!({
                "Success": false,
                "Message": message,
                "ErrorCode": code,
            }),
        }
    }
}
