//! Core route types.

use crate::types::envelope::EnvelopeKind;
use std::fmt;
use std::str::FromStr;

/// HTTP method for route matching
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
    /// Any other method; kept verbatim so the fallback can echo it
    Other(String),
}

impl HttpMethod {
    pub fn as_str(&self) -> &str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Other(name) => name,
        }
    }

    /// Whether a route declared with `self` serves a request made with `request`.
    ///
    /// `HEAD` requests are served by `GET` routes.
    pub fn serves(&self, request: &HttpMethod) -> bool {
        self == request || (*self == HttpMethod::Get && *request == HttpMethod::Head)
    }
}

impl FromStr for HttpMethod {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_uppercase().as_str() {
            "GET" => HttpMethod::Get,
            "POST" => HttpMethod::Post,
            "PUT" => HttpMethod::Put,
            "PATCH" => HttpMethod::Patch,
            "DELETE" => HttpMethod::Delete,
            "HEAD" => HttpMethod::Head,
            "OPTIONS" => HttpMethod::Options,
            _ => HttpMethod::Other(s.to_string()),
        })
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operation a route is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Login,
    UserData,
    UpdateDevice,
    Profile,
    Balances,
    WalletBalance,
    GamesList,
    Game,
    LaunchGame,
    PlaceBet,
    BetHistory,
    Deposit,
    Withdraw,
    SiteConfig,
    ServerStatus,
    Versions,
    Health,
    Info,
}

/// Mock route definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Operation served by this route
    pub endpoint: Endpoint,
    /// HTTP method
    pub method: HttpMethod,
    /// URL pattern (supports {param} placeholders)
    pub url: &'static str,
    /// Envelope the client expects from this route
    pub envelope: EnvelopeKind,
}

impl Route {
    pub fn new(
        method: HttpMethod,
        url: &'static str,
        endpoint: Endpoint,
        envelope: EnvelopeKind,
    ) -> Self {
        Self {
            endpoint,
            method,
            url,
            envelope,
        }
    }
}
