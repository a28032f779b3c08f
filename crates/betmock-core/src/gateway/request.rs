//! Framework-independent request and reply values.

use crate::matching::{form_to_payload, normalize_headers};
use crate::types::route::HttpMethod;
use serde_json::Value;
use std::collections::HashMap;
use tracing::warn;

/// Inbound request for the gateway.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    /// Request URL (path + query string)
    pub url: String,
    pub method: HttpMethod,
    /// Request headers, lowercase names
    pub headers: HashMap<String, String>,
    /// Decoded request body
    pub payload: Option<Value>,
}

impl Request {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method,
            headers: HashMap::new(),
            payload: None,
        }
    }

    pub fn with_headers<K, V, I>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        self.headers.extend(normalize_headers(headers));
        self
    }

    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }
}

/// Status code and JSON body produced by the gateway.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub body: Value,
}

impl Reply {
    pub fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }
}

/// Decode a request body by content type.
///
/// JSON bodies become their value, form bodies a flat object of strings.
/// Empty or undecodable bodies yield `None`.
pub fn decode_body(content_type: Option<&str>, body: &[u8]) -> Option<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return None;
    }

    let mime = content_type
        .and_then(|ct| ct.split(';').next())
        .map(|m| m.trim().to_ascii_lowercase())
        .unwrap_or_default();

    if mime == "application/x-www-form-urlencoded" {
        return match std::str::from_utf8(body) {
            Ok(text) => Some(form_to_payload(text)),
            Err(err) => {
                warn!(%err, "form body is not valid UTF-8");
                None
            }
        };
    }

    match serde_json::from_slice(body) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(%err, content_type = %mime, "ignoring undecodable request body");
            None
        }
    }
}
