//! Case-insensitive header access and bearer token extraction.

use std::collections::HashMap;

/// Lowercase header names so lookups are case-insensitive.
pub fn normalize_headers<K, V, I>(headers: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    headers
        .into_iter()
        .map(|(k, v)| (k.as_ref().to_lowercase(), v.into()))
        .collect()
}

/// Look up a header in a map produced by [`normalize_headers`].
pub fn header<'a>(headers: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    headers.get(&name.to_lowercase()).map(String::as_str)
}

/// Token from an `Authorization: Bearer <token>` header.
///
/// A value without the `Bearer ` prefix is taken as the token itself.
pub fn bearer_token(headers: &HashMap<String, String>) -> Option<&str> {
    let value = header(headers, "authorization")?.trim();
    let token = match value.strip_prefix("Bearer") {
        Some(rest) if rest.is_empty() || rest.starts_with(' ') => rest.trim(),
        _ => value,
    };
    (!token.is_empty()).then_some(token)
}
