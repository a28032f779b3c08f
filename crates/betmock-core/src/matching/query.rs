//! Query string and form body decoding.

use serde_json::{Map, Value};
use std::collections::HashMap;

fn decode(component: &str) -> String {
    let spaced = component.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|s| s.into_owned())
        .unwrap_or(spaced)
}

/// Parse `a=1&b=2` into a map with URL decoding.
///
/// Repeated keys are joined with commas; a key without `=` maps to an empty string.
pub fn parse_query_string(query_str: &str) -> HashMap<String, String> {
    let mut result: HashMap<String, String> = HashMap::new();

    for pair in query_str.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let key = decode(key);
        let value = decode(value);

        result
            .entry(key)
            .and_modify(|existing| {
                existing.push(',');
                existing.push_str(&value);
            })
            .or_insert(value);
    }

    result
}

/// Query string part of a request URL, if any.
pub fn query_of(url: &str) -> Option<&str> {
    url.split_once('?').map(|(_, q)| q)
}

/// Decode an `application/x-www-form-urlencoded` body into a flat JSON object of strings.
pub fn form_to_payload(body: &str) -> Value {
    let fields: Map<String, Value> = parse_query_string(body)
        .into_iter()
        .map(|(k, v)| (k, Value::String(v)))
        .collect();
    Value::Object(fields)
}
