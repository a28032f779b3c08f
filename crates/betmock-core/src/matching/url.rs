//! URL pattern matching with path parameters.

use regex::Regex;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UrlMatchResult {
    pub matched: bool,
    pub params: HashMap<String, String>,
}

/// Compiled `{param}` URL pattern.
///
/// Literal segments match case-insensitively; the query string and a trailing
/// slash on the request URL are ignored.
#[derive(Debug, Clone)]
pub struct UrlPattern {
    regex: Regex,
    param_names: Vec<String>,
}

impl UrlPattern {
    pub fn new(pattern: &str) -> Self {
        let (regex, param_names) = pattern_to_regex(&normalize_url(pattern));
        Self { regex, param_names }
    }

    pub fn matches(&self, url: &str) -> UrlMatchResult {
        let url = normalize_url(url);

        let Some(caps) = self.regex.captures(&url) else {
            return UrlMatchResult::default();
        };

        let params = self
            .param_names
            .iter()
            .enumerate()
            .filter_map(|(i, name)| {
                caps.get(i + 1)
                    .map(|m| (name.clone(), decode_segment(m.as_str())))
            })
            .collect();

        UrlMatchResult {
            matched: true,
            params,
        }
    }
}

/// One-shot match of `url` against `pattern`.
pub fn url_matches(pattern: &str, url: &str) -> UrlMatchResult {
    UrlPattern::new(pattern).matches(url)
}

fn decode_segment(segment: &str) -> String {
    urlencoding::decode(segment)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| segment.to_owned())
}

fn normalize_url(url: &str) -> String {
    let without_query = url.split('?').next().unwrap_or("");
    let trimmed = without_query.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".into()
    } else {
        trimmed.into()
    }
}

fn pattern_to_regex(pattern: &str) -> (Regex, Vec<String>) {
    let mut param_names = Vec::new();
    let mut regex_str = String::new();
    let mut chars = pattern.chars();

    while let Some(c) = chars.next() {
        if c == '{' {
            let name: String = chars.by_ref().take_while(|&c| c != '}').collect();
            param_names.push(name);
            regex_str.push_str("([^/]+)");
        } else {
            regex_str.push_str(&regex::escape(c.encode_utf8(&mut [0; 4])));
        }
    }

    // Patterns come from the built-in route table, so they always compile
    let regex = Regex::new(&format!("(?i)^{regex_str}/?$")).expect("valid route pattern");
    (regex, param_names)
}
