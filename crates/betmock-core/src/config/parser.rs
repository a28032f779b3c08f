//! Document parsing (YAML/JSON/JSONC) for fixtures, settings and site config.

use crate::config::error::ConfigError;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Document file type, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentType {
    Yaml,
    Json,
    Jsonc,
    Unknown,
}

/// Get document type from path extension
pub fn get_file_type(path: &Path) -> DocumentType {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "yaml" | "yml" => DocumentType::Yaml,
        "json" => DocumentType::Json,
        "jsonc" => DocumentType::Jsonc,
        _ => DocumentType::Unknown,
    }
}

/// Strip `//` and `/* */` comments from JSONC content, leaving string literals intact.
pub fn strip_json_comments(content: &str) -> String {
    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    let mut in_string = false;
    let mut escaped = false;

    while let Some(c) = chars.next() {
        if in_string {
            result.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match (c, chars.peek().copied()) {
            ('"', _) => {
                in_string = true;
                result.push(c);
            }
            ('/', Some('/')) => {
                // Line comment runs up to (not including) the line break
                while let Some(&next) = chars.peek() {
                    if next == '\n' || next == '\r' {
                        break;
                    }
                    chars.next();
                }
            }
            ('/', Some('*')) => {
                chars.next();
                let mut prev = '\0';
                for next in chars.by_ref() {
                    if prev == '*' && next == '/' {
                        break;
                    }
                    prev = next;
                }
            }
            _ => result.push(c),
        }
    }

    result
}

/// Parse JSON content
pub fn parse_json<T: DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    serde_json::from_str(content).map_err(ConfigError::from)
}

/// Parse JSONC content (JSON with comments)
pub fn parse_jsonc<T: DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let stripped = strip_json_comments(content);
    serde_json::from_str(&stripped).map_err(ConfigError::from)
}

/// Parse YAML content
pub fn parse_yaml<T: DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    serde_yaml::from_str(content).map_err(ConfigError::from)
}

/// Parse document content based on the file type of `path`
pub fn parse_document<T: DeserializeOwned>(content: &str, path: &Path) -> Result<T, ConfigError> {
    match get_file_type(path) {
        DocumentType::Yaml => parse_yaml(content),
        DocumentType::Json => parse_json(content),
        DocumentType::Jsonc => parse_jsonc(content),
        DocumentType::Unknown => Err(ConfigError::UnknownFileType(path.display().to_string())),
    }
}

/// Read and parse a document from disk.
pub async fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    parse_document(&content, path)
}
