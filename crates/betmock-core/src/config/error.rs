//! Error types for document parsing and loading.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Document loading or parsing error
#[derive(Debug)]
pub enum ConfigError {
    /// File could not be read
    Io { path: PathBuf, source: io::Error },
    /// JSON parsing error
    Json(serde_json::Error),
    /// YAML parsing error
    Yaml(serde_yaml::Error),
    /// Unknown file type
    UnknownFileType(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "Failed to read {}: {}", path.display(), source)
            }
            ConfigError::Json(e) => write!(f, "JSON parsing error: {}", e),
            ConfigError::Yaml(e) => write!(f, "YAML parsing error: {}", e),
            ConfigError::UnknownFileType(path) => write!(f, "Unknown file type: {}", path),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Json(e) => Some(e),
            ConfigError::Yaml(e) => Some(e),
            ConfigError::UnknownFileType(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Json(err)
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::Yaml(err)
    }
}
