//! Document parsing, server settings and site config delivery.

pub mod error;
pub mod parser;
pub mod settings;
pub mod site;

pub use error::ConfigError;
pub use settings::{ClientVersion, Settings, SettingsError};
pub use site::{load_site_config, RequestOrigin, SiteConfig, SiteConfigError};
