//! Core of the betmock betting API stand-in.
//!
//! - [`config`]: settings and site config documents (YAML/JSON/JSONC)
//! - [`types`]: users, games, bets, routes and response envelopes
//! - [`matching`]: URL patterns, query strings and headers
//! - [`store`]: persisted fixture state
//! - [`service`]: the API operations
//! - [`gateway`]: route table and dispatch

pub mod config;
pub mod gateway;
pub mod matching;
pub mod service;
pub mod store;
pub mod types;

pub use config::Settings;
pub use gateway::{Gateway, Reply, Request};
pub use service::{ApiError, ApiOptions, MockApi};
pub use store::{FileStore, MemoryStore, Store, StoreError};
pub use types::envelope::{EnvelopeKind, EnvelopeStrategy};
pub use types::route::HttpMethod;
