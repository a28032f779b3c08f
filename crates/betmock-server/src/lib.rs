//! HTTP front-end for the betmock API.
//!
//! Every request goes to one fallback handler that converts it into a core
//! [`betmock_core::Request`], lets the [`betmock_core::Gateway`] route and
//! answer it, and renders the resulting [`betmock_core::Reply`].
//!
//! # Modules
//!
//! - [`app`]: router and middleware
//! - [`handler`]: axum ↔ gateway conversion
//! - [`state`]: shared state and fixture loading

pub mod app;
pub mod handler;
pub mod state;

pub use app::create_app;
pub use state::{load_gateway, FileGateway, FixtureCounts, FixtureError, ServerState};
