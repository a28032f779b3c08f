//! Axum application builder.
//!
//! Routing lives in the core gateway, so the router only carries a fallback
//! handler plus the CORS and tracing middleware.

use axum::Router;
use betmock_core::types::bet::BetLedger;
use betmock_core::types::user::UserBook;
use betmock_core::Store;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handler::mock_handler;
use crate::state::ServerState;

/// Create the Axum application serving every path through the gateway.
pub fn create_app<U, B>(state: ServerState<U, B>) -> Router
where
    U: Store<UserBook> + 'static,
    B: Store<BetLedger> + 'static,
{
    // The mobile client and browser tools call from arbitrary origins
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .fallback(mock_handler::<U, B>)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
