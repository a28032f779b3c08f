//! The catch-all handler bridging axum requests to the gateway.

use crate::state::ServerState;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use betmock_core::gateway::decode_body;
use betmock_core::types::bet::BetLedger;
use betmock_core::types::user::UserBook;
use betmock_core::{HttpMethod, Reply, Request, Store};

/// Serve every request through the gateway's own route table.
pub async fn mock_handler<U, B>(
    State(state): State<ServerState<U, B>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response
where
    U: Store<UserBook> + 'static,
    B: Store<BetLedger> + 'static,
{
    let request = to_request(&method, &uri, &headers, &body);
    render(state.gateway.handle(request).await)
}

fn to_request(method: &Method, uri: &Uri, headers: &HeaderMap, body: &[u8]) -> Request {
    let method = match method.as_str().parse::<HttpMethod>() {
        Ok(method) => method,
        Err(never) => match never {},
    };
    let url = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());

    let content_type = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok());
    let payload = decode_body(content_type, body);

    let headers = headers
        .iter()
        .filter_map(|(name, value)| value.to_str().ok().map(|v| (name.as_str(), v.to_string())));

    let request = Request::new(method, url).with_headers(headers);
    match payload {
        Some(payload) => request.with_payload(payload),
        None => request,
    }
}

fn render(reply: Reply) -> Response {
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(reply.body)).into_response()
}
