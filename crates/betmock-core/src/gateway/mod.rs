//! Request dispatch.
//!
//! [`Gateway`] matches a [`Request`] against the route table, runs the bound
//! [`MockApi`] operation and renders the result in the envelope the route (or
//! the configured [`EnvelopeStrategy`]) calls for. Requests matching no route
//! get a 200 echo instead of a 404.

pub mod request;
pub mod table;

pub use request::{decode_body, Reply, Request};

use crate::config::site::RequestOrigin;
use crate::gateway::table::{endpoint_listing, routes, CompiledRoute};
use crate::matching::{bearer_token, header, parse_query_string, query_of};
use crate::service::system::SERVER_VERSION;
use crate::service::{ApiError, MockApi};
use crate::store::Store;
use crate::types::bet::BetLedger;
use crate::types::envelope::{EnvelopeKind, EnvelopeStrategy};
use crate::types::route::{Endpoint, Route};
use crate::types::user::UserBook;
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use tracing::{debug, error, info, warn};

const UNMATCHED_INFO: &str = "Mock response - endpoint not specifically handled";

/// Route table bound to an API instance.
#[derive(Debug)]
pub struct Gateway<U, B> {
    api: MockApi<U, B>,
    routes: Vec<CompiledRoute>,
    strategy: EnvelopeStrategy,
}

impl<U, B> Gateway<U, B>
where
    U: Store<UserBook>,
    B: Store<BetLedger>,
{
    pub fn new(api: MockApi<U, B>, strategy: EnvelopeStrategy) -> Self {
        Self {
            api,
            routes: routes().into_iter().map(CompiledRoute::from).collect(),
            strategy,
        }
    }

    pub fn api(&self) -> &MockApi<U, B> {
        &self.api
    }

    pub fn strategy(&self) -> EnvelopeStrategy {
        self.strategy
    }

    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter().map(|c| &c.route)
    }

    /// First route serving the request's method and URL, with its path parameters.
    pub fn find_route(&self, request: &Request) -> Option<(&Route, HashMap<String, String>)> {
        self.routes
            .iter()
            .filter(|c| c.route.method.serves(&request.method))
            .find_map(|c| {
                let result = c.pattern.matches(&request.url);
                result.matched.then(|| (&c.route, result.params))
            })
    }

    pub async fn handle(&self, request: Request) -> Reply {
        log_request(&request);

        let Some((route, params)) = self.find_route(&request) else {
            return self.unmatched(&request);
        };

        match self.dispatch(route.endpoint, &params, &request).await {
            Ok(data) => {
                let envelope = self.strategy.resolve(route.envelope);
                Reply::ok(envelope.success(data, success_message(route.endpoint)))
            }
            Err(err) => {
                if err.is_server_error() {
                    error!(endpoint = ?route.endpoint, %err, "request failed");
                } else {
                    info!(endpoint = ?route.endpoint, %err, "request rejected");
                }
                let status = err.status();
                Reply {
                    status,
                    body: self
                        .strategy
                        .resolve_failure()
                        .failure(&err.client_message(), status),
                }
            }
        }
    }

    async fn dispatch(
        &self,
        endpoint: Endpoint,
        params: &HashMap<String, String>,
        request: &Request,
    ) -> Result<Value, ApiError> {
        let payload = request.payload.as_ref();
        let token = bearer_token(&request.headers);
        let id = params.get("id").map(String::as_str).unwrap_or_default();

        match endpoint {
            Endpoint::Login => encode(self.api.login().await?),
            Endpoint::UserData => encode(self.api.user_data(token).await?),
            Endpoint::UpdateDevice => {
                self.api.update_device().await?;
                Ok(Value::Null)
            }
            Endpoint::Profile => encode(self.api.profile(token).await?),
            Endpoint::Balances => encode(self.api.balances().await?),
            Endpoint::WalletBalance => encode(self.api.wallet_balance().await?),
            Endpoint::GamesList => encode(self.api.list_games()),
            Endpoint::Game => encode(self.api.game(id)?),
            Endpoint::LaunchGame => encode(self.api.launch_game(id, payload)?),
            Endpoint::PlaceBet => encode(self.api.place_bet(payload).await?),
            Endpoint::BetHistory => encode(self.api.bet_history().await?),
            Endpoint::Deposit => encode(self.api.deposit(payload).await?),
            Endpoint::Withdraw => encode(self.api.withdraw(payload).await?),
            Endpoint::SiteConfig => {
                let origin = RequestOrigin::new(
                    header(&request.headers, "host"),
                    header(&request.headers, "x-forwarded-proto"),
                );
                encode(self.api.site_config(&origin).await?)
            }
            Endpoint::ServerStatus => encode(self.api.server_status()),
            Endpoint::Versions => encode(self.api.versions()),
            Endpoint::Health => encode(self.api.health()),
            Endpoint::Info => Ok(self.info()),
        }
    }

    /// Service banner listing the served endpoints.
    pub fn info(&self) -> Value {
        let routes: Vec<Route> = self.routes().cloned().collect();
        let (endpoints, total) = endpoint_listing(&routes);
        json!({
            "message": "betmock - betting API stand-in",
            "status": "running",
            "version": SERVER_VERSION,
            "endpoints": endpoints,
            "totalAPIs": total,
        })
    }

    fn unmatched(&self, request: &Request) -> Reply {
        warn!(method = %request.method, url = %request.url, "unmatched request");
        debug!(headers = ?request.headers, "unmatched request headers");

        let data = json!({
            "Path": request.url,
            "Method": request.method.as_str(),
            "Info": UNMATCHED_INFO,
        });
        let envelope = self.strategy.resolve(EnvelopeKind::Legacy);
        Reply::ok(envelope.success(data, success_message(Endpoint::Info)))
    }
}

fn encode<T: Serialize>(data: T) -> Result<Value, ApiError> {
    Ok(serde_json::to_value(data)?)
}

fn success_message(endpoint: Endpoint) -> &'static str {
    match endpoint {
        Endpoint::GamesList => "Games retrieved successfully",
        Endpoint::Deposit => "Deposit successful",
        Endpoint::Withdraw => "Withdrawal successful",
        _ => "Success",
    }
}

fn log_request(request: &Request) {
    info!(
        method = %request.method,
        url = %request.url,
        origin = header(&request.headers, "origin").unwrap_or("-"),
        user_agent = header(&request.headers, "user-agent").unwrap_or("-"),
        "request"
    );
    if let Some(payload) = &request.payload {
        debug!(%payload, "request body");
    }
    if let Some(query) = query_of(&request.url) {
        debug!(query = ?parse_query_string(query), "query parameters");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::fixtures::*;
    use crate::store::MemoryStore;
    use crate::types::route::HttpMethod;
    use rstest::rstest;

    type TestGateway = Gateway<MemoryStore<UserBook>, MemoryStore<BetLedger>>;

    fn gateway(strategy: EnvelopeStrategy) -> TestGateway {
        Gateway::new(api(), strategy)
    }

    fn get(url: &str) -> Request {
        Request::new(HttpMethod::Get, url)
    }

    #[rstest]
    #[tokio::test]
    async fn test_modern_route_wraps_result() {
        let reply = gateway(EnvelopeStrategy::PerRoute)
            .handle(get("/api/v1/games/list"))
            .await;
        assert_eq!(reply.status, 200);
        assert_eq!(reply.body["Success"], true);
        assert_eq!(reply.body["Message"], "Games retrieved successfully");
        assert_eq!(reply.body["Result"][0]["name"], "Crash");
    }

    #[rstest]
    #[tokio::test]
    async fn test_legacy_route_wraps_value() {
        let reply = gateway(EnvelopeStrategy::PerRoute)
            .handle(get("/Account/v1/Mb/GetUserBalance"))
            .await;
        assert_eq!(reply.body["Error"], "");
        assert_eq!(reply.body["ErrorCode"], 0);
        assert_eq!(reply.body["Value"][0]["Balance"], 5000.0);
    }

    #[rstest]
    #[case(EnvelopeStrategy::PerRoute, "Result")]
    #[case(EnvelopeStrategy::Modern, "Result")]
    #[case(EnvelopeStrategy::Legacy, "Value")]
    #[tokio::test]
    async fn test_strategy_forces_shape(#[case] strategy: EnvelopeStrategy, #[case] key: &str) {
        let reply = gateway(strategy).handle(get("/api/v1/wallet/balance")).await;
        assert_eq!(reply.body[key]["Balance"], 5000.0);
    }

    #[rstest]
    #[case(EnvelopeStrategy::Legacy)]
    #[case(EnvelopeStrategy::Modern)]
    #[tokio::test]
    async fn test_raw_routes_are_never_wrapped(#[case] strategy: EnvelopeStrategy) {
        let reply = gateway(strategy).handle(get("/health")).await;
        assert_eq!(reply.body["status"], "healthy");
        assert!(reply.body.get("Success").is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn test_unknown_game_is_404_in_modern_shape() {
        let reply = gateway(EnvelopeStrategy::PerRoute)
            .handle(get("/api/v1/games/99"))
            .await;
        assert_eq!(reply.status, 404);
        assert_eq!(
            reply.body,
            json!({"Success": false, "Message": "Game not found", "ErrorCode": 404})
        );
    }

    #[rstest]
    #[tokio::test]
    async fn test_unknown_token_on_strict_profile_is_401() {
        let request = get("/api/v1/user/profile").with_headers([("Authorization", "Bearer nope")]);
        let reply = gateway(EnvelopeStrategy::PerRoute).handle(request).await;
        assert_eq!(reply.status, 401);
        assert_eq!(
            reply.body,
            json!({"Success": false, "Message": "Unauthorized", "ErrorCode": 401})
        );
    }

    #[rstest]
    #[tokio::test]
    async fn test_forced_legacy_strategy_keeps_legacy_errors() {
        let request = get("/api/v1/user/profile").with_headers([("Authorization", "Bearer nope")]);
        let reply = gateway(EnvelopeStrategy::Legacy).handle(request).await;
        assert_eq!(reply.status, 401);
        assert_eq!(
            reply.body,
            json!({"Success": false, "Error": "Unauthorized", "ErrorCode": 401, "Value": null})
        );
    }

    #[rstest]
    #[case(HttpMethod::Get, "/does/not/exist?x=1")]
    #[case(HttpMethod::Delete, "/health")]
    #[case(HttpMethod::Other("PROPFIND".into()), "/dav")]
    #[tokio::test]
    async fn test_unmatched_echoes_request(#[case] method: HttpMethod, #[case] url: &str) {
        let expected_method = method.to_string();
        let reply = gateway(EnvelopeStrategy::PerRoute)
            .handle(Request::new(method, url))
            .await;
        assert_eq!(reply.status, 200);
        assert_eq!(reply.body["Success"], true);
        assert_eq!(reply.body["Value"]["Path"], url);
        assert_eq!(reply.body["Value"]["Method"], expected_method);
        assert_eq!(reply.body["Value"]["Info"], UNMATCHED_INFO);
    }

    #[rstest]
    #[tokio::test]
    async fn test_unmatched_follows_forced_modern_strategy() {
        let reply = gateway(EnvelopeStrategy::Modern).handle(get("/missing")).await;
        assert_eq!(reply.body["Result"]["Path"], "/missing");
    }

    #[rstest]
    #[tokio::test]
    async fn test_update_device_answers_null_value() {
        let request = Request::new(HttpMethod::Post, "/UserDevice/v1/MobileDevice/UpdateUserData");
        let reply = gateway(EnvelopeStrategy::PerRoute).handle(request).await;
        assert_eq!(reply.status, 200);
        assert_eq!(reply.body["Success"], true);
        assert_eq!(reply.body["Value"], Value::Null);
    }

    #[rstest]
    #[tokio::test]
    async fn test_deposit_message_and_validation() {
        let gateway = gateway(EnvelopeStrategy::PerRoute);
        let ok = gateway
            .handle(
                Request::new(HttpMethod::Post, "/api/v1/wallet/deposit")
                    .with_payload(json!({"amount": 50})),
            )
            .await;
        assert_eq!(ok.body["Message"], "Deposit successful");
        assert_eq!(ok.body["Result"]["NewBalance"], 5050.0);

        let bad = gateway
            .handle(
                Request::new(HttpMethod::Post, "/api/v1/wallet/deposit")
                    .with_payload(json!({"amount": -1})),
            )
            .await;
        assert_eq!(bad.status, 400);
        assert_eq!(bad.body["Message"], "Invalid amount");
        assert_eq!(bad.body["ErrorCode"], 400);
    }

    #[rstest]
    #[tokio::test]
    async fn test_info_lists_endpoints() {
        let reply = gateway(EnvelopeStrategy::PerRoute).handle(get("/")).await;
        assert_eq!(reply.body["status"], "running");
        assert_eq!(reply.body["version"], SERVER_VERSION);
        assert!(reply.body["totalAPIs"].as_u64().unwrap() > 15);
        assert!(reply.body["endpoints"]["games"]
            .as_array()
            .unwrap()
            .contains(&json!("/api/v1/games/{id}")));
    }

    #[rstest]
    #[tokio::test]
    async fn test_login_is_raw() {
        let reply = gateway(EnvelopeStrategy::Legacy)
            .handle(Request::new(HttpMethod::Post, "/UserAuth/Auth"))
            .await;
        assert_eq!(reply.body["Success"], true);
        assert_eq!(reply.body["Token"], "fake_token_12345");
        assert_eq!(reply.body["Result"], reply.body["Value"]);
    }
}
