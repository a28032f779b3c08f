use betmock_core::config::parser::load_document;
use betmock_core::types::bet::BetLedger;
use betmock_core::types::game::GameCatalog;
use betmock_core::types::user::UserBook;
use betmock_core::{ApiOptions, EnvelopeStrategy, FileStore, Gateway, HttpMethod, MockApi, Request};
use rstest::rstest;
use serde_json::{json, Value};
use std::path::Path;

const USERS: &str = r#"{
  "users": [
    {
      "id": 123456789,
      "token": "fake_token_12345",
      "balance": 5000.0,
      "currency": "USD",
      "email": "demo@example.com",
      "firstName": "Demo",
      "lastName": "User",
      "vipLevel": 3
    }
  ]
}"#;

const BETS: &str = r#"{"nextBetId": 1, "bets": []}"#;

async fn gateway_in(
    dir: &Path,
    site_config: Option<&str>,
) -> Gateway<FileStore<UserBook>, FileStore<BetLedger>> {
    tokio::fs::write(dir.join("users.json"), USERS).await.unwrap();
    tokio::fs::write(dir.join("bets.json"), BETS).await.unwrap();
    if let Some(config) = site_config {
        tokio::fs::write(dir.join("localConfig.json"), config)
            .await
            .unwrap();
    }

    let users = FileStore::load(dir.join("users.json")).await.unwrap();
    let bets = FileStore::load(dir.join("bets.json")).await.unwrap();
    let games: GameCatalog = serde_json::from_value(json!({
        "games": [{"id": 1, "name": "Aviator"}]
    }))
    .unwrap();
    let options = ApiOptions {
        site_config_paths: vec![dir.join("localConfig.json")],
        rng_seed: Some(11),
        ..ApiOptions::default()
    };
    Gateway::new(
        MockApi::new(users, bets, games, options),
        EnvelopeStrategy::PerRoute,
    )
}

async fn read_json(path: &Path) -> Value {
    load_document(path).await.unwrap()
}

#[rstest]
#[tokio::test]
async fn test_bet_rewrites_both_fixture_files() {
    let dir = tempfile::tempdir().unwrap();
    let gateway = gateway_in(dir.path(), None).await;

    let reply = gateway
        .handle(
            Request::new(HttpMethod::Post, "/api/v1/bets/place")
                .with_payload(json!({"gameId": 1, "amount": 100})),
        )
        .await;
    assert_eq!(reply.status, 200);
    let new_balance = reply.body["Result"]["NewBalance"].clone();

    let users = read_json(&dir.path().join("users.json")).await;
    assert_eq!(users["users"][0]["balance"], new_balance);
    assert_eq!(users["users"][0]["vipLevel"], 3);

    let bets = read_json(&dir.path().join("bets.json")).await;
    assert_eq!(bets["nextBetId"], 2);
    assert_eq!(bets["bets"][0]["id"], 1);
    assert_eq!(bets["bets"][0]["userId"], 123456789);
    assert_eq!(bets["bets"][0]["status"], "settled");
}

#[rstest]
#[tokio::test]
async fn test_written_files_are_pretty_printed() {
    let dir = tempfile::tempdir().unwrap();
    let gateway = gateway_in(dir.path(), None).await;

    gateway
        .handle(
            Request::new(HttpMethod::Post, "/api/v1/wallet/deposit")
                .with_payload(json!({"amount": 1})),
        )
        .await;

    let text = tokio::fs::read_to_string(dir.path().join("users.json"))
        .await
        .unwrap();
    assert!(text.contains("\n  \"users\": ["));
}

#[rstest]
#[tokio::test]
async fn test_site_config_is_read_per_request() {
    let dir = tempfile::tempdir().unwrap();
    let gateway = gateway_in(dir.path(), None).await;
    let request = || {
        Request::new(HttpMethod::Get, "/api/v1/config").with_headers([("Host", "192.168.1.55:3000")])
    };

    let missing = gateway.handle(request()).await;
    assert_eq!(missing.status, 500);
    assert_eq!(missing.body["Message"], "Configuration file missing");

    tokio::fs::write(
        dir.path().join("localConfig.json"),
        r#"{"Settings": {"A": 1}, "Common": {"SiteDomain": ""}, "Bets": {}, "MainMenu": [], "Other": 1}"#,
    )
    .await
    .unwrap();

    let served = gateway.handle(request()).await;
    assert_eq!(served.status, 200);
    assert_eq!(served.body["Success"], true);
    assert_eq!(
        served.body["Result"]["Common"]["SiteDomain"],
        "http://192.168.1.55:3000"
    );
    assert_eq!(served.body["Result"]["Settings"], json!({"A": 1}));
    assert_eq!(served.body["Result"]["CriticalConfig"]["hasSectionXGames"], true);
    assert!(served.body["Result"].get("Other").is_none());
}

#[rstest]
#[tokio::test]
async fn test_site_config_without_common_is_invalid() {
    let dir = tempfile::tempdir().unwrap();
    let gateway = gateway_in(dir.path(), Some(r#"{"Settings": {}}"#)).await;

    let reply = gateway
        .handle(Request::new(HttpMethod::Get, "/api/v1/config"))
        .await;
    assert_eq!(reply.status, 500);
    assert_eq!(reply.body["Message"], "Error loading configuration");
}
