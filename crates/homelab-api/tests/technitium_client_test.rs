#![allow(clippy::unwrap_used)]
// Integration tests for `TechnitiumClient` using wiremock.

use serde_json::json;
use url::Url;
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use homelab_api::technitium::{RecordType, ZoneType};
use homelab_api::{Error, TechnitiumClient};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, TechnitiumClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = TechnitiumClient::with_client(
        reqwest::Client::new(),
        base_url,
        "admin",
        Some("tok123".into()),
    );
    (server, client)
}

async fn setup_unauthenticated() -> (MockServer, TechnitiumClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = TechnitiumClient::with_client(reqwest::Client::new(), base_url, "admin", None);
    (server, client)
}

fn secret(s: &str) -> secrecy::SecretString {
    s.to_string().into()
}

// ── Authentication ──────────────────────────────────────────────────

#[tokio::test]
async fn test_login_success_stores_token() {
    let (server, mut client) = setup_unauthenticated().await;

    Mock::given(method("POST"))
        .and(path("/api/user/login"))
        .and(body_string_contains("user=admin"))
        .and(body_string_contains("pass=hunter2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "status": "ok", "token": "abcdef" })),
        )
        .mount(&server)
        .await;

    client.login(&secret("hunter2")).await.unwrap();
    assert!(client.is_authenticated());
}

#[tokio::test]
async fn test_login_succeeds_on_ok_body_despite_server_error_status() {
    // Technitium signals success in the body; the HTTP status code is
    // not part of the contract and must be ignored.
    let (server, mut client) = setup_unauthenticated().await;

    Mock::given(method("POST"))
        .and(path("/api/user/login"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(json!({ "status": "ok", "token": "abcdef" })),
        )
        .mount(&server)
        .await;

    client.login(&secret("hunter2")).await.unwrap();
    assert!(client.is_authenticated());
}

#[tokio::test]
async fn test_login_failure_reports_server_message() {
    let (server, mut client) = setup_unauthenticated().await;

    Mock::given(method("POST"))
        .and(path("/api/user/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "error",
            "errorMessage": "Invalid username or password."
        })))
        .mount(&server)
        .await;

    let result = client.login(&secret("wrong")).await;

    match result {
        Err(Error::Authentication { ref message }) => {
            assert!(
                message.contains("Invalid username or password"),
                "expected server message, got: {message}"
            );
        }
        other => panic!("expected Authentication error, got: {other:?}"),
    }
    assert!(!client.is_authenticated());
}

#[tokio::test]
async fn test_calls_without_login_fail_locally() {
    let (_server, client) = setup_unauthenticated().await;

    let result = client.list_zones().await;
    assert!(
        matches!(result, Err(Error::NotAuthenticated)),
        "expected NotAuthenticated, got: {result:?}"
    );
}

// ── Zones ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_zones() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/zones/list"))
        .and(query_param("token", "tok123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "zones": [
                { "name": "example.com", "type": "Primary" },
                { "name": "lab.internal", "type": "Forwarder" }
            ]
        })))
        .mount(&server)
        .await;

    let zones = client.list_zones().await.unwrap();

    assert_eq!(zones.len(), 2);
    assert_eq!(zones[0].name, "example.com");
    assert_eq!(zones[0].zone_type, "Primary");
    assert_eq!(zones[1].zone_type, "Forwarder");
}

#[tokio::test]
async fn test_list_zones_api_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/zones/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "error",
            "errorMessage": "Invalid token"
        })))
        .mount(&server)
        .await;

    let result = client.list_zones().await;

    match result {
        Err(Error::Api { ref message }) => {
            assert!(message.contains("Invalid token"), "got: {message}");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_create_zone_sends_form_fields() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/zones/create"))
        .and(body_string_contains("token=tok123"))
        .and(body_string_contains("zone=example.com"))
        .and(body_string_contains("type=Primary"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
        .expect(1)
        .mount(&server)
        .await;

    client
        .create_zone("example.com", ZoneType::Primary)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_create_existing_zone_surfaces_server_error() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/zones/create"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "error",
            "errorMessage": "Zone 'example.com' already exists."
        })))
        .mount(&server)
        .await;

    let result = client.create_zone("example.com", ZoneType::Primary).await;
    match result {
        Err(Error::Api { ref message }) => {
            assert!(message.contains("already exists"), "got: {message}");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

// ── Record value-field dispatch ─────────────────────────────────────

#[tokio::test]
async fn test_add_a_record_uses_ip_address_field() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/zones/records/add"))
        .and(body_string_contains("zone=example.com"))
        .and(body_string_contains("name=gitlab"))
        .and(body_string_contains("type=A"))
        .and(body_string_contains("ttl=3600"))
        .and(body_string_contains("ipAddress=10.0.0.5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
        .expect(1)
        .mount(&server)
        .await;

    client
        .add_record("example.com", "gitlab", &RecordType::A, "10.0.0.5", 3600)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_add_cname_record_uses_cname_field() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/zones/records/add"))
        .and(body_string_contains("type=CNAME"))
        .and(body_string_contains("cname=gitlab.example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
        .expect(1)
        .mount(&server)
        .await;

    client
        .add_record(
            "example.com",
            "git",
            &RecordType::Cname,
            "gitlab.example.com",
            3600,
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_add_txt_record_uses_text_field() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/zones/records/add"))
        .and(body_string_contains("type=TXT"))
        .and(body_string_contains("text=verify-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
        .expect(1)
        .mount(&server)
        .await;

    client
        .add_record(
            "example.com",
            "_acme",
            &RecordType::Txt,
            "verify-token",
            3600,
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_add_other_record_uses_rdata_field() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/zones/records/add"))
        .and(body_string_contains("type=MX"))
        .and(body_string_contains("rdata=mail.example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
        .expect(1)
        .mount(&server)
        .await;

    client
        .add_record(
            "example.com",
            "@",
            &RecordType::Other("MX".into()),
            "mail.example.com",
            3600,
        )
        .await
        .unwrap();
}

// ── Service provisioning ────────────────────────────────────────────

#[tokio::test]
async fn test_setup_service_skips_create_when_zone_exists() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/zones/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "zones": [{ "name": "example.com", "type": "Primary" }]
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/zones/create"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
        .expect(0)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/zones/records/add"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
        .expect(3)
        .mount(&server)
        .await;

    let setup = client
        .setup_service_records("example.com", "10.0.0.5")
        .await
        .unwrap();

    assert!(!setup.zone_created);
    assert!(setup.all_succeeded());
    assert_eq!(setup.records.len(), 3);
    assert_eq!(setup.records[0].name, "gitlab");
    assert_eq!(setup.records[1].name, "git");
    assert_eq!(setup.records[2].name, "registry");
}

#[tokio::test]
async fn test_setup_service_creates_missing_zone() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/zones/list"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "status": "ok", "zones": [] })),
        )
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/zones/create"))
        .and(body_string_contains("zone=example.com"))
        .and(body_string_contains("type=Primary"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/zones/records/add"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
        .expect(3)
        .mount(&server)
        .await;

    let setup = client
        .setup_service_records("example.com", "10.0.0.5")
        .await
        .unwrap();

    assert!(setup.zone_created);
    assert!(setup.all_succeeded());
}

#[tokio::test]
async fn test_setup_service_attempts_all_records_past_failures() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/zones/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "zones": [{ "name": "example.com", "type": "Primary" }]
        })))
        .mount(&server)
        .await;

    // The `git` alias fails; `gitlab` and `registry` must still be attempted.
    Mock::given(method("POST"))
        .and(path("/api/zones/records/add"))
        .and(body_string_contains("name=git&type=CNAME"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "error",
            "errorMessage": "Record already exists."
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/zones/records/add"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
        .expect(2)
        .mount(&server)
        .await;

    let setup = client
        .setup_service_records("example.com", "10.0.0.5")
        .await
        .unwrap();

    assert_eq!(setup.records.len(), 3, "all three records attempted");
    assert!(!setup.all_succeeded());
    assert_eq!(setup.succeeded_count(), 2);

    let failed: Vec<&str> = setup
        .records
        .iter()
        .filter(|r| !r.succeeded())
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(failed, vec!["git"]);
}

#[tokio::test]
async fn test_setup_service_aborts_when_zone_create_fails() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/zones/list"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "status": "ok", "zones": [] })),
        )
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/zones/create"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "error",
            "errorMessage": "Access denied."
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/zones/records/add"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
        .expect(0)
        .mount(&server)
        .await;

    let result = client.setup_service_records("example.com", "10.0.0.5").await;
    assert!(matches!(result, Err(Error::Api { .. })), "got: {result:?}");
}
