//! Request dispatch behavior: headers sent, error mapping, transport
//! failures. All tests run against a local stub server.

mod common;

use common::StubServer;
use oneclickdns::{Client, Error};

const WHOAMI_BODY: &str =
    r#"{"data": {"account": {"id": 1, "email": "admin@example.com"}}}"#;

// ---- request headers ----

#[tokio::test]
async fn sends_bearer_authorization_exactly_once() {
    let server = StubServer::start(200, WHOAMI_BODY).await;
    let client = Client::with_base_url("test-token", &server.base_url);

    client.identity().whoami().await.expect("whoami");

    let request = server.last_request();
    assert_eq!(request.header_count("authorization"), 1);
    assert_eq!(request.header("authorization"), Some("Bearer test-token"));
}

#[tokio::test]
async fn sends_json_accept_header() {
    let server = StubServer::start(200, WHOAMI_BODY).await;
    let client = Client::with_base_url("test-token", &server.base_url);

    client.identity().whoami().await.expect("whoami");

    let request = server.last_request();
    assert_eq!(request.header("accept"), Some("application/json"));
}

#[tokio::test]
async fn default_user_agent_names_library_and_version() {
    let server = StubServer::start(200, WHOAMI_BODY).await;
    let client = Client::with_base_url("test-token", &server.base_url);

    client.identity().whoami().await.expect("whoami");

    let expected = format!("oneclickdns-rust/{}", env!("CARGO_PKG_VERSION"));
    assert_eq!(server.last_request().header("user-agent"), Some(expected.as_str()));
}

#[tokio::test]
async fn custom_user_agent_is_prepended_to_default() {
    let server = StubServer::start(200, WHOAMI_BODY).await;
    let mut client = Client::with_base_url("test-token", &server.base_url);
    client.set_user_agent("MyApp");

    client.identity().whoami().await.expect("whoami");

    let expected = format!("MyApp oneclickdns-rust/{}", env!("CARGO_PKG_VERSION"));
    assert_eq!(server.last_request().header("user-agent"), Some(expected.as_str()));
}

// ---- error mapping ----

#[tokio::test]
async fn maps_400_to_bad_request_with_field_errors() {
    let body = r#"{"message": "Validation failed", "errors": {"name": ["can't be blank"]}}"#;
    let server = StubServer::start(400, body).await;
    let client = Client::with_base_url("test-token", &server.base_url);

    let err = client.identity().whoami().await.expect_err("expected error");
    match err {
        Error::BadRequest { message, errors } => {
            assert_eq!(message, "Validation failed");
            assert_eq!(errors["name"], vec!["can't be blank".to_string()]);
        }
        other => panic!("expected BadRequest, got {other:?}"),
    }
}

#[tokio::test]
async fn maps_404_to_not_found() {
    let body = r#"{"message": "Zone `example.com` not found"}"#;
    let server = StubServer::start(404, body).await;
    let client = Client::with_base_url("test-token", &server.base_url);

    let err = client.identity().whoami().await.expect_err("expected error");
    match err {
        Error::NotFound { message } => {
            assert_eq!(message, "Zone `example.com` not found");
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn maps_other_statuses_to_http_error_with_status() {
    for status in [401, 403, 422, 500, 503] {
        let body = r#"{"message": "nope"}"#;
        let server = StubServer::start(status, body).await;
        let client = Client::with_base_url("test-token", &server.base_url);

        let err = client.identity().whoami().await.expect_err("expected error");
        match err {
            Error::Http { status: got, message } => {
                assert_eq!(got, status);
                assert_eq!(message, "nope");
            }
            other => panic!("expected Http for {status}, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn non_2xx_below_400_maps_to_http_error_not_decode() {
    let server = StubServer::start(304, "").await;
    let client = Client::with_base_url("test-token", &server.base_url);

    let err = client.identity().whoami().await.expect_err("expected error");
    match err {
        Error::Http { status, .. } => assert_eq!(status, 304),
        other => panic!("expected Http, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_error_body_falls_back_to_raw_text() {
    let server = StubServer::start(500, "upstream exploded").await;
    let client = Client::with_base_url("test-token", &server.base_url);

    let err = client.identity().whoami().await.expect_err("expected error");
    match err {
        Error::Http { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "upstream exploded");
        }
        other => panic!("expected Http, got {other:?}"),
    }
}

// ---- transport failures ----

#[tokio::test]
async fn connection_failure_surfaces_as_transport_error() {
    // Nothing listens on the discard port.
    let client = Client::with_base_url("test-token", "http://127.0.0.1:9");

    let err = client.identity().whoami().await.expect_err("expected error");
    assert!(matches!(err, Error::Transport { .. }), "got {err:?}");
}
