mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use common::RecordingTransport;
use portfolio_site::api::handlers::health_handler;
use portfolio_site::application::services::MailProfile;
use portfolio_site::state::AppState;

fn server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_endpoint_success() {
    let transport = RecordingTransport::healthy();
    let server = server(common::create_test_state(transport.clone()));

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["mail_transport"]["status"], "ok");
    assert!(json.get("version").is_some());
    // configuration check only, no SMTP round trip
    assert_eq!(transport.verify_calls(), 0);
}

#[tokio::test]
async fn test_health_missing_credentials() {
    let profile = MailProfile {
        secret_configured: false,
        ..common::test_profile()
    };
    let server = server(common::create_test_state_with_profile(
        RecordingTransport::healthy(),
        profile,
    ));

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["mail_transport"]["status"], "error");
}

#[tokio::test]
async fn test_health_verify_runs_smtp_check() {
    let transport = RecordingTransport::failing_verify("connection refused");
    let server = server(common::create_test_state(transport.clone()));

    let response = server.get("/health").add_query_param("verify", true).await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(transport.verify_calls(), 1);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["checks"]["mail_transport"]["message"], "SMTP verification failed");
}
