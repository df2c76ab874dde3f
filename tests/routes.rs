mod common;

use axum::extract::ConnectInfo;
use axum::http::StatusCode;
use axum_test::TestServer;
use common::RecordingTransport;
use portfolio_site::routes::app_router;
use serde_json::json;
use std::net::SocketAddr;
use tower::Layer;

#[derive(Clone)]
struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}

fn server(transport: std::sync::Arc<RecordingTransport>) -> TestServer {
    let app = app_router(common::create_test_state(transport), false, "static")
        .layer(MockConnectInfoLayer);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_router_serves_page_api_and_health() {
    let transport = RecordingTransport::healthy();
    let server = server(transport.clone());

    server.get("/").await.assert_status_ok();
    server.get("/health").await.assert_status_ok();

    let response = server
        .post("/api/send-email")
        .json(&json!({ "name": "Ada", "email": "ada@example.com", "message": "Hi" }))
        .await;
    response.assert_status_ok();
    assert_eq!(transport.sent().len(), 1);
}

#[tokio::test]
async fn test_router_serves_static_assets() {
    let server = server(RecordingTransport::healthy());

    server.get("/static/css/site.css").await.assert_status_ok();
    server.get("/static/js/site.js").await.assert_status_ok();
    server
        .get("/static/missing.png")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_send_email_rejects_other_methods() {
    let server = server(RecordingTransport::healthy());

    server
        .get("/api/send-email")
        .await
        .assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_submissions_are_rate_limited() {
    let transport = RecordingTransport::healthy();
    let server = server(transport.clone());
    let body = json!({ "name": "Ada", "email": "not-an-email", "message": "Hi" });

    for _ in 0..5 {
        server
            .post("/api/send-email")
            .json(&body)
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    server
        .post("/api/send-email")
        .json(&body)
        .await
        .assert_status(StatusCode::TOO_MANY_REQUESTS);

    // page views share no quota with submissions
    server.get("/").await.assert_status_ok();
}

#[tokio::test]
async fn test_page_assets_are_served() {
    let server = server(RecordingTransport::healthy());

    let html = server.get("/").await.text();
    let asset = regex::Regex::new(r#"(?:href|src)="(/static/[^"]+)""#).unwrap();
    let paths: Vec<&str> = asset
        .captures_iter(&html)
        .map(|c| c.get(1).unwrap().as_str())
        .collect();

    assert!(paths.iter().any(|p| p.starts_with("/static/images/")));
    for path in paths {
        server.get(path).await.assert_status_ok();
    }
}
