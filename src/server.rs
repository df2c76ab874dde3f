//! HTTP server initialization and runtime setup.
//!
//! Builds the mail transport and application state, then runs the Axum
//! server until Ctrl+C.

use crate::config::Config;
use crate::domain::transport::MailTransport;
use crate::infrastructure::mail::SmtpMailer;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The SMTP transport cannot be configured
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let transport: Arc<dyn MailTransport> =
        Arc::new(SmtpMailer::new(&config.mail).context("Failed to configure SMTP transport")?);
    tracing::info!(
        "Mail transport ready ({}:{})",
        config.mail.smtp_host,
        config.mail.smtp_port
    );

    let state = AppState::new(transport, config.mail.profile());

    let router = app_router(state, config.behind_proxy, &config.static_dir);
    let app = NormalizePathLayer::trim_trailing_slash().layer(router);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
