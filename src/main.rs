//! MediCare booking portal host.
//!
//! SYSTEM CONTEXT
//! ==============
//! Serves the Leptos app server-side rendered, the hydration bundle under
//! `/pkg`, static assets from the site root, and a health probe. There is no
//! application state beyond the immutable Leptos options.

#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use crate::config::HostConfig;
use crate::error::HostError;

#[tokio::main]
async fn main() -> Result<(), HostError> {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt::init();
    if let Err(e) = dotenv {
        if !e.not_found() {
            tracing::warn!(error = %e, "ignoring unreadable .env");
        }
    }

    let config = HostConfig::from_env()?;
    let app = routes::app()?;

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| HostError::Bind { addr, source })?;

    tracing::info!(%addr, "medicare listening");
    axum::serve(listener, app).await.map_err(HostError::Serve)
}
