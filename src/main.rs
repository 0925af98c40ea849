//! # folio
//!
//! Axum host for the portfolio site: renders the Leptos app on the server and
//! serves its hydration bundle and static assets.

mod config;
mod error;
mod routes;

use std::process::ExitCode;

use config::SiteConfig;
use error::StartupError;

#[tokio::main]
async fn main() -> ExitCode {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt::init();
    match dotenv {
        Ok(path) => tracing::info!(path = %path.display(), "loaded environment file"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "ignoring unreadable .env"),
    }

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "folio stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = SiteConfig::from_env()?;
    if !config.public_dir.is_dir() {
        tracing::warn!(dir = %config.public_dir.display(), "public directory missing; static files will 404");
    }

    let app = routes::app(&config)?;
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;

    tracing::info!(%addr, "folio listening");
    axum::serve(listener, app).await.map_err(StartupError::Serve)
}
