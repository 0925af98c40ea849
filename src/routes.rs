//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the server-rendered Leptos pages, the hydration
//! bundle under `/pkg`, a liveness probe, and static files from the public
//! directory for anything else.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::SiteConfig;
use crate::error::StartupError;

/// Full application router.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (malformed
/// `LEPTOS_*` environment or `[package.metadata.leptos]` section).
pub fn app(config: &SiteConfig) -> Result<Router, StartupError> {
    let conf = get_configuration(None).map_err(|e| StartupError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);
    tracing::debug!(count = routes.len(), "leptos routes generated");

    let pages = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let public = ServeDir::new(&config.public_dir).append_index_html_on_directories(true);
    let pkg = pkg_dir(leptos_options.site_root.as_ref(), leptos_options.site_pkg_dir.as_ref());

    Ok(Router::new()
        .route("/healthz", get(healthz))
        .merge(pages)
        .nest_service("/pkg", ServeDir::new(pkg))
        .fallback_service(public)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

/// Directory holding the hydration bundle.
fn pkg_dir(site_root: &str, site_pkg_dir: &str) -> PathBuf {
    Path::new(site_root).join(site_pkg_dir)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
