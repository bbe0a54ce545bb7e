//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leptos SSR renders the landing page with the assistant widget, compiled
//! wasm/js/css is served from the Leptos site root under `/pkg`, and every
//! other path falls through to the static portfolio sections.

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::SiteConfig;

/// Routes that need neither Leptos nor the filesystem.
fn base_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Serve the static portfolio sections for anything no route claimed.
fn with_site_fallback(router: Router, site_dir: &Path) -> Router {
    router.fallback_service(ServeDir::new(site_dir).append_index_html_on_directories(true))
}

/// Health check plus static sections, without the Leptos app.
pub fn static_site(site_dir: &Path) -> Router {
    with_site_fallback(base_routes(), site_dir).layer(TraceLayer::new_for_http())
}

/// Full host router: health check, Leptos SSR, `/pkg` assets, static sections.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn app(config: &SiteConfig) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    let router = base_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")));

    Ok(with_site_fallback(router, &config.site_dir).layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
