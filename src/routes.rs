//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the Leptos SSR routes, the `/pkg` bundle, and the public asset
//! directory under a single Axum router. Unknown paths that are not assets
//! redirect to the home page.

use std::path::PathBuf;

use axum::Router;
use axum::handler::HandlerWithoutStateExt;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::ServeError;

/// Leptos SSR app plus static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section and no `LEPTOS_*` env).
pub fn app(config: &ServerConfig) -> Result<Router, ServeError> {
    let conf = get_configuration(None).map_err(|e| ServeError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());
    let public_dir = config.public_dir.clone().unwrap_or_else(|| site_root.clone());
    tracing::info!(
        site_root = %site_root.display(),
        public_dir = %public_dir.display(),
        routes = routes.len(),
        "serving portfolio"
    );

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options);

    Ok(Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .fallback_service(ServeDir::new(&public_dir).not_found_service(redirect_home.into_service()))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

/// Target for paths that are neither routes nor assets.
async fn redirect_home() -> Redirect {
    Redirect::temporary("/")
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
