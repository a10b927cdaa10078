//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The identity/profile API lives on a separate server. This binary only
//! server-renders the Leptos shell, serves the WASM bundle under `/pkg`, and
//! answers `/healthz`. It never sees or checks session tokens.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Load Leptos options from the environment `cargo leptos` sets up.
///
/// # Errors
///
/// Returns an error if `LEPTOS_OUTPUT_NAME` and friends are missing or
/// malformed.
pub fn leptos_options() -> Result<LeptosOptions, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    Ok(conf.leptos_options)
}

/// Leptos SSR frontend plus static assets and health check.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(auth_portal::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || auth_portal::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
