mod config;
mod routes;

use config::ServerConfig;

#[tokio::main]
async fn main() {
    // Load .env before the subscriber so RUST_LOG from the file applies.
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt::init();
    if let Err(e) = dotenv {
        if !e.not_found() {
            tracing::warn!(error = %e, "failed to load .env");
        }
    }

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid server configuration");
            std::process::exit(1);
        }
    };

    let leptos_options = match routes::leptos_options() {
        Ok(options) => options,
        Err(e) => {
            tracing::error!(error = %e, "leptos options unavailable");
            std::process::exit(1);
        }
    };

    let app = routes::app(leptos_options);
    let addr = config.bind_addr();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, %addr, "failed to bind");
            std::process::exit(1);
        }
    };

    tracing::info!(%addr, "auth-portal listening");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server failed");
        std::process::exit(1);
    }
}
