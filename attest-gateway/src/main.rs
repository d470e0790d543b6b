//! Entry point for the `attest-gateway` HTTP server.

use attest_gateway::{cors::CorsConfig, routes::create_router};
use tracing::info;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let addr = std::env::var("ATTEST_LISTEN_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:8000".to_owned());

    let app = create_router(CorsConfig::default());

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(addr = %addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    info!(addr = %addr, "attest-gateway listening");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}
