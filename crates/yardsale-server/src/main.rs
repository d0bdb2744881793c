//! Yard Sale Registration Server
//!
//! Axum-based server providing the checkout-session API and serving the
//! static WASM frontend.

mod handlers;
mod state;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use yardsale_payments::{CheckoutClient, Config};

use crate::handlers::{create_checkout_session, health_check};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    // Validate configuration eagerly. With anything missing the server still
    // starts, but the checkout endpoint fails closed with the full list.
    let (checkout, config_error) = match Config::from_env() {
        Ok(config) => {
            tracing::info!("✓ Stripe configured");
            (Some(Arc::new(CheckoutClient::new(&config))), None)
        }
        Err(e) => {
            tracing::warn!("⚠ {}", e);
            tracing::warn!("  Checkout is disabled until all env vars are set");
            (None, Some(e.to_string()))
        }
    };

    let state = AppState {
        checkout,
        config_error,
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Static files (WASM frontend); index.html fallback so the client-side
    // /success and /cancel routes resolve on direct navigation
    let static_files = ServeDir::new("static").not_found_service(ServeFile::new("static/index.html"));

    // Build router
    let app = Router::new()
        .route("/health", get(health_check))
        .route("/api/create-checkout-session", post(create_checkout_session))
        .nest_service("/", static_files)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("🚀 yardsale server running on http://{}", addr);
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health                      - Health check");
    tracing::info!("  POST /api/create-checkout-session - Create Stripe checkout");
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}
