mod catalog;
mod config;
mod errors;
mod filtering;
mod llm_client;
mod models;
mod routes;
mod state;
mod suggestion;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::load_catalog;
use crate::config::Config;
use crate::filtering::engine::FilterEngine;
use crate::llm_client::build_model;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Course Filter API v{}", env!("CARGO_PKG_VERSION"));

    // Load and tag the catalog; it is immutable from here on
    let catalog = load_catalog(&config.catalog_path).await?;
    if catalog.is_empty() {
        warn!("Catalog at {} is empty", config.catalog_path.display());
    }

    let engine = FilterEngine::new(Arc::new(catalog));
    info!(
        "Filter engine ready: {} courses, {} distinct tags",
        engine.catalog().len(),
        engine.vocabulary().len()
    );

    // Initialize completion model
    let model = build_model(
        config.llm_provider,
        config.gemini_api_key.clone(),
        config.gemini_model.clone(),
        config.anthropic_api_key.clone(),
    )?;
    info!(
        "LLM client initialized (provider: {}, model: {}, default prompt: {})",
        config.llm_provider,
        model.name(),
        config.default_variant.as_str()
    );

    let state = AppState::new(engine, model, config.default_variant);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
