// Main entry point for the pet adoption search server

use std::sync::Arc;

use anyhow::{Context, Result};
use server_core::{build_app, AppState, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use search::{testing::sample_pets, MemoryStore, PetStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug,search=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting pet adoption search server");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Set up the pet store
    let store = Arc::new(MemoryStore::new());
    if config.seed_demo_pets {
        for pet in sample_pets() {
            store.add(pet).await.context("Failed to seed demo pets")?;
        }
        let count = store.count().await?;
        tracing::info!(count, "Seeded demo pet listings");
    }

    // Build application
    let state = AppState::new(store, config.breed_detection);
    let app = build_app(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Search endpoint: http://localhost:{}/api/search?q=", config.port);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
