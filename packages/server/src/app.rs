//! Application setup and router construction.

use std::sync::Arc;

use axum::{extract::Extension, routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use search::{create_breed_detector, EntityExtractor, PetStore};

use crate::routes::{analyze_handler, health_handler, search_handler, suggestions_handler};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PetStore>,
    pub extractor: Arc<EntityExtractor>,
}

impl AppState {
    pub fn new(store: Arc<dyn PetStore>, breed_detection: bool) -> Self {
        let extractor = EntityExtractor::with_detector(create_breed_detector(breed_detection));
        Self {
            store,
            extractor: Arc::new(extractor),
        }
    }
}

/// Build the Axum application router
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/search", get(search_handler))
        .route("/api/search/suggestions", get(suggestions_handler))
        .route("/api/search/analyze", get(analyze_handler))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
