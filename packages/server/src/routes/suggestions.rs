//! Live-typing autocomplete and query analysis endpoints.

use axum::extract::{Extension, Query};
use axum::Json;
use serde::{Deserialize, Serialize};

use search::{describe, suggest, EntityRecord};

use crate::app::AppState;

#[derive(Debug, Deserialize)]
pub struct QueryParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<String>,
    pub entities: EntityRecord,
}

/// Query refinement suggestions for autocomplete.
///
/// An empty-but-well-formed entity record is a valid "no structured
/// signal" result, never an error.
pub async fn suggestions_handler(
    Extension(state): Extension<AppState>,
    Query(params): Query<QueryParams>,
) -> Json<SuggestionsResponse> {
    let query = params.q.trim();
    let entities = state.extractor.extract(query);
    let suggestions = suggest(query, &entities);

    Json(SuggestionsResponse {
        suggestions,
        entities,
    })
}

#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub query: String,
    pub entities: EntityRecord,
    pub active_filters: Vec<String>,
}

/// Entity breakdown for a query, with human-readable filter labels.
pub async fn analyze_handler(
    Extension(state): Extension<AppState>,
    Query(params): Query<QueryParams>,
) -> Json<AnalyzeResponse> {
    let query = params.q.trim().to_string();
    let entities = state.extractor.extract(&query);
    let active_filters = describe(&entities);

    Json(AnalyzeResponse {
        query,
        entities,
        active_filters,
    })
}
