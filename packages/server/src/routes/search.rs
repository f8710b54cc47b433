//! Search endpoint: query understanding plus listing filtering.

use axum::extract::{Extension, Query};
use axum::Json;
use serde::{Deserialize, Serialize};

use search::{describe, smart_search, suggest, EntityRecord, PetRecord};

use crate::app::AppState;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub sort: Option<String>,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<PetRecord>,
    pub entities: EntityRecord,
    pub suggestions: Vec<String>,
    pub active_filters: Vec<String>,
    pub total_results: usize,
}

/// How to order search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum SortOrder {
    /// Newest listings first (also the "relevance" placeholder order).
    #[default]
    Recent,
    Name,
}

impl SortOrder {
    fn parse(value: Option<&str>) -> Self {
        match value {
            Some("name") => SortOrder::Name,
            _ => SortOrder::Recent,
        }
    }

    fn apply(&self, results: &mut [PetRecord]) {
        match self {
            SortOrder::Recent => results.sort_by(|a, b| b.listed_at.cmp(&a.listed_at)),
            SortOrder::Name => {
                results.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
            }
        }
    }
}

/// Search listings with query understanding.
///
/// Only pending and approved listings are searched. An empty query lists
/// everything adoptable; an unparseable query falls back to plain
/// substring search inside the core.
pub async fn search_handler(
    Extension(state): Extension<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    let query = params.q.trim().to_string();

    let listed: Vec<PetRecord> = state
        .store
        .list()
        .await?
        .into_iter()
        .filter(|pet| pet.status.is_listed())
        .collect();

    let outcome = smart_search(&state.extractor, &query, &listed);

    let suggestions = suggest(&query, &outcome.entities);
    let active_filters = describe(&outcome.entities);

    let mut results = outcome.results;
    SortOrder::parse(params.sort.as_deref()).apply(&mut results);

    tracing::debug!(
        query = %query,
        total = results.len(),
        filters = ?active_filters,
        "search completed"
    );

    Ok(Json(SearchResponse {
        query,
        total_results: results.len(),
        results,
        entities: outcome.entities,
        suggestions,
        active_filters,
    }))
}
