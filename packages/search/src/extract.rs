//! Entity extraction from free-text search queries.

use std::sync::Arc;

use crate::traits::detector::{BreedDetector, NoopBreedDetector};
use crate::types::EntityRecord;
use crate::vocab::{
    match_all, match_first, AGE_TERMS, COLORS, PET_TYPES, SIZES, TRAITS, VOCABULARY_WORDS,
    WORD_RE,
};

/// Rule-based entity extractor for pet search queries.
///
/// Turns "friendly small black puppy" into a structured [`EntityRecord`]
/// using the fixed vocabulary tables in [`crate::vocab`] plus an optional
/// breed detector. Pure and total: any string input yields a record, never
/// an error, and empty input yields an all-absent record.
pub struct EntityExtractor {
    breed_detector: Arc<dyn BreedDetector>,
}

impl Default for EntityExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityExtractor {
    /// Extractor without breed detection.
    pub fn new() -> Self {
        Self {
            breed_detector: Arc::new(NoopBreedDetector::new()),
        }
    }

    /// Extractor with the given breed detector.
    pub fn with_detector(breed_detector: Arc<dyn BreedDetector>) -> Self {
        Self { breed_detector }
    }

    /// Extract structured entities from a search query.
    ///
    /// Detection runs per category over the whole normalized query: pet
    /// type, colors, size, traits, age band, breed, then leftover
    /// keywords. Each detector is independent, so overlapping vocabulary
    /// ("puppy") can populate several categories at once.
    pub fn extract(&self, query: &str) -> EntityRecord {
        let query = query.trim();
        if query.is_empty() {
            return EntityRecord::empty();
        }

        let query_lower = query.to_lowercase();

        let record = EntityRecord {
            pet_type: match_first(&query_lower, PET_TYPES).map(str::to_string),
            colors: extract_colors(&query_lower),
            size: match_first(&query_lower, SIZES).map(str::to_string),
            traits: match_all(&query_lower, TRAITS),
            age: match_first(&query_lower, AGE_TERMS).map(str::to_string),
            // Breed detection sees the original casing.
            breed: self.breed_detector.detect(query),
            keywords: extract_keywords(&query_lower),
        };

        tracing::debug!(
            query,
            pet_type = ?record.pet_type,
            colors = ?record.colors,
            keywords = ?record.keywords,
            "extracted entities"
        );

        record
    }
}

/// Colors mentioned anywhere in the query, in vocabulary order.
fn extract_colors(query_lower: &str) -> Vec<String> {
    COLORS
        .iter()
        .filter(|color| query_lower.contains(*color))
        .map(|color| color.to_string())
        .collect()
}

/// Tokens absorbed by no category.
///
/// Excludes the union of every vocabulary synonym, whether or not it
/// matched this particular query, plus stop words and any token of length
/// two or shorter. Order follows the query.
fn extract_keywords(query_lower: &str) -> Vec<String> {
    WORD_RE
        .find_iter(query_lower)
        .map(|m| m.as_str())
        .filter(|word| word.len() > 2 && !VOCABULARY_WORDS.contains(word))
        .map(str::to_string)
        .collect()
}
