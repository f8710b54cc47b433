//! Smart search orchestration: extraction, predicate choice, filtering.

use crate::extract::EntityExtractor;
use crate::predicate::{build_predicate, simple_text_predicate, Predicate};
use crate::types::{EntityRecord, PetRecord};

/// Result of a smart search: the matching pets plus the entities the
/// query was understood as, for display and debugging.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub results: Vec<PetRecord>,
    pub entities: EntityRecord,
}

/// Choose the predicate for a query.
///
/// Structured search when extraction found any signal, otherwise the
/// plain five-field substring fallback. This is the caller-side decision
/// point: an all-absent record would build a vacuous match-everything
/// predicate, which is not what "no structured signal" should mean.
pub fn predicate_for(query: &str, entities: &EntityRecord) -> Predicate {
    if entities.is_empty() {
        tracing::debug!(query, "no entity signal, using plain text fallback");
        simple_text_predicate(query)
    } else {
        build_predicate(entities)
    }
}

/// Run a query against an in-memory slice of pets.
///
/// An empty query lists everything. Zero matches is a normal outcome.
pub fn smart_search(extractor: &EntityExtractor, query: &str, pets: &[PetRecord]) -> SearchOutcome {
    let query = query.trim();
    if query.is_empty() {
        return SearchOutcome {
            results: pets.to_vec(),
            entities: EntityRecord::empty(),
        };
    }

    let entities = extractor.extract(query);
    let predicate = predicate_for(query, &entities);

    let results = pets
        .iter()
        .filter(|pet| predicate.matches(pet))
        .cloned()
        .collect();

    SearchOutcome { results, entities }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_pets;

    #[test]
    fn empty_query_lists_everything() {
        let pets = sample_pets();
        let outcome = smart_search(&EntityExtractor::new(), "", &pets);
        assert_eq!(outcome.results.len(), pets.len());
        assert!(outcome.entities.is_empty());
    }

    #[test]
    fn structured_query_filters_by_entities() {
        let pets = sample_pets();
        let outcome = smart_search(&EntityExtractor::new(), "friendly small black puppy", &pets);

        assert!(!outcome.entities.is_empty());
        assert_eq!(outcome.results.len(), 1);
        assert_eq!(outcome.results[0].name, "Rex");
    }

    #[test]
    fn unrecognized_query_falls_back_to_plain_text() {
        let pets = sample_pets();
        // "mi" is too short for a keyword and matches no vocabulary, so
        // extraction yields nothing and the fallback scans raw text.
        let outcome = smart_search(&EntityExtractor::new(), "mi", &pets);

        assert!(outcome.entities.is_empty());
        assert!(outcome
            .results
            .iter()
            .any(|p| p.name.to_lowercase().contains("mi")));
    }

    #[test]
    fn zero_matches_is_not_an_error() {
        let pets = sample_pets();
        let outcome = smart_search(&EntityExtractor::new(), "purple hamster", &pets);
        assert!(outcome.results.is_empty());
    }

    #[test]
    fn predicate_for_empty_record_uses_fallback() {
        let fallback = predicate_for("rex", &EntityRecord::empty());
        assert_ne!(fallback, Predicate::All(vec![]));
    }
}
