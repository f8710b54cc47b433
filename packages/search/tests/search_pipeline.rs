//! End-to-end tests: extraction, predicate building, filtering, labels.

use proptest::prelude::*;

use search::testing::sample_pets;
use search::{
    build_predicate, describe, smart_search, suggest, EntityExtractor, MemoryStore, PetStore,
};

#[test]
fn query_to_results_round_trip() {
    let extractor = EntityExtractor::new();
    let pets = sample_pets();

    let outcome = smart_search(&extractor, "calm cat", &pets);
    assert_eq!(outcome.entities.pet_type.as_deref(), Some("cat"));
    assert_eq!(outcome.entities.traits, vec!["calm"]);

    // Only Luna is both a cat and described as calm.
    assert_eq!(outcome.results.len(), 1);
    assert_eq!(outcome.results[0].name, "Luna");

    assert_eq!(describe(&outcome.entities), vec!["Type: Cat", "Traits: Calm"]);
}

#[test]
fn age_band_query_filters_numerically() {
    let extractor = EntityExtractor::new();
    let pets = sample_pets();

    let outcome = smart_search(&extractor, "senior cat", &pets);
    assert_eq!(outcome.results.len(), 1);
    assert_eq!(outcome.results[0].name, "Whiskers");
    assert!(outcome.results[0].age > 7.0);
}

#[test]
fn keyword_only_query_scans_all_text_fields() {
    let extractor = EntityExtractor::new();
    let pets = sample_pets();

    // "whistles" is no vocabulary word; it survives as a keyword and
    // matches Coco's details.
    let outcome = smart_search(&extractor, "whistles", &pets);
    assert_eq!(outcome.entities.keywords, vec!["whistles"]);
    assert_eq!(outcome.results.len(), 1);
    assert_eq!(outcome.results[0].name, "Coco");
}

#[test]
fn suggestions_complement_extraction() {
    let extractor = EntityExtractor::new();

    let entities = extractor.extract("friendly");
    assert_eq!(
        suggest("friendly", &entities),
        vec!["friendly dog", "friendly cat"]
    );

    let entities = extractor.extract("black");
    assert_eq!(
        suggest("black", &entities),
        vec!["black puppy", "black kitten"]
    );
}

#[tokio::test]
async fn store_evaluates_predicates() {
    let store = MemoryStore::with_pets(sample_pets());
    let extractor = EntityExtractor::new();

    let entities = extractor.extract("young dog");
    let matches = store.find_matching(&build_predicate(&entities)).await.unwrap();

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].name, "Rex");
}

proptest! {
    // Extraction is total: any input produces a record without panicking,
    // and empty input produces an empty record.
    #[test]
    fn extraction_never_panics(query in ".{0,200}") {
        let extractor = EntityExtractor::new();
        let _ = extractor.extract(&query);
    }

    // Labels never omit a populated category and never fail.
    #[test]
    fn describe_is_total_over_extracted_records(query in "[a-zA-Z ]{0,80}") {
        let extractor = EntityExtractor::new();
        let entities = extractor.extract(&query);
        let labels = describe(&entities);

        let mut expected = 0;
        expected += usize::from(entities.pet_type.is_some());
        expected += usize::from(!entities.colors.is_empty());
        expected += usize::from(entities.size.is_some());
        expected += usize::from(!entities.traits.is_empty());
        expected += usize::from(entities.age.is_some());
        expected += usize::from(entities.breed.is_some());
        prop_assert_eq!(labels.len(), expected);
    }

    // Building and evaluating a predicate from any extracted record is
    // total as well.
    #[test]
    fn predicates_evaluate_without_panic(query in "[a-zA-Z ]{0,80}") {
        let extractor = EntityExtractor::new();
        let predicate = build_predicate(&extractor.extract(&query));
        for pet in sample_pets() {
            let _ = predicate.matches(&pet);
        }
    }
}
