//! Breed detector implementations.

use std::sync::Arc;

use crate::traits::detector::{BreedDetector, NoopBreedDetector};

/// Proper-noun heuristic: the first run of capitalized words past the
/// start of the query is taken as a breed guess, original casing kept.
///
/// Queries are usually typed lowercase, so a capitalized mid-query word
/// ("black Labrador puppy") is a reasonable hint that the user named a
/// breed. The leading token is skipped because sentence-initial
/// capitalization carries no signal. Like any proper-noun spotter this
/// misfires on names and places; treat the guess as a hint only.
#[derive(Debug, Default, Clone, Copy)]
pub struct CapitalizedWordDetector;

impl CapitalizedWordDetector {
    pub fn new() -> Self {
        Self
    }
}

impl BreedDetector for CapitalizedWordDetector {
    fn detect(&self, query: &str) -> Option<String> {
        let mut run: Vec<&str> = Vec::new();

        for (i, word) in query.split_whitespace().enumerate() {
            let capitalized = word.chars().next().is_some_and(|c| c.is_uppercase());

            if i > 0 && capitalized {
                run.push(word);
            } else if !run.is_empty() {
                break;
            }
        }

        if run.is_empty() {
            None
        } else {
            Some(run.join(" "))
        }
    }
}

/// Create a breed detector based on configuration.
pub fn create_breed_detector(enabled: bool) -> Arc<dyn BreedDetector> {
    if enabled {
        tracing::info!("breed detection enabled with capitalized-word heuristic");
        Arc::new(CapitalizedWordDetector::new())
    } else {
        tracing::info!("breed detection disabled");
        Arc::new(NoopBreedDetector::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_capitalized_run_past_first_word() {
        let detector = CapitalizedWordDetector::new();
        assert_eq!(
            detector.detect("friendly Golden Retriever puppy"),
            Some("Golden Retriever".to_string())
        );
    }

    #[test]
    fn ignores_leading_capital() {
        let detector = CapitalizedWordDetector::new();
        // Sentence-initial capitalization alone is not a breed hint.
        assert_eq!(detector.detect("Friendly small dog"), None);
    }

    #[test]
    fn all_lowercase_yields_nothing() {
        let detector = CapitalizedWordDetector::new();
        assert_eq!(detector.detect("small black puppy"), None);
        assert_eq!(detector.detect(""), None);
    }

    #[test]
    fn stops_at_first_lowercase_after_run() {
        let detector = CapitalizedWordDetector::new();
        assert_eq!(
            detector.detect("calm Maine Coon cat Boston"),
            Some("Maine Coon".to_string())
        );
    }

    #[test]
    fn factory_respects_flag() {
        let enabled = create_breed_detector(true);
        assert!(enabled.detect("a Labrador").is_some());

        let disabled = create_breed_detector(false);
        assert!(disabled.detect("a Labrador").is_none());
    }
}
