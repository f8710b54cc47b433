//! Structured result of parsing a free-text search query.

use serde::{Deserialize, Serialize};

/// Entities recognized in a single search query.
///
/// Every field is optional or empty unless the corresponding vocabulary
/// detected something. The record has no identity or lifecycle: it is
/// created fresh per query, handed to the predicate builder, and dropped.
///
/// Category detectors run independently over the whole query, so the same
/// word may populate more than one category ("puppy" sets both `pet_type`
/// and `age`). Exclusivity only holds within a single category's
/// synonym-to-canonical mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    /// Canonical pet type ("dog", "cat", "bird", "rabbit", "hamster").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet_type: Option<String>,

    /// Coat colors named in the query, in vocabulary order, deduplicated.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<String>,

    /// Canonical size band ("small", "medium", "large").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,

    /// Canonical temperament traits, in vocabulary order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub traits: Vec<String>,

    /// Canonical age band ("young", "adult", "senior").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,

    /// Best-effort breed guess. May preserve original casing from the
    /// query. Absent whenever no breed detector is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,

    /// Leftover tokens absorbed by no category, in query order.
    /// Stop words and all vocabulary words are excluded, as is any token
    /// of length two or shorter.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

impl EntityRecord {
    /// An all-absent record, the result for empty or unrecognized input.
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when no category carries any signal.
    ///
    /// Callers use this to fall back to plain substring search instead of
    /// relying on the vacuous predicate an empty record would build.
    pub fn is_empty(&self) -> bool {
        self.pet_type.is_none()
            && self.colors.is_empty()
            && self.size.is_none()
            && self.traits.is_empty()
            && self.age.is_none()
            && self.breed.is_none()
            && self.keywords.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_record_has_no_signal() {
        assert!(EntityRecord::empty().is_empty());
    }

    #[test]
    fn any_populated_field_counts_as_signal() {
        let record = EntityRecord {
            keywords: vec!["rescue".into()],
            ..Default::default()
        };
        assert!(!record.is_empty());

        let record = EntityRecord {
            age: Some("young".into()),
            ..Default::default()
        };
        assert!(!record.is_empty());
    }

    #[test]
    fn serializes_without_absent_fields() {
        let record = EntityRecord {
            pet_type: Some("dog".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, serde_json::json!({"pet_type": "dog"}));
    }
}
