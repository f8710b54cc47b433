//! Composable filter predicates over pet records.
//!
//! [`build_predicate`] turns an [`EntityRecord`] into a conjunctive filter;
//! [`simple_text_predicate`] is the raw-text fallback callers use when
//! extraction found no signal.

use serde::Serialize;

use crate::types::{EntityRecord, PetRecord};

/// Young means under this many years.
pub const YOUNG_MAX_AGE: f32 = 2.0;

/// Senior means over this many years; adult is the inclusive band between.
pub const SENIOR_MIN_AGE: f32 = 7.0;

/// Text fields of a pet record a predicate can match against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextField {
    Name,
    Species,
    Breed,
    Color,
    Details,
}

impl TextField {
    /// The five fields plain-text fallback search scans.
    pub const FALLBACK_FIELDS: [TextField; 5] = [
        TextField::Name,
        TextField::Details,
        TextField::Breed,
        TextField::Species,
        TextField::Color,
    ];

    fn text<'a>(&self, pet: &'a PetRecord) -> &'a str {
        match self {
            TextField::Name => &pet.name,
            TextField::Species => &pet.species,
            TextField::Breed => &pet.breed,
            TextField::Color => &pet.color,
            TextField::Details => &pet.details,
        }
    }
}

/// A boolean filter expression over pet records.
///
/// `All([])` is vacuously true; building from an all-absent entity record
/// yields exactly that, so callers deciding between structured search and
/// the raw-text fallback must check [`EntityRecord::is_empty`] themselves
/// rather than relying on the vacuous predicate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Predicate {
    /// Conjunction; empty means match everything.
    All(Vec<Predicate>),
    /// Disjunction; empty means match nothing.
    Any(Vec<Predicate>),
    /// Negation.
    Not(Box<Predicate>),
    /// Case-insensitive substring match on a text field.
    Contains { field: TextField, needle: String },
    /// Age strictly below the bound.
    AgeBelow(f32),
    /// Age strictly above the bound.
    AgeAbove(f32),
    /// Age within the inclusive range.
    AgeBetween { min: f32, max: f32 },
}

impl Predicate {
    /// Case-insensitive containment primitive.
    pub fn contains(field: TextField, needle: impl Into<String>) -> Self {
        Predicate::Contains {
            field,
            needle: needle.into().to_lowercase(),
        }
    }

    /// Evaluate against a single pet record.
    ///
    /// Total: never fails, and an empty result set over a collection is a
    /// normal outcome rather than an error.
    pub fn matches(&self, pet: &PetRecord) -> bool {
        match self {
            Predicate::All(clauses) => clauses.iter().all(|c| c.matches(pet)),
            Predicate::Any(clauses) => clauses.iter().any(|c| c.matches(pet)),
            Predicate::Not(inner) => !inner.matches(pet),
            Predicate::Contains { field, needle } => {
                field.text(pet).to_lowercase().contains(needle.as_str())
            }
            Predicate::AgeBelow(bound) => pet.age < *bound,
            Predicate::AgeAbove(bound) => pet.age > *bound,
            Predicate::AgeBetween { min, max } => pet.age >= *min && pet.age <= *max,
        }
    }
}

/// Build the conjunctive filter for an entity record.
///
/// Every populated category contributes one clause, ANDed together:
///
/// - pet type, each color, size and breed are single containment checks
///   (size against the free-text details, since records carry no size
///   attribute);
/// - each trait is an OR across details, breed and species;
/// - the age band maps to the fixed numeric thresholds;
/// - each leftover keyword is an OR across the five fallback fields,
///   independently required.
pub fn build_predicate(entities: &EntityRecord) -> Predicate {
    let mut clauses = Vec::new();

    if let Some(pet_type) = &entities.pet_type {
        clauses.push(Predicate::contains(TextField::Species, pet_type));
    }

    for color in &entities.colors {
        clauses.push(Predicate::contains(TextField::Color, color));
    }

    if let Some(size) = &entities.size {
        clauses.push(Predicate::contains(TextField::Details, size));
    }

    for trait_name in &entities.traits {
        clauses.push(Predicate::Any(vec![
            Predicate::contains(TextField::Details, trait_name),
            Predicate::contains(TextField::Breed, trait_name),
            Predicate::contains(TextField::Species, trait_name),
        ]));
    }

    if let Some(age) = &entities.age {
        clauses.push(match age.as_str() {
            "young" => Predicate::AgeBelow(YOUNG_MAX_AGE),
            "senior" => Predicate::AgeAbove(SENIOR_MIN_AGE),
            _ => Predicate::AgeBetween {
                min: YOUNG_MAX_AGE,
                max: SENIOR_MIN_AGE,
            },
        });
    }

    if let Some(breed) = &entities.breed {
        clauses.push(Predicate::contains(TextField::Breed, breed));
    }

    for keyword in &entities.keywords {
        clauses.push(Predicate::Any(
            TextField::FALLBACK_FIELDS
                .iter()
                .map(|field| Predicate::contains(*field, keyword))
                .collect(),
        ));
    }

    Predicate::All(clauses)
}

/// Plain substring search across the five fallback fields.
///
/// Used by callers when extraction yields no structured signal.
pub fn simple_text_predicate(query: &str) -> Predicate {
    let needle = query.trim();
    Predicate::Any(
        TextField::FALLBACK_FIELDS
            .iter()
            .map(|field| Predicate::contains(*field, needle))
            .collect(),
    )
}
