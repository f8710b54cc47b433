//! Pet listing records the search core filters over.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Where a listing sits in the adoption workflow.
///
/// Search results only surface `Pending` and `Approved` listings; the rest
/// exist for the surrounding application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdoptionStatus {
    Pending,
    Approved,
    Adopted,
    Rejected,
}

impl AdoptionStatus {
    /// Whether the pet should appear in adoption search results.
    pub fn is_listed(&self) -> bool {
        matches!(self, AdoptionStatus::Pending | AdoptionStatus::Approved)
    }
}

/// A pet available (or previously available) for adoption.
///
/// The search core never mutates these; it only reads fields to evaluate
/// match predicates. There is no dedicated size attribute, so size and
/// temperament live inside the free-text `details` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetRecord {
    pub id: Uuid,
    pub name: String,
    /// Animal type ("dog", "cat", ...). Free text, matched by containment.
    pub species: String,
    pub breed: String,
    pub color: String,
    pub gender: String,
    /// Age in years.
    pub age: f32,
    pub location: String,
    /// Free-text description; carries size and temperament descriptors.
    pub details: String,
    pub status: AdoptionStatus,
    pub listed_at: DateTime<Utc>,
}

impl PetRecord {
    /// Create a listing with a fresh id, pending status and current
    /// timestamp. Remaining fields are set by the builder-style setters.
    pub fn new(name: impl Into<String>, species: impl Into<String>, age: f32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            species: species.into(),
            breed: String::new(),
            color: String::new(),
            gender: String::new(),
            age,
            location: String::new(),
            details: String::new(),
            status: AdoptionStatus::Pending,
            listed_at: Utc::now(),
        }
    }

    pub fn with_breed(mut self, breed: impl Into<String>) -> Self {
        self.breed = breed.into();
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = gender.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = details.into();
        self
    }

    pub fn with_status(mut self, status: AdoptionStatus) -> Self {
        self.status = status;
        self
    }
}
