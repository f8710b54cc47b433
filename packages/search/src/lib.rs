//! Rule-Based Query Understanding for Pet Adoption Search
//!
//! Turns free-text queries ("friendly small black puppy") into structured
//! entities, builds filter predicates over pet listings from them, and
//! proposes query refinements for autocomplete.
//!
//! # Design
//!
//! - Fixed vocabularies, no model inference: matching is substring
//!   containment against static synonym tables, initialized once.
//! - Pure and total: extraction and predicate building never fail for
//!   string input; empty input yields an empty record, not an error.
//! - Best-effort breed detection sits behind the [`BreedDetector`] trait
//!   with a no-op default, so its absence degrades silently.
//! - The caller chooses between the structured predicate and the plain
//!   text fallback; [`pipeline::smart_search`] encodes that decision.
//!
//! # Usage
//!
//! ```rust,ignore
//! use search::{EntityExtractor, build_predicate, describe, suggest};
//!
//! let extractor = EntityExtractor::new();
//! let entities = extractor.extract("friendly small black puppy");
//!
//! let predicate = build_predicate(&entities);
//! let labels = describe(&entities);          // ["Type: Dog", ...]
//! let hints = suggest("friendly", &entities); // query refinements
//! ```
//!
//! # Modules
//!
//! - [`vocab`] - Static vocabulary tables
//! - [`extract`] - Entity extraction
//! - [`predicate`] - Filter predicates over pet records
//! - [`suggest`] - Refinement suggestions and active-filter labels
//! - [`pipeline`] - Smart search orchestration with fallback
//! - [`traits`] - Breed detector and pet store seams
//! - [`stores`] - In-memory store implementation
//! - [`testing`] - Shared fixtures

pub mod detectors;
pub mod error;
pub mod extract;
pub mod pipeline;
pub mod predicate;
pub mod stores;
pub mod suggest;
pub mod testing;
pub mod traits;
pub mod types;
pub mod vocab;

// Re-export core types at crate root
pub use error::{Result, SearchError};
pub use extract::EntityExtractor;
pub use predicate::{build_predicate, simple_text_predicate, Predicate, TextField};
pub use suggest::{describe, suggest, MAX_SUGGESTIONS};
pub use traits::{BreedDetector, NoopBreedDetector, PetStore};
pub use types::{AdoptionStatus, EntityRecord, PetRecord};

// Re-export pipeline and detector implementations
pub use detectors::{create_breed_detector, CapitalizedWordDetector};
pub use pipeline::{predicate_for, smart_search, SearchOutcome};
pub use stores::MemoryStore;
