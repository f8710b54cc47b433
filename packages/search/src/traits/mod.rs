//! Core trait abstractions.

pub mod detector;
pub mod store;

pub use detector::{BreedDetector, NoopBreedDetector};
pub use store::PetStore;
