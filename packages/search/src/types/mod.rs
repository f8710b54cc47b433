//! Core data types.

pub mod entities;
pub mod pet;

pub use entities::EntityRecord;
pub use pet::{AdoptionStatus, PetRecord};
