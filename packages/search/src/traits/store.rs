//! Storage trait for pet listings.
//!
//! The search core only needs a queryable collection of pet records; how
//! they are persisted belongs to the application. The trait is async so a
//! database-backed implementation can slot in behind the same seam the
//! in-memory store uses.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::predicate::Predicate;
use crate::types::PetRecord;

/// A queryable collection of pet listings.
#[async_trait]
pub trait PetStore: Send + Sync {
    /// All listings, unordered.
    async fn list(&self) -> Result<Vec<PetRecord>>;

    /// Look up a listing by id.
    async fn get(&self, id: Uuid) -> Result<Option<PetRecord>>;

    /// Add a listing.
    async fn add(&self, pet: PetRecord) -> Result<()>;

    /// Listings matching a predicate. Zero matches is a normal outcome.
    async fn find_matching(&self, predicate: &Predicate) -> Result<Vec<PetRecord>> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|pet| predicate.matches(pet))
            .collect())
    }

    /// Number of listings.
    async fn count(&self) -> Result<usize>;
}
