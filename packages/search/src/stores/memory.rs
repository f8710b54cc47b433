//! In-memory pet store for the demo server and tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;
use uuid::Uuid;

use crate::error::Result;
use crate::traits::store::PetStore;
use crate::types::PetRecord;

/// In-memory storage for pet listings.
///
/// Data is lost on restart; production deployments put a real database
/// behind [`PetStore`] instead.
pub struct MemoryStore {
    pets: RwLock<HashMap<Uuid, PetRecord>>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            pets: RwLock::new(HashMap::new()),
        }
    }

    /// Create a store pre-populated with the given listings.
    pub fn with_pets(pets: impl IntoIterator<Item = PetRecord>) -> Self {
        let store = Self::new();
        {
            let mut map = store.pets.write().unwrap();
            for pet in pets {
                map.insert(pet.id, pet);
            }
        }
        store
    }

    /// Remove all listings.
    pub fn clear(&self) {
        self.pets.write().unwrap().clear();
    }
}

#[async_trait]
impl PetStore for MemoryStore {
    async fn list(&self) -> Result<Vec<PetRecord>> {
        Ok(self.pets.read().unwrap().values().cloned().collect())
    }

    async fn get(&self, id: Uuid) -> Result<Option<PetRecord>> {
        Ok(self.pets.read().unwrap().get(&id).cloned())
    }

    async fn add(&self, pet: PetRecord) -> Result<()> {
        self.pets.write().unwrap().insert(pet.id, pet);
        Ok(())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.pets.read().unwrap().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::simple_text_predicate;

    #[tokio::test]
    async fn add_get_and_count() {
        let store = MemoryStore::new();
        let pet = PetRecord::new("Rex", "dog", 3.0);
        let id = pet.id;

        store.add(pet).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 1);
        assert_eq!(store.get(id).await.unwrap().unwrap().name, "Rex");
        assert!(store.get(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_matching_filters_with_predicate() {
        let store = MemoryStore::with_pets([
            PetRecord::new("Rex", "dog", 3.0),
            PetRecord::new("Luna", "cat", 2.0),
        ]);

        let dogs = store
            .find_matching(&simple_text_predicate("dog"))
            .await
            .unwrap();
        assert_eq!(dogs.len(), 1);
        assert_eq!(dogs[0].name, "Rex");

        let none = store
            .find_matching(&simple_text_predicate("parrot"))
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn clear_empties_the_store() {
        let store = MemoryStore::with_pets([PetRecord::new("Rex", "dog", 3.0)]);
        store.clear();
        assert_eq!(store.count().await.unwrap(), 0);
    }
}
