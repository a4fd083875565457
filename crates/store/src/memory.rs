use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use model::{
    ADDRESS_MAX_LEN, CONTACT_MAX_LEN, NAME_MAX_LEN, NewRestaurant, Restaurant, RestaurantId,
    RestaurantPatch,
};
use tokio::sync::RwLock;

use crate::{Result, StoreError, store::RestaurantStore};

/// In-memory store implementation for testing.
///
/// Mirrors the PostgreSQL implementation's constraint behavior (unique
/// name, column length caps) so API tests exercise the same error paths.
#[derive(Clone, Default)]
pub struct InMemoryRestaurantStore {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Default)]
struct Inner {
    records: BTreeMap<RestaurantId, Restaurant>,
    next_id: i64,
}

impl InMemoryRestaurantStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored records.
    pub async fn count(&self) -> usize {
        self.inner.read().await.records.len()
    }

    /// Removes all records and resets the id counter.
    pub async fn clear(&self) {
        let mut inner = self.inner.write().await;
        inner.records.clear();
        inner.next_id = 0;
    }
}

fn check_lengths(name: &str, contact: &str, address: &str) -> Result<()> {
    if name.len() > NAME_MAX_LEN {
        return Err(StoreError::Constraint(format!(
            "name exceeds {NAME_MAX_LEN} characters"
        )));
    }
    if contact.len() > CONTACT_MAX_LEN {
        return Err(StoreError::Constraint(format!(
            "contact exceeds {CONTACT_MAX_LEN} characters"
        )));
    }
    if address.len() > ADDRESS_MAX_LEN {
        return Err(StoreError::Constraint(format!(
            "address exceeds {ADDRESS_MAX_LEN} characters"
        )));
    }
    Ok(())
}

#[async_trait]
impl RestaurantStore for InMemoryRestaurantStore {
    async fn create(&self, new: NewRestaurant) -> Result<Restaurant> {
        check_lengths(&new.name, &new.contact, &new.address)?;

        let mut inner = self.inner.write().await;
        if inner.records.values().any(|r| r.name == new.name) {
            return Err(StoreError::DuplicateName(new.name));
        }

        inner.next_id += 1;
        let now = Utc::now();
        let record = Restaurant {
            id: RestaurantId::new(inner.next_id),
            name: new.name,
            contact: new.contact,
            address: new.address,
            created_at: now,
            updated_at: now,
        };
        inner.records.insert(record.id, record.clone());
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<Restaurant>> {
        // BTreeMap iteration is id order, which matches insertion order here
        Ok(self.inner.read().await.records.values().cloned().collect())
    }

    async fn get(&self, id: RestaurantId) -> Result<Option<Restaurant>> {
        Ok(self.inner.read().await.records.get(&id).cloned())
    }

    async fn update(&self, id: RestaurantId, patch: RestaurantPatch) -> Result<Restaurant> {
        let mut inner = self.inner.write().await;

        if let Some(name) = &patch.name
            && inner.records.values().any(|r| r.name == *name && r.id != id)
        {
            return Err(StoreError::DuplicateName(name.clone()));
        }

        let Some(record) = inner.records.get(&id) else {
            return Err(StoreError::NotFound(id));
        };

        let mut updated = record.clone();
        patch.merge_into(&mut updated);
        check_lengths(&updated.name, &updated.contact, &updated.address)?;
        updated.updated_at = Utc::now();

        inner.records.insert(id, updated.clone());
        Ok(updated)
    }

    async fn delete(&self, id: RestaurantId) -> Result<bool> {
        Ok(self.inner.write().await.records.remove(&id).is_some())
    }
}
