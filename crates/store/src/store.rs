use async_trait::async_trait;
use model::{NewRestaurant, Restaurant, RestaurantId, RestaurantPatch};

use crate::Result;

/// Data-access abstraction for restaurant records.
///
/// This is the whole persistence surface of the service: create, list,
/// get, partial update and delete against a single table. Implementations
/// must be thread-safe (Send + Sync).
#[async_trait]
pub trait RestaurantStore: Send + Sync {
    /// Inserts a new record and returns it with its generated id and
    /// timestamps. Fails with `DuplicateName` if the name is taken.
    async fn create(&self, new: NewRestaurant) -> Result<Restaurant>;

    /// Returns all records ordered by id (insertion order).
    async fn list(&self) -> Result<Vec<Restaurant>>;

    /// Retrieves a record by id. Returns `None` if it does not exist.
    async fn get(&self, id: RestaurantId) -> Result<Option<Restaurant>>;

    /// Applies a partial update: fields absent from the patch keep their
    /// stored values. Fails with `NotFound` for an unknown id and
    /// `DuplicateName` when renaming onto an existing name.
    async fn update(&self, id: RestaurantId, patch: RestaurantPatch) -> Result<Restaurant>;

    /// Deletes a record by id. Returns `true` if a record was removed.
    async fn delete(&self, id: RestaurantId) -> Result<bool>;
}
