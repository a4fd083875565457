pub mod error;
pub mod memory;
pub mod postgres;
pub mod store;

pub use error::{Result, StoreError};
pub use memory::InMemoryRestaurantStore;
pub use model::{NewRestaurant, Restaurant, RestaurantId, RestaurantPatch};
pub use postgres::PostgresRestaurantStore;
pub use store::RestaurantStore;
