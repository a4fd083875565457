use model::RestaurantId;
use thiserror::Error;

/// Errors that can occur in the data-access layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Another record already holds the requested name.
    #[error("a restaurant named {0:?} already exists")]
    DuplicateName(String),

    /// No record exists with the given id.
    #[error("restaurant {0} not found")]
    NotFound(RestaurantId),

    /// A column constraint rejected the value (over-length, missing field).
    #[error("constraint violation: {0}")]
    Constraint(String),

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A database migration error occurred.
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
