use async_trait::async_trait;
use model::{NewRestaurant, Restaurant, RestaurantId, RestaurantPatch};
use sqlx::{PgPool, Row, postgres::PgRow};

use crate::{Result, StoreError, store::RestaurantStore};

// SQLSTATE classes surfaced as client-caused constraint errors.
const STRING_TRUNCATION: &str = "22001";
const NOT_NULL_VIOLATION: &str = "23502";

/// PostgreSQL-backed restaurant store.
///
/// Takes an externally constructed pool; the caller owns the connection
/// lifecycle (connect at startup, close on shutdown).
#[derive(Clone)]
pub struct PostgresRestaurantStore {
    pool: PgPool,
}

impl PostgresRestaurantStore {
    /// Creates a store over an existing connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Runs the database migrations, creating the `restaurants` table if
    /// it does not exist yet.
    pub async fn run_migrations(&self) -> std::result::Result<(), sqlx::migrate::MigrateError> {
        tracing::debug!("running restaurant schema migrations");
        sqlx::migrate!("../../migrations").run(&self.pool).await
    }

    fn row_to_restaurant(row: PgRow) -> Result<Restaurant> {
        Ok(Restaurant {
            id: RestaurantId::new(row.try_get("id")?),
            name: row.try_get("name")?,
            contact: row.try_get("contact")?,
            address: row.try_get("address")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }

    fn map_write_error(err: sqlx::Error, name: Option<&str>) -> StoreError {
        if let sqlx::Error::Database(ref db_err) = err {
            if db_err.constraint() == Some("restaurants_name_key") {
                return StoreError::DuplicateName(name.unwrap_or_default().to_string());
            }
            if let Some(code) = db_err.code()
                && (code == STRING_TRUNCATION || code == NOT_NULL_VIOLATION)
            {
                return StoreError::Constraint(db_err.message().to_string());
            }
        }
        StoreError::Database(err)
    }
}

#[async_trait]
impl RestaurantStore for PostgresRestaurantStore {
    async fn create(&self, new: NewRestaurant) -> Result<Restaurant> {
        let row = sqlx::query(
            r#"
            INSERT INTO restaurants (name, contact, address)
            VALUES ($1, $2, $3)
            RETURNING id, name, contact, address, created_at, updated_at
            "#,
        )
        .bind(&new.name)
        .bind(&new.contact)
        .bind(&new.address)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, Some(&new.name)))?;

        Self::row_to_restaurant(row)
    }

    async fn list(&self) -> Result<Vec<Restaurant>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, contact, address, created_at, updated_at
            FROM restaurants
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Self::row_to_restaurant).collect()
    }

    async fn get(&self, id: RestaurantId) -> Result<Option<Restaurant>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, contact, address, created_at, updated_at
            FROM restaurants
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Self::row_to_restaurant).transpose()
    }

    async fn update(&self, id: RestaurantId, patch: RestaurantPatch) -> Result<Restaurant> {
        // COALESCE keeps stored values for fields absent from the patch
        let row = sqlx::query(
            r#"
            UPDATE restaurants
            SET name = COALESCE($2, name),
                contact = COALESCE($3, contact),
                address = COALESCE($4, address),
                updated_at = now()
            WHERE id = $1
            RETURNING id, name, contact, address, created_at, updated_at
            "#,
        )
        .bind(id.as_i64())
        .bind(patch.name.as_deref())
        .bind(patch.contact.as_deref())
        .bind(patch.address.as_deref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, patch.name.as_deref()))?;

        match row {
            Some(row) => Self::row_to_restaurant(row),
            None => Err(StoreError::NotFound(id)),
        }
    }

    async fn delete(&self, id: RestaurantId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM restaurants WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
