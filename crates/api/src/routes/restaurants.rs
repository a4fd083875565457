//! Restaurant CRUD endpoints.
//!
//! Per-record update and delete take the id as a query parameter on the
//! collection route; existing browser clients speak that wire shape.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use model::{NewRestaurant, Restaurant, RestaurantId, RestaurantPatch};
use serde::{Deserialize, Serialize};
use store::RestaurantStore;

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<S: RestaurantStore> {
    pub store: S,
}

/// Query parameter carrying the record id for PATCH/DELETE.
#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: i64,
}

#[derive(Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
    pub id: RestaurantId,
}

/// POST /user-service/restaurant — create a record.
#[tracing::instrument(skip(state, req))]
pub async fn create<S: RestaurantStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Json(req): Json<NewRestaurant>,
) -> Result<(StatusCode, Json<Restaurant>), ApiError> {
    metrics::counter!("restaurant_requests_total", "operation" => "create").increment(1);

    let created = state.store.create(req).await?;
    tracing::info!(id = %created.id, name = %created.name, "restaurant created");

    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /user-service/restaurant — list all records.
#[tracing::instrument(skip(state))]
pub async fn list<S: RestaurantStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<Vec<Restaurant>>, ApiError> {
    metrics::counter!("restaurant_requests_total", "operation" => "list").increment(1);

    let all = state.store.list().await?;
    Ok(Json(all))
}

/// GET /user-service/restaurant/:id — fetch a single record.
#[tracing::instrument(skip(state))]
pub async fn get<S: RestaurantStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<i64>,
) -> Result<Json<Restaurant>, ApiError> {
    metrics::counter!("restaurant_requests_total", "operation" => "get").increment(1);

    let id = RestaurantId::new(id);
    let record = state
        .store
        .get(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("restaurant {id} not found")))?;

    Ok(Json(record))
}

/// PATCH /user-service/restaurant?id=<id> — partial update of a record.
#[tracing::instrument(skip(state, patch))]
pub async fn update<S: RestaurantStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Query(query): Query<IdQuery>,
    Json(patch): Json<RestaurantPatch>,
) -> Result<Json<Restaurant>, ApiError> {
    metrics::counter!("restaurant_requests_total", "operation" => "update").increment(1);

    if patch.is_empty() {
        return Err(ApiError::BadRequest(
            "update requires at least one of name, contact, address".to_string(),
        ));
    }

    let id = RestaurantId::new(query.id);
    let updated = state.store.update(id, patch).await?;
    tracing::info!(id = %updated.id, "restaurant updated");

    Ok(Json(updated))
}

/// DELETE /user-service/restaurant?id=<id> — delete a record.
#[tracing::instrument(skip(state))]
pub async fn delete<S: RestaurantStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Query(query): Query<IdQuery>,
) -> Result<Json<DeleteResponse>, ApiError> {
    metrics::counter!("restaurant_requests_total", "operation" => "delete").increment(1);

    let id = RestaurantId::new(query.id);
    if !state.store.delete(id).await? {
        return Err(ApiError::NotFound(format!("restaurant {id} not found")));
    }
    tracing::info!(%id, "restaurant deleted");

    Ok(Json(DeleteResponse { deleted: true, id }))
}
