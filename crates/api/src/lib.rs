//! HTTP API server for the restaurant directory service.
//!
//! Exposes the restaurant CRUD surface under `/user-service/restaurant`,
//! with structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderName, HeaderValue, Method, header};
use axum::routing::get;
use metrics_exporter_prometheus::PrometheusHandle;
use store::RestaurantStore;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::restaurants::AppState;

/// Origins the browser clients are served from.
const ALLOWED_ORIGINS: [&str; 3] = [
    "http://127.0.0.1:5173",
    "http://localhost:5173",
    "http://localhost:5005",
];

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S: RestaurantStore + 'static>(
    state: Arc<AppState<S>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(
            ALLOWED_ORIGINS.map(HeaderValue::from_static),
        ))
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([
            header::ORIGIN,
            HeaderName::from_static("x-requested-with"),
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
        ])
        .allow_credentials(true);

    Router::new()
        .route("/health", get(routes::health::check))
        .route(
            "/user-service/restaurant",
            axum::routing::post(routes::restaurants::create::<S>)
                .get(routes::restaurants::list::<S>)
                .patch(routes::restaurants::update::<S>)
                .delete(routes::restaurants::delete::<S>),
        )
        .route(
            "/user-service/restaurant/{id}",
            get(routes::restaurants::get::<S>),
        )
        .with_state(state)
        .merge(metrics_router)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Creates the shared application state around a store.
pub fn create_state<S: RestaurantStore + 'static>(store: S) -> Arc<AppState<S>> {
    Arc::new(AppState { store })
}
