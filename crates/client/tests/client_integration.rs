//! End-to-end tests driving the typed client against a live server.
//!
//! Each test serves the real router (backed by the in-memory store) on an
//! ephemeral port, so the client's request shapes and error mapping are
//! exercised over an actual socket.

use std::sync::OnceLock;

use client::{ClientError, NewRestaurant, RestaurantClient, RestaurantId, RestaurantPatch};
use metrics_exporter_prometheus::PrometheusHandle;
use store::InMemoryRestaurantStore;

static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

fn get_metrics_handle() -> PrometheusHandle {
    METRICS_HANDLE
        .get_or_init(|| {
            metrics_exporter_prometheus::PrometheusBuilder::new()
                .install_recorder()
                .expect("failed to install Prometheus recorder")
        })
        .clone()
}

/// Serves the app on an ephemeral port and returns a client pointed at it.
async fn spawn_server() -> RestaurantClient {
    let store = InMemoryRestaurantStore::new();
    let state = api::create_state(store);
    let app = api::create_app(state, get_metrics_handle());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind ephemeral port");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    RestaurantClient::new(format!("http://{addr}")).unwrap()
}

fn sample(name: &str) -> NewRestaurant {
    NewRestaurant {
        name: name.to_string(),
        contact: "9876543210".to_string(),
        address: "12 Main St".to_string(),
    }
}

#[tokio::test]
async fn create_list_delete_lifecycle() {
    let client = spawn_server().await;

    let created = client.create(&sample("Tasty Bites")).await.unwrap();
    assert_eq!(created.name, "Tasty Bites");
    assert_eq!(created.contact, "9876543210");
    assert_eq!(created.address, "12 Main St");

    let all = client.list().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0], created);

    let outcome = client.delete(created.id).await.unwrap();
    assert!(outcome.deleted);
    assert_eq!(outcome.id, created.id);

    assert!(client.list().await.unwrap().is_empty());
    let err = client.get(created.id).await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(_)));
}

#[tokio::test]
async fn get_fetches_authoritative_record_for_editing() {
    let client = spawn_server().await;
    let created = client.create(&sample("Edit Me")).await.unwrap();

    let fetched = client.get(created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn update_merges_partial_fields() {
    let client = spawn_server().await;
    let created = client.create(&sample("Patchwork")).await.unwrap();

    let patch = RestaurantPatch {
        contact: Some("0123456789".to_string()),
        ..Default::default()
    };
    let updated = client.update(created.id, &patch).await.unwrap();

    assert_eq!(updated.name, "Patchwork");
    assert_eq!(updated.contact, "0123456789");
    assert_eq!(updated.address, "12 Main St");
}

#[tokio::test]
async fn duplicate_name_maps_to_duplicate_error() {
    let client = spawn_server().await;
    client.create(&sample("Tasty Bites")).await.unwrap();

    let err = client.create(&sample("Tasty Bites")).await.unwrap_err();
    assert!(matches!(err, ClientError::DuplicateName(_)));
}

#[tokio::test]
async fn rename_onto_taken_name_maps_to_duplicate_error() {
    let client = spawn_server().await;
    client.create(&sample("Alpha")).await.unwrap();
    let beta = client.create(&sample("Beta")).await.unwrap();

    let patch = RestaurantPatch {
        name: Some("Alpha".to_string()),
        ..Default::default()
    };
    let err = client.update(beta.id, &patch).await.unwrap_err();
    assert!(matches!(err, ClientError::DuplicateName(_)));
}

#[tokio::test]
async fn invalid_fields_are_rejected_before_any_request() {
    // Bogus base URL: a validation failure must never hit the network
    let client = RestaurantClient::new("http://127.0.0.1:1").unwrap();

    let mut bad = sample("9Starts With Digit");
    let err = client.create(&bad).await.unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));

    bad = sample("Tasty  Bites");
    assert!(matches!(
        client.create(&bad).await.unwrap_err(),
        ClientError::Validation(_)
    ));

    bad = sample("Tasty Bites");
    bad.contact = "12345".to_string();
    assert!(matches!(
        client.create(&bad).await.unwrap_err(),
        ClientError::Validation(_)
    ));

    let patch = RestaurantPatch {
        name: Some(" leading space".to_string()),
        ..Default::default()
    };
    assert!(matches!(
        client.update(RestaurantId::new(1), &patch).await.unwrap_err(),
        ClientError::Validation(_)
    ));
}

#[tokio::test]
async fn delete_unknown_id_maps_to_not_found() {
    let client = spawn_server().await;

    let err = client.delete(RestaurantId::new(999)).await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(_)));
}
