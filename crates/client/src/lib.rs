//! Typed client for the restaurant directory service.
//!
//! Wraps the four REST calls (create, list, update-by-id, delete-by-id)
//! plus get-by-id behind a small object. Field validation runs locally
//! before create/update requests, so malformed input never reaches the
//! network. No retries, no caching.

pub mod error;

pub use error::{ClientError, ClientResult};
pub use model::{NewRestaurant, Restaurant, RestaurantId, RestaurantPatch};

use std::time::Duration;

use model::{validate_new, validate_patch};
use serde::Deserialize;
use serde::de::DeserializeOwned;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Outcome of a delete call.
#[derive(Debug, Deserialize)]
pub struct DeleteOutcome {
    pub deleted: bool,
    pub id: RestaurantId,
}

/// Shape of the server's JSON error bodies.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP client for the restaurant service.
#[derive(Debug, Clone)]
pub struct RestaurantClient {
    client: reqwest::Client,
    base_url: String,
}

impl RestaurantClient {
    /// Creates a client against a base URL such as `http://localhost:5005`.
    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Creates a client with an explicit request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> ClientResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/user-service/restaurant{path}", self.base_url)
    }

    /// Creates a restaurant. Validates all fields locally first.
    pub async fn create(&self, new: &NewRestaurant) -> ClientResult<Restaurant> {
        validate_new(new)?;
        tracing::debug!(name = %new.name, "creating restaurant");

        let response = self.client.post(self.url("")).json(new).send().await?;
        Self::handle_response(response).await
    }

    /// Fetches all restaurants.
    pub async fn list(&self) -> ClientResult<Vec<Restaurant>> {
        let response = self.client.get(self.url("")).send().await?;
        Self::handle_response(response).await
    }

    /// Fetches the authoritative record for one restaurant, e.g. to
    /// prefill an edit form.
    pub async fn get(&self, id: RestaurantId) -> ClientResult<Restaurant> {
        let response = self.client.get(self.url(&format!("/{id}"))).send().await?;
        Self::handle_response(response).await
    }

    /// Applies a partial update. Validates the submitted fields locally
    /// first; absent fields keep their stored values.
    pub async fn update(&self, id: RestaurantId, patch: &RestaurantPatch) -> ClientResult<Restaurant> {
        validate_patch(patch)?;
        tracing::debug!(%id, "updating restaurant");

        let response = self
            .client
            .patch(self.url(&format!("?id={id}")))
            .json(patch)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Deletes a restaurant by id.
    pub async fn delete(&self, id: RestaurantId) -> ClientResult<DeleteOutcome> {
        tracing::debug!(%id, "deleting restaurant");

        let response = self
            .client
            .delete(self.url(&format!("?id={id}")))
            .send()
            .await?;
        Self::handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .map(|b| b.error)
            .unwrap_or_else(|_| status.to_string());

        Err(match status.as_u16() {
            403 => ClientError::DuplicateName(message),
            404 => ClientError::NotFound(message),
            code => ClientError::Api {
                status: code,
                message,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = RestaurantClient::new("http://localhost:5005/").unwrap();
        assert_eq!(
            client.url("/3"),
            "http://localhost:5005/user-service/restaurant/3"
        );
        assert_eq!(
            client.url("?id=3"),
            "http://localhost:5005/user-service/restaurant?id=3"
        );
    }
}
