//! Shared types for the restaurant directory service.
//!
//! The entity definitions here are the single source of truth for both the
//! server and the client library; timestamps serialize under their
//! camelCase wire names (`createdAt`, `updatedAt`).

pub mod validate;

pub use validate::{ValidationError, validate_new, validate_patch};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum stored length of `name`.
pub const NAME_MAX_LEN: usize = 128;
/// Maximum stored length of `contact`.
pub const CONTACT_MAX_LEN: usize = 15;
/// Maximum stored length of `address`.
pub const ADDRESS_MAX_LEN: usize = 255;

/// Unique identifier for a restaurant record.
///
/// Wraps the auto-generated integer key to prevent mixing it up with
/// other integer values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RestaurantId(i64);

impl RestaurantId {
    /// Creates an ID from a raw database key.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the underlying integer key.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for RestaurantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RestaurantId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<RestaurantId> for i64 {
    fn from(id: RestaurantId) -> Self {
        id.0
    }
}

/// A persisted restaurant record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub contact: String,
    pub address: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Fields required to create a restaurant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRestaurant {
    pub name: String,
    pub contact: String,
    pub address: String,
}

/// Partial update: absent fields keep their stored values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RestaurantPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl RestaurantPatch {
    /// True if no field is set; applying it would be a no-op.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.contact.is_none() && self.address.is_none()
    }

    /// Applies the patch to an existing record, leaving absent fields alone.
    pub fn merge_into(&self, record: &mut Restaurant) {
        if let Some(name) = &self.name {
            record.name = name.clone();
        }
        if let Some(contact) = &self.contact {
            record.contact = contact.clone();
        }
        if let Some(address) = &self.address {
            record.address = address.clone();
        }
    }
}
