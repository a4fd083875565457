//! Field validation for restaurant records.
//!
//! Validation runs in the client library before a request is sent; the
//! server only surfaces database constraint violations.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::{ADDRESS_MAX_LEN, NAME_MAX_LEN, NewRestaurant, RestaurantPatch};

// Words of letters/digits starting with a letter, single spaces between words.
// Rejects leading digits, double spaces and edge whitespace.
static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9]*(?:\s[A-Za-z][A-Za-z0-9]*)*$").expect("valid name pattern")
});

// Exactly ten ASCII digits.
static CONTACT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("valid contact pattern"));

/// A field value the client refuses to submit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error(
        "invalid name: must start with a letter and contain only letters, digits and single spaces"
    )]
    InvalidName,
    #[error("name exceeds {NAME_MAX_LEN} characters")]
    NameTooLong,
    #[error("invalid contact: must be exactly 10 digits")]
    InvalidContact,
    #[error("address must not be empty")]
    EmptyAddress,
    #[error("address exceeds {ADDRESS_MAX_LEN} characters")]
    AddressTooLong,
}

/// Validates a name against the form rules.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if !NAME_RE.is_match(name) {
        return Err(ValidationError::InvalidName);
    }
    if name.len() > NAME_MAX_LEN {
        return Err(ValidationError::NameTooLong);
    }
    Ok(())
}

/// Validates a contact number against the form rules.
pub fn validate_contact(contact: &str) -> Result<(), ValidationError> {
    // The 10-digit rule already fits inside the CONTACT_MAX_LEN column cap
    if !CONTACT_RE.is_match(contact) {
        return Err(ValidationError::InvalidContact);
    }
    Ok(())
}

/// Validates an address against the form rules.
pub fn validate_address(address: &str) -> Result<(), ValidationError> {
    if address.trim().is_empty() {
        return Err(ValidationError::EmptyAddress);
    }
    if address.len() > ADDRESS_MAX_LEN {
        return Err(ValidationError::AddressTooLong);
    }
    Ok(())
}

/// Validates a full create payload.
pub fn validate_new(new: &NewRestaurant) -> Result<(), ValidationError> {
    validate_name(&new.name)?;
    validate_contact(&new.contact)?;
    validate_address(&new.address)?;
    Ok(())
}

/// Validates only the fields a patch actually sets.
pub fn validate_patch(patch: &RestaurantPatch) -> Result<(), ValidationError> {
    if let Some(name) = &patch.name {
        validate_name(name)?;
    }
    if let Some(contact) = &patch.contact {
        validate_contact(contact)?;
    }
    if let Some(address) = &patch.address {
        validate_address(address)?;
    }
    Ok(())
}
