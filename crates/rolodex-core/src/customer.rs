//! Customer types.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::ids::CustomerId;

/// A customer record as persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Store-generated identifier.
    pub customer_id: CustomerId,

    /// Given name.
    pub first_name: String,

    /// Family name.
    pub last_name: String,

    /// Contact number. Stored as given; no format validation.
    pub phone_number: String,
}

/// Creation payload with every field optional, so validation can report all
/// missing fields in one pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerInput {
    /// Given name (required).
    pub first_name: Option<String>,

    /// Family name (required).
    pub last_name: Option<String>,

    /// Contact number (required).
    pub phone_number: Option<String>,
}

impl CustomerInput {
    /// Validate presence of every required field.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingFields`] naming each field that was
    /// absent or empty.
    pub fn validate(self) -> Result<NewCustomer, ValidationError> {
        let mut missing = Vec::new();
        let first_name = require("first_name", self.first_name, &mut missing);
        let last_name = require("last_name", self.last_name, &mut missing);
        let phone_number = require("phone_number", self.phone_number, &mut missing);

        if missing.is_empty() {
            Ok(NewCustomer {
                first_name,
                last_name,
                phone_number,
            })
        } else {
            Err(ValidationError::MissingFields(missing))
        }
    }
}

/// A validated customer payload, used both for creation and for the
/// wholesale field replacement performed by updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCustomer {
    /// Given name.
    pub first_name: String,

    /// Family name.
    pub last_name: String,

    /// Contact number.
    pub phone_number: String,
}

/// Record `name` in `missing` when `value` is absent or empty, otherwise
/// return the value.
pub(crate) fn require(
    name: &'static str,
    value: Option<String>,
    missing: &mut Vec<&'static str>,
) -> String {
    match value {
        Some(value) if !value.is_empty() => value,
        _ => {
            missing.push(name);
            String::new()
        }
    }
}
