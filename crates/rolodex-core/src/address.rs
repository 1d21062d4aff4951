//! Address types.

use serde::{Deserialize, Serialize};

use crate::customer::require;
use crate::error::ValidationError;
use crate::ids::{AddressId, CustomerId};

/// An address record as persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Store-generated identifier.
    pub address_id: AddressId,

    /// The customer this address belongs to.
    pub customer_id: CustomerId,

    /// Street line.
    pub street_address: String,

    /// City name.
    pub city: String,

    /// State or region name.
    pub state: String,

    /// Postal code. Stored as given; no format validation.
    pub pin_code: String,
}

/// Creation payload with every field optional, so validation can report all
/// missing fields in one pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddressInput {
    /// Owning customer (required).
    pub customer_id: Option<CustomerId>,

    /// Street line (required).
    pub street_address: Option<String>,

    /// City name (required).
    pub city: Option<String>,

    /// State or region name (required).
    pub state: Option<String>,

    /// Postal code (required).
    pub pin_code: Option<String>,
}

impl AddressInput {
    /// Validate presence of every required field.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingFields`] naming each field that was
    /// absent or empty.
    pub fn validate(self) -> Result<NewAddress, ValidationError> {
        let mut missing = Vec::new();
        let customer_id = match self.customer_id {
            Some(id) => id,
            None => {
                missing.push("customer_id");
                CustomerId::new(0)
            }
        };
        let street_address = require("street_address", self.street_address, &mut missing);
        let city = require("city", self.city, &mut missing);
        let state = require("state", self.state, &mut missing);
        let pin_code = require("pin_code", self.pin_code, &mut missing);

        if missing.is_empty() {
            Ok(NewAddress {
                customer_id,
                street_address,
                city,
                state,
                pin_code,
            })
        } else {
            Err(ValidationError::MissingFields(missing))
        }
    }
}

/// A validated address creation payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAddress {
    /// Owning customer.
    pub customer_id: CustomerId,

    /// Street line.
    pub street_address: String,

    /// City name.
    pub city: String,

    /// State or region name.
    pub state: String,

    /// Postal code.
    pub pin_code: String,
}

/// Wholesale replacement of an address's mutable fields. The owning customer
/// is not part of the update surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressUpdate {
    /// Street line.
    pub street_address: String,

    /// City name.
    pub city: String,

    /// State or region name.
    pub state: String,

    /// Postal code.
    pub pin_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_input() -> AddressInput {
        AddressInput {
            customer_id: Some(CustomerId::new(1)),
            street_address: Some("12 MG Road".into()),
            city: Some("Pune".into()),
            state: Some("Maharashtra".into()),
            pin_code: Some("411001".into()),
        }
    }

    #[test]
    fn validate_accepts_complete_input() {
        let address = complete_input().validate().unwrap();
        assert_eq!(address.customer_id, CustomerId::new(1));
        assert_eq!(address.city, "Pune");
    }

    #[test]
    fn validate_requires_customer_id() {
        let input = AddressInput {
            customer_id: None,
            ..complete_input()
        };

        let err = input.validate().unwrap_err();
        assert_eq!(err.fields(), ["customer_id"]);
    }

    #[test]
    fn validate_names_every_missing_field() {
        let input = AddressInput {
            customer_id: Some(CustomerId::new(1)),
            street_address: None,
            city: Some(String::new()),
            state: Some("Maharashtra".into()),
            pin_code: None,
        };

        let err = input.validate().unwrap_err();
        assert_eq!(err.fields(), ["street_address", "city", "pin_code"]);
    }
}
