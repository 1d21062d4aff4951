//! Aggregated customer views.
//!
//! These types are derived, never persisted: the list endpoint recomputes
//! the aggregation on every request.

use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::customer::Customer;
use crate::ids::CustomerId;

/// One row of the aggregated customer view: the customer's base fields plus
/// summary statistics over its addresses.
///
/// The concatenated fields are comma-joined lists of the corresponding
/// address column, and `None` when the customer has no addresses (the left
/// join produces no rows to aggregate).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerSummary {
    /// Store-generated identifier.
    pub customer_id: CustomerId,

    /// Given name.
    pub first_name: String,

    /// Family name.
    pub last_name: String,

    /// Contact number.
    pub phone_number: String,

    /// Number of addresses on file.
    pub address_count: i64,

    /// Comma-joined city list, `None` when no addresses exist.
    pub cities: Option<String>,

    /// Comma-joined state list, `None` when no addresses exist.
    pub states: Option<String>,

    /// Comma-joined postal code list, `None` when no addresses exist.
    pub pin_codes: Option<String>,
}

/// A customer with its full address list embedded, as returned by get-by-id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDetail {
    /// The customer's base fields, flattened into the top level.
    #[serde(flatten)]
    pub customer: Customer,

    /// Every address on file for the customer, possibly empty.
    pub addresses: Vec<Address>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::AddressId;

    #[test]
    fn detail_flattens_customer_fields() {
        let detail = CustomerDetail {
            customer: Customer {
                customer_id: CustomerId::new(3),
                first_name: "Ann".into(),
                last_name: "Lee".into(),
                phone_number: "555-0100".into(),
            },
            addresses: vec![Address {
                address_id: AddressId::new(8),
                customer_id: CustomerId::new(3),
                street_address: "12 MG Road".into(),
                city: "Pune".into(),
                state: "Maharashtra".into(),
                pin_code: "411001".into(),
            }],
        };

        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["customer_id"], 3);
        assert_eq!(json["first_name"], "Ann");
        assert_eq!(json["addresses"][0]["city"], "Pune");
    }

    #[test]
    fn summary_serializes_null_concatenations() {
        let summary = CustomerSummary {
            customer_id: CustomerId::new(1),
            first_name: "Ann".into(),
            last_name: "Lee".into(),
            phone_number: "555-0100".into(),
            address_count: 0,
            cities: None,
            states: None,
            pin_codes: None,
        };

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["address_count"], 0);
        assert!(json["cities"].is_null());
    }
}
