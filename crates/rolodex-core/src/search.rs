//! In-memory search over the aggregated customer view.
//!
//! The list endpoint materializes the full aggregation and then applies this
//! filter, rather than pushing a `LIKE` predicate into SQL. The match is a
//! case-insensitive substring test across the customer's base fields and the
//! concatenated address fields; concatenations that are `None` (customer has
//! no addresses) never match.

use crate::summary::CustomerSummary;

/// Filter the aggregated rows by `query`.
///
/// An empty query returns the rows unchanged.
#[must_use]
pub fn filter(rows: Vec<CustomerSummary>, query: &str) -> Vec<CustomerSummary> {
    if query.is_empty() {
        return rows;
    }

    let needle = query.to_lowercase();
    rows.into_iter()
        .filter(|row| matches_lowered(row, &needle))
        .collect()
}

/// Check whether a single row matches `query`, case-insensitively.
#[must_use]
pub fn matches(row: &CustomerSummary, query: &str) -> bool {
    matches_lowered(row, &query.to_lowercase())
}

fn matches_lowered(row: &CustomerSummary, needle: &str) -> bool {
    contains_ci(&row.first_name, needle)
        || contains_ci(&row.last_name, needle)
        || contains_ci(&row.phone_number, needle)
        || row.cities.as_deref().is_some_and(|v| contains_ci(v, needle))
        || row.states.as_deref().is_some_and(|v| contains_ci(v, needle))
        || row
            .pin_codes
            .as_deref()
            .is_some_and(|v| contains_ci(v, needle))
}

/// Substring test against an already-lowercased needle.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::CustomerId;

    fn summary(
        id: i64,
        first_name: &str,
        last_name: &str,
        phone_number: &str,
        cities: Option<&str>,
    ) -> CustomerSummary {
        CustomerSummary {
            customer_id: CustomerId::new(id),
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone_number: phone_number.into(),
            address_count: i64::from(cities.is_some()),
            cities: cities.map(Into::into),
            states: cities.map(|_| "Maharashtra".into()),
            pin_codes: cities.map(|_| "411001".into()),
        }
    }

    #[test]
    fn empty_query_returns_rows_unchanged() {
        let rows = vec![
            summary(1, "Ann", "Lee", "555-0100", None),
            summary(2, "Ravi", "Kumar", "555-0101", Some("Pune")),
        ];

        let filtered = filter(rows.clone(), "");
        assert_eq!(filtered, rows);
    }

    #[test]
    fn matches_names_case_insensitively() {
        let row = summary(1, "Ann", "Lee", "555-0100", None);
        assert!(matches(&row, "ann"));
        assert!(matches(&row, "LEE"));
        assert!(!matches(&row, "kumar"));
    }

    #[test]
    fn matches_phone_number_substring() {
        let row = summary(1, "Ann", "Lee", "555-0100", None);
        assert!(matches(&row, "0100"));
    }

    #[test]
    fn matches_concatenated_cities() {
        let row = summary(2, "Ravi", "Kumar", "555-0101", Some("Pune,Delhi"));
        assert!(matches(&row, "pune"));
        assert!(matches(&row, "delhi"));
    }

    #[test]
    fn absent_concatenations_never_match() {
        let row = summary(1, "Ann", "Lee", "555-0100", None);
        assert!(!matches(&row, "pune"));
    }

    #[test]
    fn filter_retains_only_matching_rows() {
        let rows = vec![
            summary(1, "Ann", "Lee", "555-0100", None),
            summary(2, "Ravi", "Kumar", "555-0101", Some("Pune")),
            summary(3, "Meera", "Shah", "555-0102", Some("Delhi")),
        ];

        let filtered = filter(rows, "PUNE");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].customer_id, CustomerId::new(2));
    }
}
