//! Client SDK tests against a mock server.

use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use rolodex_client::{ClientError, RolodexClient};
use rolodex_core::{CustomerId, CustomerInput, NewCustomer};

use serde_json::json;

#[tokio::test]
async fn list_customers_parses_aggregated_rows() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customers"))
        .and(query_param("search", "pune"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "customer_id": 1,
            "first_name": "Ann",
            "last_name": "Lee",
            "phone_number": "555-0100",
            "address_count": 2,
            "cities": "Pune,Delhi",
            "states": "Maharashtra,Delhi",
            "pin_codes": "411001,110001",
        }])))
        .mount(&server)
        .await;

    let client = RolodexClient::new(server.uri());
    let customers = client.list_customers(Some("pune")).await.unwrap();

    assert_eq!(customers.len(), 1);
    assert_eq!(customers[0].customer_id, CustomerId::new(1));
    assert_eq!(customers[0].address_count, 2);
    assert_eq!(customers[0].cities.as_deref(), Some("Pune,Delhi"));
}

#[tokio::test]
async fn create_customer_posts_payload() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/customers"))
        .and(body_json(json!({
            "first_name": "Ann",
            "last_name": "Lee",
            "phone_number": "555-0100",
        })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({ "message": "Customer created successfully" })),
        )
        .mount(&server)
        .await;

    let client = RolodexClient::new(server.uri());
    let ack = client
        .create_customer(CustomerInput {
            first_name: Some("Ann".into()),
            last_name: Some("Lee".into()),
            phone_number: Some("555-0100".into()),
        })
        .await
        .unwrap();

    assert_eq!(ack.message, "Customer created successfully");
}

#[tokio::test]
async fn validation_errors_are_typed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/customers"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "code": "validation_error",
                "message": "missing required fields: phone_number",
            }
        })))
        .mount(&server)
        .await;

    let client = RolodexClient::new(server.uri());
    let err = client
        .create_customer(CustomerInput::default())
        .await
        .unwrap_err();

    match err {
        ClientError::Validation { message } => assert!(message.contains("phone_number")),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn not_found_errors_are_typed() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/customers/999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {
                "code": "not_found",
                "message": "customer not found: 999",
            }
        })))
        .mount(&server)
        .await;

    let client = RolodexClient::new(server.uri());
    let err = client
        .update_customer(
            CustomerId::new(999),
            &NewCustomer {
                first_name: "Ann".into(),
                last_name: "Lee".into(),
                phone_number: "555-0100".into(),
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::NotFound { .. }));
}

#[tokio::test]
async fn unexpected_errors_carry_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customers"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": {
                "code": "internal_error",
                "message": "database error: connection refused",
            }
        })))
        .mount(&server)
        .await;

    let client = RolodexClient::new(server.uri());
    let err = client.list_customers(None).await.unwrap_err();

    match err {
        ClientError::Api {
            code,
            message,
            status,
        } => {
            assert_eq!(code, "internal_error");
            assert!(message.contains("connection refused"));
            assert_eq!(status, 500);
        }
        other => panic!("expected api error, got {other:?}"),
    }
}
