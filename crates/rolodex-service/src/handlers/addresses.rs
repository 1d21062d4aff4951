//! Address CRUD handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use rolodex_core::{Address, AddressId, AddressInput, AddressUpdate};

use crate::error::ApiError;
use crate::handlers::MessageResponse;
use crate::state::AppState;

/// Create a new address for an existing customer.
pub async fn create_address(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AddressInput>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let address = body.validate()?;
    let id = state.store.insert_address(&address).await?;

    tracing::info!(address_id = %id, customer_id = %address.customer_id, "Address created");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Address added successfully")),
    ))
}

/// Get an address by id.
pub async fn get_address(
    State(state): State<Arc<AppState>>,
    Path(id): Path<AddressId>,
) -> Result<Json<Address>, ApiError> {
    let address = state
        .store
        .get_address(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("address not found: {id}")))?;

    Ok(Json(address))
}

/// Replace an address's mutable fields wholesale. Not-found is detected by
/// the affected-row count after the write, never a pre-read.
pub async fn update_address(
    State(state): State<Arc<AppState>>,
    Path(id): Path<AddressId>,
    Json(body): Json<AddressUpdate>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.store.update_address(id, &body).await?;

    tracing::info!(address_id = %id, "Address updated");

    Ok(Json(MessageResponse::new("Address updated successfully")))
}

/// Delete an address.
pub async fn delete_address(
    State(state): State<Arc<AppState>>,
    Path(id): Path<AddressId>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.store.delete_address(id).await?;

    tracing::info!(address_id = %id, "Address deleted");

    Ok(Json(MessageResponse::new("Address deleted successfully")))
}
