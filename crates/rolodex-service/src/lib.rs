//! Rolodex HTTP API Service.
//!
//! This crate provides the HTTP API for the rolodex customer registry:
//!
//! - Customer CRUD, plus the aggregated, searchable customer list
//! - Address CRUD
//!
//! Handlers validate input before any store access, call the injected
//! [`rolodex_store::Store`], and shape JSON responses; CORS, tracing, and
//! request limits are middleware.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are noisy for Axum handler functions
#![allow(clippy::missing_errors_doc)] // Axum handlers all return Result
#![allow(clippy::unused_async)] // Handlers without awaits stay async for routing

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::ServiceConfig;
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
