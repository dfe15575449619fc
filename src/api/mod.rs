//! HTTP API module for the income tax calculator.
//!
//! This module provides the REST endpoints: `/calculateTax`, `/health` and
//! the OpenAPI document at `/api`.

mod docs;
mod handlers;
mod request;
mod response;

pub use docs::ApiDoc;
pub use handlers::create_router;
pub use request::{CalculateTaxQuery, ValidatedQuery};
pub use response::{ApiError, ApiErrorResponse, HealthResponse, TaxResponse};
