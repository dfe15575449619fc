//! OpenAPI description of the income tax calculator API.
//!
//! The document is generated from the handler declarations and served at
//! `/api`.

use utoipa::OpenApi;

use super::response::{ApiError, HealthResponse, TaxResponse};

/// The OpenAPI document for the service.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Income Tax Calculator API",
        version = "1.0.0",
        description = "This API calculates the tax payable based on the income."
    ),
    servers((url = "http://localhost:5005")),
    paths(
        super::handlers::calculate_tax_handler,
        super::handlers::health_handler
    ),
    components(schemas(TaxResponse, HealthResponse, ApiError))
)]
pub struct ApiDoc;
