//! Response types for the income tax calculator API.
//!
//! This module defines the success and error bodies returned by the HTTP
//! API and the mapping from [`EngineError`] to HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

use crate::error::EngineError;
use crate::models::PayrollBreakdown;

/// Body returned by `/calculateTax`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaxResponse {
    /// The income exactly as supplied.
    pub income: f64,
    /// Tax payable for the year, including cess.
    #[serde(serialize_with = "serialize_whole")]
    #[schema(value_type = i64)]
    pub tax_payable: Decimal,
    /// Monthly in-hand salary.
    #[serde(serialize_with = "serialize_whole")]
    #[schema(value_type = i64)]
    pub inhand_salary: Decimal,
}

impl TaxResponse {
    /// Builds the response body from a calculation breakdown.
    pub fn new(income: f64, breakdown: &PayrollBreakdown) -> Self {
        Self {
            income,
            tax_payable: breakdown.tax_payable,
            inhand_salary: breakdown.in_hand_monthly_salary,
        }
    }
}

/// Writes a whole-valued decimal as a JSON integer, falling back to a float
/// for values outside the `i64` range.
fn serialize_whole<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value.to_i64() {
        Some(whole) => serializer.serialize_i64(whole),
        None => serializer.serialize_f64(value.to_f64().unwrap_or_default()),
    }
}

/// Body returned by `/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always `ok` while the service is up.
    pub health: String,
}

impl HealthResponse {
    /// The healthy response.
    pub fn ok() -> Self {
        Self {
            health: "ok".to_string(),
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ApiError {
    /// Human-readable error message.
    pub error: String,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let status = match error {
            EngineError::InvalidIncome { .. } => StatusCode::BAD_REQUEST,
            EngineError::InvalidConfigValue { .. }
            | EngineError::Bind { .. }
            | EngineError::Server { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        ApiErrorResponse {
            status,
            error: ApiError::new(error.to_string()),
        }
    }
}
