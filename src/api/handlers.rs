//! HTTP request handlers for the income tax calculator API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Query, rejection::QueryRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use utoipa::OpenApi;
use uuid::Uuid;

use crate::calculation::calculate_payroll;
use crate::error::EngineError;

use super::docs::ApiDoc;
use super::request::CalculateTaxQuery;
use super::response::{ApiError, ApiErrorResponse, HealthResponse, TaxResponse};

/// Creates the API router with all endpoints.
///
/// Every route answers cross-origin requests from any origin.
pub fn create_router() -> Router {
    Router::new()
        .route("/calculateTax", get(calculate_tax_handler))
        .route("/health", get(health_handler))
        .route("/api", get(openapi_handler))
        .layer(CorsLayer::permissive())
}

/// Handler for GET /calculateTax endpoint.
///
/// Validates the query, runs the deduction calculator and returns the tax
/// payable and monthly in-hand salary.
#[utoipa::path(
    get,
    path = "/calculateTax",
    params(CalculateTaxQuery),
    responses(
        (status = 200, description = "The calculated tax payable and in-hand salary.", body = TaxResponse),
        (status = 400, description = "Invalid income amount or parameters.", body = ApiError)
    )
)]
pub(super) async fn calculate_tax_handler(
    query: Result<Query<CalculateTaxQuery>, QueryRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing tax calculation request");

    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Malformed query string"
            );
            return error_response(EngineError::InvalidIncome { raw: None });
        }
    };

    let validated = match query.validate() {
        Ok(validated) => validated,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                income = ?query.income,
                "Rejected invalid income"
            );
            return error_response(err);
        }
    };

    let start_time = Instant::now();
    let breakdown = calculate_payroll(&validated.input);
    let response = TaxResponse::new(validated.income, &breakdown);

    info!(
        correlation_id = %correlation_id,
        income = validated.income,
        tax_payable = %breakdown.tax_payable,
        inhand_salary = %breakdown.in_hand_monthly_salary,
        duration_us = start_time.elapsed().as_micros(),
        "Tax calculation completed successfully"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Handler for GET /health endpoint.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "The service is up.", body = HealthResponse)
    )
)]
pub(super) async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// Handler for GET /api endpoint, serving the OpenAPI document.
async fn openapi_handler() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

fn error_response(err: EngineError) -> axum::response::Response {
    let api_error: ApiErrorResponse = err.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = create_router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_valid_request_returns_200() {
        let response = create_router()
            .oneshot(
                Request::builder()
                    .uri("/calculateTax?income=1200000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");
    }

    #[tokio::test]
    async fn test_reference_income_figures() {
        let (status, body) = get_json("/calculateTax?income=1200000").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["income"].as_f64(), Some(1_200_000.0));
        assert_eq!(body["taxPayable"].as_i64(), Some(52_681));
        assert_eq!(body["inhandSalary"].as_i64(), Some(81_067));
    }

    #[tokio::test]
    async fn test_missing_income_returns_400() {
        let (status, body) = get_json("/calculateTax").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({ "error": "Invalid income amount" }));
    }

    #[tokio::test]
    async fn test_negative_income_returns_400() {
        let (status, body) = get_json("/calculateTax?income=-5").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid income amount");
    }

    #[tokio::test]
    async fn test_health_returns_ok() {
        let (status, body) = get_json("/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({ "health": "ok" }));
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let (status, body) = get_json("/api").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["info"]["title"], "Income Tax Calculator API");
        assert!(body["paths"]["/calculateTax"].is_object());
    }

    #[tokio::test]
    async fn test_cors_header_is_present() {
        let response = create_router()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header("Origin", "http://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "*"
        );
    }
}
