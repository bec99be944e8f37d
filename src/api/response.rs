//! Response types for the employee records API.
//!
//! This module defines the success envelopes, the error response structure,
//! and the mapping from [`ServiceError`] to HTTP status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ServiceError;
use crate::models::ValidationErrors;

/// Success body carrying an affected employee id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeIdResponse {
    /// The created, updated, or deleted employee's id.
    pub id: i32,
}

/// Success body for the salary calculation endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryResponse {
    /// Net salary, two fractional digits, serialized as a string.
    pub salary: Decimal,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Field-level validation messages, present only for validation errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<std::collections::BTreeMap<String, String>>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            fields: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
            fields: None,
        }
    }

    /// Creates a validation error carrying the field → message map.
    pub fn validation(errors: ValidationErrors) -> Self {
        Self {
            code: "VALIDATION_ERROR".to_string(),
            message: "One or more fields failed validation".to_string(),
            details: None,
            fields: Some(errors.into_map()),
        }
    }

    /// Creates the not-found error for an employee id.
    pub fn employee_not_found(id: i32) -> Self {
        Self::with_details(
            "EMPLOYEE_NOT_FOUND",
            "Employee not found",
            format!("No live employee record with id {}", id),
        )
    }

    /// Creates the error for a request with no usable body.
    pub fn missing_body() -> Self {
        Self::new("MISSING_BODY", "Employee data is null")
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Wraps an error body with a status code.
    pub fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }

    /// 404 response for a missing employee id.
    pub fn not_found(id: i32) -> Self {
        Self::new(StatusCode::NOT_FOUND, ApiError::employee_not_found(id))
    }

    /// 400 response carrying a validation field map.
    pub fn validation(errors: ValidationErrors) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ApiError::validation(errors))
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<ServiceError> for ApiErrorResponse {
    fn from(error: ServiceError) -> Self {
        match error {
            ServiceError::UnsupportedCategory { code } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "UNSUPPORTED_CATEGORY",
                    "Unsupported employee category",
                    format!("Stored category code {} has no salary rule", code),
                ),
            },
            ServiceError::SalaryNotImplemented { category } => ApiErrorResponse {
                status: StatusCode::NOT_IMPLEMENTED,
                error: ApiError::with_details(
                    "SALARY_NOT_IMPLEMENTED",
                    format!("Salary calculation is not implemented for the {} category", category),
                    "No pay formula is defined for this employee category",
                ),
            },
            ServiceError::CalculationError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CALCULATION_ERROR",
                    "Salary calculation failed",
                    message,
                ),
            },
            // Raw backend detail stays in the log, not on the wire.
            ServiceError::StorageFailure { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::new("STORAGE_ERROR", "An internal storage error occurred"),
            },
        }
    }
}
