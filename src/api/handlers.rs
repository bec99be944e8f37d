//! HTTP request handlers for the employee records API.
//!
//! This module contains the handler functions for all endpoints and the
//! router wiring them together.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::models::{EmployeeUpdateInput, NewEmployeeInput, ValidationErrors};

use super::request::{CalculateSalaryRequest, SaveEmployeeRequest};
use super::response::{ApiError, ApiErrorResponse, EmployeeIdResponse, SalaryResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/employees", get(list_employees).post(create_employee))
        .route(
            "/api/employees/:id",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
        .route("/api/employees/:id/calculate", post(calculate_salary))
        .with_state(state)
}

/// The validation date for age checks: today's UTC date.
fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Translates a body-extraction rejection into an error body.
///
/// A request with no body at all reads as an EOF syntax error and gets the
/// legacy "Employee data is null" message; everything else is reported as
/// malformed JSON or a field-level data error, the way serde describes it.
fn rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON syntax error"
            );
            if body_text.contains("EOF while parsing") {
                ApiError::missing_body()
            } else {
                ApiError::malformed_json(format!("Invalid JSON syntax: {}", body_text))
            }
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::missing_body(),
    }
}

/// Handler for GET /api/employees.
///
/// Returns every live employee; an empty list is a success response.
async fn list_employees(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();

    match state.store().get_all() {
        Ok(employees) => {
            info!(
                correlation_id = %correlation_id,
                count = employees.len(),
                "Retrieved employee list"
            );
            (StatusCode::OK, Json(employees)).into_response()
        }
        Err(err) => {
            error!(
                correlation_id = %correlation_id,
                error = %err,
                "Failed to retrieve employee list"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /api/employees/:id.
async fn get_employee(State(state): State<AppState>, Path(id): Path<i32>) -> Response {
    let correlation_id = Uuid::new_v4();

    match state.store().get_by_id(id) {
        Ok(Some(employee)) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = id,
                "Retrieved employee"
            );
            (StatusCode::OK, Json(employee)).into_response()
        }
        Ok(None) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = id,
                "Employee not found"
            );
            ApiErrorResponse::not_found(id).into_response()
        }
        Err(err) => {
            error!(
                correlation_id = %correlation_id,
                employee_id = id,
                error = %err,
                "Failed to retrieve employee"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /api/employees.
///
/// Validates the fields, persists the record, and returns the assigned id
/// with a Location header.
async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<SaveEmployeeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let error = rejection_error(correlation_id, rejection);
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    let input = match NewEmployeeInput::new(
        &request.full_name,
        &request.tin,
        request.birthdate,
        request.employee_type_id,
        today(),
    ) {
        Ok(input) => input,
        Err(errors) => {
            warn!(
                correlation_id = %correlation_id,
                failed_fields = errors.len(),
                "Employee creation failed validation"
            );
            return ApiErrorResponse::validation(errors).into_response();
        }
    };

    match state.store().add(input) {
        Ok(id) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = id,
                "New employee added"
            );
            (
                StatusCode::CREATED,
                [(header::LOCATION, format!("/api/employees/{}", id))],
                Json(EmployeeIdResponse { id }),
            )
                .into_response()
        }
        Err(err) => {
            error!(
                correlation_id = %correlation_id,
                error = %err,
                "Failed to add employee"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for PUT /api/employees/:id.
///
/// Field validation and the id lookup are independent checks: invalid
/// fields report a validation map, an unresolved id reports not-found.
async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<SaveEmployeeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let error = rejection_error(correlation_id, rejection);
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    let input = match EmployeeUpdateInput::new(
        id,
        &request.full_name,
        &request.tin,
        request.birthdate,
        request.employee_type_id,
        today(),
    ) {
        Ok(input) => input,
        Err(errors) => {
            warn!(
                correlation_id = %correlation_id,
                employee_id = id,
                failed_fields = errors.len(),
                "Employee update failed validation"
            );
            return ApiErrorResponse::validation(errors).into_response();
        }
    };

    match state.store().update(input) {
        Ok(0) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = id,
                "Employee to update not found"
            );
            ApiErrorResponse::not_found(id).into_response()
        }
        Ok(id) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = id,
                "Employee updated"
            );
            (StatusCode::OK, Json(EmployeeIdResponse { id })).into_response()
        }
        Err(err) => {
            error!(
                correlation_id = %correlation_id,
                employee_id = id,
                error = %err,
                "Failed to update employee"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for DELETE /api/employees/:id.
///
/// Soft-deletes the record; the row stays in storage but disappears from
/// every query. A second delete of the same id reports not-found.
async fn delete_employee(State(state): State<AppState>, Path(id): Path<i32>) -> Response {
    let correlation_id = Uuid::new_v4();

    match state.store().delete(id) {
        Ok(0) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = id,
                "Employee to delete not found"
            );
            ApiErrorResponse::not_found(id).into_response()
        }
        Ok(id) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = id,
                "Employee deleted"
            );
            (StatusCode::OK, Json(EmployeeIdResponse { id })).into_response()
        }
        Err(err) => {
            error!(
                correlation_id = %correlation_id,
                employee_id = id,
                error = %err,
                "Failed to delete employee"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /api/employees/:id/calculate.
///
/// Fetches the employee view, selects the salary strategy from the stored
/// category, and computes net pay from the attendance figures.
async fn calculate_salary(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<CalculateSalaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let error = rejection_error(correlation_id, rejection);
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    let mut errors = ValidationErrors::new();
    if request.absent_days < Decimal::ZERO {
        errors.add("absentDays", "Absent days must not be negative");
    }
    if request.worked_days < Decimal::ZERO {
        errors.add("workedDays", "Worked days must not be negative");
    }
    if !errors.is_empty() {
        warn!(
            correlation_id = %correlation_id,
            employee_id = id,
            "Salary calculation failed validation"
        );
        return ApiErrorResponse::validation(errors).into_response();
    }

    let employee = match state.store().get_by_id(id) {
        Ok(Some(employee)) => employee,
        Ok(None) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = id,
                "Employee for salary calculation not found"
            );
            return ApiErrorResponse::not_found(id).into_response();
        }
        Err(err) => {
            error!(
                correlation_id = %correlation_id,
                employee_id = id,
                error = %err,
                "Failed to fetch employee for salary calculation"
            );
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let result = state
        .selector()
        .select(employee.employee_type_id)
        .and_then(|strategy| strategy.compute(request.absent_days, request.worked_days));

    match result {
        Ok(salary) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = id,
                salary = %salary,
                "Calculated salary"
            );
            (StatusCode::OK, Json(SalaryResponse { salary })).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                employee_id = id,
                error = %err,
                "Salary calculation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn router() -> Router {
        create_router(AppState::in_memory())
    }

    async fn send(
        router: Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(value) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(value.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    fn valid_employee() -> Value {
        json!({
            "fullName": "John Doe",
            "tin": "123123123",
            "birthdate": "1995-03-05",
            "employeeTypeId": 1
        })
    }

    #[tokio::test]
    async fn test_create_returns_201_with_location() {
        let router = router();
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/employees")
                    .header("Content-Type", "application/json")
                    .body(Body::from(valid_employee().to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let location = response.headers().get(header::LOCATION).unwrap();
        assert_eq!(location, "/api/employees/1");

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["id"], 1);
    }

    #[tokio::test]
    async fn test_create_with_empty_body_reports_data_is_null() {
        let router = router();
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/employees")
                    .header("Content-Type", "application/json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], "MISSING_BODY");
        assert_eq!(body["message"], "Employee data is null");
    }

    #[tokio::test]
    async fn test_create_with_invalid_json_reports_malformed() {
        let router = router();
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/employees")
                    .header("Content-Type", "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_create_without_content_type_is_rejected() {
        let router = router();
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/employees")
                    .body(Body::from(valid_employee().to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], "MISSING_CONTENT_TYPE");
    }

    #[tokio::test]
    async fn test_get_unknown_employee_returns_404() {
        let (status, body) = send(router(), "GET", "/api/employees/42", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "EMPLOYEE_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_list_on_empty_store_returns_empty_array() {
        let (status, body) = send(router(), "GET", "/api/employees", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_calculate_rejects_negative_days() {
        let state = AppState::in_memory();
        let router = create_router(state);

        let (status, _) = send(
            router.clone(),
            "POST",
            "/api/employees",
            Some(valid_employee()),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = send(
            router,
            "POST",
            "/api/employees/1/calculate",
            Some(json!({"absentDays": -1, "workedDays": -2})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert_eq!(body["fields"]["absentDays"], "Absent days must not be negative");
        assert_eq!(body["fields"]["workedDays"], "Worked days must not be negative");
    }
}
