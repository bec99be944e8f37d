//! Error types for the employee records service.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while serving requests.

use thiserror::Error;

use crate::models::EmployeeCategory;

/// The main error type for the employee records service.
///
/// Validation failures and "not found" lookups are not represented here:
/// validation returns a structured field map
/// ([`ValidationErrors`](crate::models::ValidationErrors)) and missing ids
/// are signalled with `Option`/`0` sentinels per the store contract. This
/// enum covers the conditions that are faults.
///
/// # Example
///
/// ```
/// use payroll_api::error::ServiceError;
///
/// let error = ServiceError::UnsupportedCategory { code: 9 };
/// assert_eq!(error.to_string(), "Unsupported employee category code: 9");
/// ```
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A category code outside the known enumeration was encountered.
    #[error("Unsupported employee category code: {code}")]
    UnsupportedCategory {
        /// The code that did not match any category.
        code: i32,
    },

    /// The category exists but has no salary formula defined.
    #[error("Salary calculation is not implemented for the {category} category")]
    SalaryNotImplemented {
        /// The category without a formula.
        category: EmployeeCategory,
    },

    /// A salary computation could not produce a result.
    #[error("Salary calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },

    /// The persistence backend failed while executing an operation.
    #[error("Storage failure during {operation}: {message}")]
    StorageFailure {
        /// The store operation that was executing.
        operation: &'static str,
        /// A description of the backend failure.
        message: String,
    },
}

/// A type alias for Results that return ServiceError.
pub type ServiceResult<T> = Result<T, ServiceError>;
