//! HTTP API module for the employee records service.
//!
//! This module provides the REST endpoints for employee CRUD and salary
//! calculation.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculateSalaryRequest, SaveEmployeeRequest};
pub use response::{ApiError, EmployeeIdResponse, SalaryResponse};
pub use state::AppState;
