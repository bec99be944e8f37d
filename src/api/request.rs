//! Request types for the employee records API.
//!
//! Field names follow the wire contract the existing clients speak
//! (`fullName`, `tin`, `birthdate`, `employeeTypeId`, `absentDays`,
//! `workedDays`). These are raw shapes; validation happens when handlers
//! build the store inputs from them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Request body for creating or updating an employee.
///
/// The same shape serves `POST /api/employees` and
/// `PUT /api/employees/:id`; the update target id comes from the path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveEmployeeRequest {
    /// The employee's full name.
    pub full_name: String,
    /// Tax identification number.
    pub tin: String,
    /// Date of birth (`YYYY-MM-DD`).
    pub birthdate: NaiveDate,
    /// Numeric employee category code.
    pub employee_type_id: i32,
}

/// Request body for `POST /api/employees/:id/calculate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateSalaryRequest {
    /// Days absent in the pay month; non-negative, may be fractional.
    pub absent_days: Decimal,
    /// Days worked in the pay month; non-negative, may be fractional.
    pub worked_days: Decimal,
}
