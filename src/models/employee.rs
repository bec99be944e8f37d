//! Employee record, category enumeration, and transfer shape.
//!
//! The persisted [`Employee`] carries a soft-delete flag; the
//! [`EmployeeView`] transfer shape is only ever produced from live rows.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ServiceError;

/// The fixed employee category enumeration.
///
/// The numeric codes are part of the wire contract and must match whatever
/// clients persist; they are stable across the category table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmployeeCategory {
    /// Salaried employee on a fixed monthly base.
    Regular,
    /// Contractor paid a fixed rate per day worked.
    Contractual,
    /// Probationary hire; pay rule not yet defined.
    Probationary,
    /// Part-time employee; pay rule not yet defined.
    PartTime,
}

impl EmployeeCategory {
    /// Returns the numeric wire code for this category.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_api::models::EmployeeCategory;
    ///
    /// assert_eq!(EmployeeCategory::Regular.code(), 1);
    /// assert_eq!(EmployeeCategory::PartTime.code(), 4);
    /// ```
    pub fn code(&self) -> i32 {
        match self {
            EmployeeCategory::Regular => 1,
            EmployeeCategory::Contractual => 2,
            EmployeeCategory::Probationary => 3,
            EmployeeCategory::PartTime => 4,
        }
    }

    /// Returns the display name of this category.
    pub fn name(&self) -> &'static str {
        match self {
            EmployeeCategory::Regular => "Regular",
            EmployeeCategory::Contractual => "Contractual",
            EmployeeCategory::Probationary => "Probationary",
            EmployeeCategory::PartTime => "PartTime",
        }
    }
}

impl fmt::Display for EmployeeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<i32> for EmployeeCategory {
    type Error = ServiceError;

    /// Converts a wire code into a category, refusing anything outside the
    /// known enumeration.
    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(EmployeeCategory::Regular),
            2 => Ok(EmployeeCategory::Contractual),
            3 => Ok(EmployeeCategory::Probationary),
            4 => Ok(EmployeeCategory::PartTime),
            other => Err(ServiceError::UnsupportedCategory { code: other }),
        }
    }
}

/// A persisted employee record.
///
/// `birthdate` is a [`NaiveDate`], so the "date-only on write" invariant
/// holds by construction; there is no time component to truncate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    /// Unique identifier, assigned by the store on creation.
    pub id: i32,
    /// The employee's full name (at most 100 characters).
    pub full_name: String,
    /// Tax identification number (at most 100 characters).
    pub tin: String,
    /// Date of birth, date-only.
    pub birthdate: NaiveDate,
    /// The employee's category.
    pub category: EmployeeCategory,
    /// Soft-delete flag; deleted rows stay in storage but are invisible to
    /// every query.
    pub is_deleted: bool,
}

/// The externally visible representation of an employee.
///
/// Produced only from non-deleted rows, with the birthdate pre-formatted as
/// a `YYYY-MM-DD` string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeView {
    /// The employee's id.
    pub id: i32,
    /// The employee's full name.
    pub full_name: String,
    /// Tax identification number.
    pub tin: String,
    /// Date of birth formatted as `YYYY-MM-DD`.
    pub birthdate: String,
    /// The numeric category code.
    pub employee_type_id: i32,
}

impl EmployeeView {
    /// Projects a live employee record into its transfer shape.
    ///
    /// Callers are responsible for only passing non-deleted rows; the store
    /// filters on `is_deleted` before projecting.
    pub fn from_record(record: &Employee) -> Self {
        Self {
            id: record.id,
            full_name: record.full_name.clone(),
            tin: record.tin.clone(),
            birthdate: record.birthdate.format("%Y-%m-%d").to_string(),
            employee_type_id: record.category.code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_record() -> Employee {
        Employee {
            id: 1,
            full_name: "John Doe".to_string(),
            tin: "123123123".to_string(),
            birthdate: NaiveDate::from_ymd_opt(1995, 3, 5).unwrap(),
            category: EmployeeCategory::Regular,
            is_deleted: false,
        }
    }

    #[test]
    fn test_category_codes_match_wire_contract() {
        assert_eq!(EmployeeCategory::Regular.code(), 1);
        assert_eq!(EmployeeCategory::Contractual.code(), 2);
        assert_eq!(EmployeeCategory::Probationary.code(), 3);
        assert_eq!(EmployeeCategory::PartTime.code(), 4);
    }

    #[test]
    fn test_category_try_from_known_codes() {
        assert_eq!(
            EmployeeCategory::try_from(1).unwrap(),
            EmployeeCategory::Regular
        );
        assert_eq!(
            EmployeeCategory::try_from(2).unwrap(),
            EmployeeCategory::Contractual
        );
        assert_eq!(
            EmployeeCategory::try_from(3).unwrap(),
            EmployeeCategory::Probationary
        );
        assert_eq!(
            EmployeeCategory::try_from(4).unwrap(),
            EmployeeCategory::PartTime
        );
    }

    #[test]
    fn test_category_try_from_unknown_code_fails() {
        for code in [0, 5, -1, 100] {
            let err = EmployeeCategory::try_from(code).unwrap_err();
            assert!(
                err.to_string().contains(&code.to_string()),
                "error should name the offending code, got: {}",
                err
            );
        }
    }

    #[test]
    fn test_category_round_trips_through_code() {
        for category in [
            EmployeeCategory::Regular,
            EmployeeCategory::Contractual,
            EmployeeCategory::Probationary,
            EmployeeCategory::PartTime,
        ] {
            assert_eq!(EmployeeCategory::try_from(category.code()).unwrap(), category);
        }
    }

    #[test]
    fn test_category_display() {
        assert_eq!(EmployeeCategory::Regular.to_string(), "Regular");
        assert_eq!(EmployeeCategory::PartTime.to_string(), "PartTime");
    }

    #[test]
    fn test_view_formats_birthdate_as_iso_date() {
        let view = EmployeeView::from_record(&create_test_record());
        assert_eq!(view.birthdate, "1995-03-05");
    }

    #[test]
    fn test_view_carries_category_code() {
        let mut record = create_test_record();
        record.category = EmployeeCategory::Contractual;
        let view = EmployeeView::from_record(&record);
        assert_eq!(view.employee_type_id, 2);
    }

    #[test]
    fn test_view_serializes_camel_case() {
        let view = EmployeeView::from_record(&create_test_record());
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["fullName"], "John Doe");
        assert_eq!(json["tin"], "123123123");
        assert_eq!(json["birthdate"], "1995-03-05");
        assert_eq!(json["employeeTypeId"], 1);
    }

    #[test]
    fn test_view_round_trips_through_serde() {
        let view = EmployeeView::from_record(&create_test_record());
        let json = serde_json::to_string(&view).unwrap();
        let back: EmployeeView = serde_json::from_str(&json).unwrap();
        assert_eq!(view, back);
    }
}
