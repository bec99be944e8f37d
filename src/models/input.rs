//! Validated input types for store commands.
//!
//! Validation happens here, at construction, rather than inside the store:
//! a [`NewEmployeeInput`] or [`EmployeeUpdateInput`] that exists has already
//! passed every field-level precondition. Failures come back as a
//! [`ValidationErrors`] map, never a panic or a fault.

use std::collections::BTreeMap;

use chrono::{Months, NaiveDate};
use serde::Serialize;

use crate::models::EmployeeCategory;

/// Minimum employee age in whole years.
pub const MINIMUM_AGE_YEARS: u32 = 18;

/// Maximum length of the full-name and tax-id fields.
const MAX_TEXT_LEN: usize = 100;

/// A structured field → message validation error map.
///
/// # Examples
///
/// ```
/// use payroll_api::models::ValidationErrors;
///
/// let mut errors = ValidationErrors::new();
/// assert!(errors.is_empty());
/// errors.add("fullName", "Employee name is required");
/// assert_eq!(errors.get("fullName"), Some("Employee name is required"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    fields: BTreeMap<String, String>,
}

impl ValidationErrors {
    /// Creates an empty error map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message against a field, keeping the first message if the
    /// field already failed an earlier check.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields.entry(field.into()).or_insert_with(|| message.into());
    }

    /// Returns true when no field has failed validation.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the number of failed fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns the message recorded for a field, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Consumes the map into its underlying field → message pairs.
    pub fn into_map(self) -> BTreeMap<String, String> {
        self.fields
    }
}

/// Returns true when `birthdate` reaches [`MINIMUM_AGE_YEARS`] on or before
/// `today`.
///
/// Calendar arithmetic, not day counting: adding 18 years to Feb 29 lands on
/// Feb 28 in a non-leap year, the same clamping the reference validation
/// applied. A birthdate so far out that the addition overflows never passes.
fn meets_minimum_age(birthdate: NaiveDate, today: NaiveDate) -> bool {
    birthdate
        .checked_add_months(Months::new(MINIMUM_AGE_YEARS * 12))
        .is_some_and(|eighteenth| eighteenth <= today)
}

/// Runs the shared field checks and resolves the category code.
fn validate_fields(
    full_name: &str,
    tin: &str,
    birthdate: NaiveDate,
    employee_type_id: i32,
    today: NaiveDate,
) -> (Option<EmployeeCategory>, ValidationErrors) {
    let mut errors = ValidationErrors::new();

    if full_name.trim().is_empty() {
        errors.add("fullName", "Employee name is required");
    } else if full_name.chars().count() > MAX_TEXT_LEN {
        errors.add(
            "fullName",
            format!("Employee name must be at most {MAX_TEXT_LEN} characters"),
        );
    }

    if tin.trim().is_empty() {
        errors.add("tin", "Employee TIN is required");
    } else if tin.chars().count() > MAX_TEXT_LEN {
        errors.add(
            "tin",
            format!("Employee TIN must be at most {MAX_TEXT_LEN} characters"),
        );
    }

    if !meets_minimum_age(birthdate, today) {
        errors.add(
            "birthdate",
            format!("Employee must be {MINIMUM_AGE_YEARS} years old or above."),
        );
    }

    let category = match EmployeeCategory::try_from(employee_type_id) {
        Ok(category) => Some(category),
        Err(_) => {
            errors.add(
                "employeeTypeId",
                format!("Unsupported employee type: {employee_type_id}"),
            );
            None
        }
    };

    (category, errors)
}

/// A validated request to create a new employee.
///
/// Construction enforces every precondition the store relies on: non-blank
/// name and TIN within length limits, a known category code, and the
/// minimum-age rule. `today` is explicit so the age boundary is
/// deterministic under test; handlers pass the current UTC date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployeeInput {
    /// The employee's full name, trimmed.
    pub full_name: String,
    /// Tax identification number, trimmed.
    pub tin: String,
    /// Date of birth.
    pub birthdate: NaiveDate,
    /// The resolved employee category.
    pub category: EmployeeCategory,
}

impl NewEmployeeInput {
    /// Validates the raw fields and constructs the input.
    ///
    /// # Errors
    ///
    /// Returns the full field → message map when any check fails; all fields
    /// are checked, not just the first failure.
    pub fn new(
        full_name: &str,
        tin: &str,
        birthdate: NaiveDate,
        employee_type_id: i32,
        today: NaiveDate,
    ) -> Result<Self, ValidationErrors> {
        let (category, errors) = validate_fields(full_name, tin, birthdate, employee_type_id, today);
        match (category, errors.is_empty()) {
            (Some(category), true) => Ok(Self {
                full_name: full_name.trim().to_string(),
                tin: tin.trim().to_string(),
                birthdate,
                category,
            }),
            _ => Err(errors),
        }
    }
}

/// A validated request to overwrite an existing employee's mutable fields.
///
/// Field rules are identical to [`NewEmployeeInput`]; the target `id` is
/// carried alongside. Whether the id resolves to a live row is the store's
/// concern, checked independently of field validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeUpdateInput {
    /// The id of the employee to update.
    pub id: i32,
    /// Replacement full name, trimmed.
    pub full_name: String,
    /// Replacement tax identification number, trimmed.
    pub tin: String,
    /// Replacement date of birth.
    pub birthdate: NaiveDate,
    /// Replacement employee category.
    pub category: EmployeeCategory,
}

impl EmployeeUpdateInput {
    /// Validates the raw fields and constructs the input.
    ///
    /// # Errors
    ///
    /// Returns the full field → message map when any check fails.
    pub fn new(
        id: i32,
        full_name: &str,
        tin: &str,
        birthdate: NaiveDate,
        employee_type_id: i32,
        today: NaiveDate,
    ) -> Result<Self, ValidationErrors> {
        let (category, errors) = validate_fields(full_name, tin, birthdate, employee_type_id, today);
        match (category, errors.is_empty()) {
            (Some(category), true) => Ok(Self {
                id,
                full_name: full_name.trim().to_string(),
                tin: tin.trim().to_string(),
                birthdate,
                category,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    const TODAY: (i32, u32, u32) = (2026, 8, 31);

    fn today() -> NaiveDate {
        date(TODAY.0, TODAY.1, TODAY.2)
    }

    #[test]
    fn test_valid_input_is_accepted() {
        let input =
            NewEmployeeInput::new("John Doe", "123123123", date(1995, 3, 5), 1, today()).unwrap();
        assert_eq!(input.full_name, "John Doe");
        assert_eq!(input.tin, "123123123");
        assert_eq!(input.category, EmployeeCategory::Regular);
    }

    #[test]
    fn test_exactly_eighteen_today_passes() {
        let birthdate = date(TODAY.0 - 18, TODAY.1, TODAY.2);
        assert!(NewEmployeeInput::new("Jane Doe", "456", birthdate, 2, today()).is_ok());
    }

    #[test]
    fn test_one_day_under_eighteen_fails() {
        let birthdate = date(TODAY.0 - 18, TODAY.1, TODAY.2) + chrono::Days::new(1);
        let errors =
            NewEmployeeInput::new("Jane Doe", "456", birthdate, 2, today()).unwrap_err();
        assert_eq!(
            errors.get("birthdate"),
            Some("Employee must be 18 years old or above.")
        );
    }

    #[test]
    fn test_leap_day_birthdate_clamps_like_add_years() {
        // Feb 29 2008 + 18 years clamps to Feb 28 2026, which is on or
        // before Aug 31 2026.
        assert!(meets_minimum_age(date(2008, 2, 29), today()));
        // Against Feb 27 2026 the clamped date is still in the future.
        assert!(!meets_minimum_age(date(2008, 2, 29), date(2026, 2, 27)));
        // And on the clamped day itself the employee counts as 18.
        assert!(meets_minimum_age(date(2008, 2, 29), date(2026, 2, 28)));
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let errors =
            NewEmployeeInput::new("   ", "123", date(1990, 1, 1), 1, today()).unwrap_err();
        assert_eq!(errors.get("fullName"), Some("Employee name is required"));
    }

    #[test]
    fn test_blank_tin_is_rejected() {
        let errors = NewEmployeeInput::new("John", "", date(1990, 1, 1), 1, today()).unwrap_err();
        assert_eq!(errors.get("tin"), Some("Employee TIN is required"));
    }

    #[test]
    fn test_overlong_name_is_rejected() {
        let name = "x".repeat(101);
        let errors =
            NewEmployeeInput::new(&name, "123", date(1990, 1, 1), 1, today()).unwrap_err();
        assert!(errors.get("fullName").unwrap().contains("100"));
    }

    #[test]
    fn test_name_of_exactly_100_chars_is_accepted() {
        let name = "x".repeat(100);
        assert!(NewEmployeeInput::new(&name, "123", date(1990, 1, 1), 1, today()).is_ok());
    }

    #[test]
    fn test_unknown_category_code_is_rejected() {
        let errors =
            NewEmployeeInput::new("John", "123", date(1990, 1, 1), 9, today()).unwrap_err();
        assert_eq!(
            errors.get("employeeTypeId"),
            Some("Unsupported employee type: 9")
        );
    }

    #[test]
    fn test_all_failures_are_reported_together() {
        let birthdate = today();
        let errors = NewEmployeeInput::new("", "", birthdate, 0, today()).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.get("fullName").is_some());
        assert!(errors.get("tin").is_some());
        assert!(errors.get("birthdate").is_some());
        assert!(errors.get("employeeTypeId").is_some());
    }

    #[test]
    fn test_name_and_tin_are_trimmed() {
        let input =
            NewEmployeeInput::new("  John Doe  ", " 123 ", date(1990, 1, 1), 1, today()).unwrap();
        assert_eq!(input.full_name, "John Doe");
        assert_eq!(input.tin, "123");
    }

    #[test]
    fn test_update_input_carries_id_and_same_rules() {
        let input =
            EmployeeUpdateInput::new(7, "Jane", "999", date(1980, 6, 15), 2, today()).unwrap();
        assert_eq!(input.id, 7);
        assert_eq!(input.category, EmployeeCategory::Contractual);

        let errors =
            EmployeeUpdateInput::new(7, "", "999", date(1980, 6, 15), 2, today()).unwrap_err();
        assert_eq!(errors.get("fullName"), Some("Employee name is required"));
    }

    #[test]
    fn test_validation_errors_serialize_as_plain_map() {
        let mut errors = ValidationErrors::new();
        errors.add("tin", "Employee TIN is required");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json, serde_json::json!({"tin": "Employee TIN is required"}));
    }
}
