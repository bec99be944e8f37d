//! Per-category net-salary rules.
//!
//! Strategies are pure: attendance figures in, rounded decimal out. All
//! money math stays in [`Decimal`]; results carry exactly two fractional
//! digits, rounded to nearest-even at the midpoint (the rounding the
//! payroll system of record applies).

use rust_decimal::Decimal;

use crate::error::{ServiceError, ServiceResult};
use crate::models::EmployeeCategory;

/// Fixed monthly base salary for regular employees.
pub const REGULAR_MONTHLY_BASE: Decimal = Decimal::from_parts(20000, 0, 0, false, 0);

/// Tax deduction rate applied to the regular monthly base (12%).
pub const REGULAR_TAX_RATE: Decimal = Decimal::from_parts(12, 0, 0, false, 2);

/// Working days in a regular employee's month.
pub const REGULAR_WORKING_DAYS: Decimal = Decimal::from_parts(23, 0, 0, false, 0);

/// Fixed rate per day worked for contractual employees.
pub const CONTRACTUAL_DAY_RATE: Decimal = Decimal::from_parts(500, 0, 0, false, 0);

/// Rounds a money amount to exactly two fractional digits.
///
/// `round_dp` alone leaves coarser scales untouched (500 × 15.5 would keep
/// one digit), so the result is rescaled to always carry two.
fn round_money(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp(2);
    rounded.rescale(2);
    rounded
}

/// A net-salary rule for one employee category.
///
/// The enumeration is closed: adding a category means adding a variant here
/// and a selector arm, and the compiler flags every site that needs the new
/// rule. Categories whose formula is not yet defined are still dispatchable
/// and fail with an explicit not-implemented error instead of a guessed rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SalaryStrategy {
    /// Monthly base minus one daily rate per the absence divisor, minus tax.
    Regular,
    /// Day rate times days worked.
    Contractual,
    /// Formula undefined; computing is a fatal error.
    Probationary,
    /// Formula undefined; computing is a fatal error.
    PartTime,
}

impl SalaryStrategy {
    /// Returns the category this strategy pays.
    pub fn category(&self) -> EmployeeCategory {
        match self {
            SalaryStrategy::Regular => EmployeeCategory::Regular,
            SalaryStrategy::Contractual => EmployeeCategory::Contractual,
            SalaryStrategy::Probationary => EmployeeCategory::Probationary,
            SalaryStrategy::PartTime => EmployeeCategory::PartTime,
        }
    }

    /// Computes the net salary for the given attendance figures.
    ///
    /// - **Regular**: `round(20000 − 20000/(23 − absent_days) − 2400, 2)`;
    ///   `worked_days` is ignored.
    /// - **Contractual**: `round(500 × worked_days, 2)`; `absent_days` is
    ///   ignored.
    /// - **Probationary** / **PartTime**: always
    ///   [`ServiceError::SalaryNotImplemented`].
    ///
    /// # Errors
    ///
    /// For the regular rule, an `absent_days` of 23 or more leaves no
    /// working days to divide over and returns
    /// [`ServiceError::CalculationError`] rather than an infinity or a
    /// negative-divisor artifact.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_api::salary::SalaryStrategy;
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let net = SalaryStrategy::Contractual
    ///     .compute(Decimal::ZERO, Decimal::from_str("15.5").unwrap())
    ///     .unwrap();
    /// assert_eq!(net, Decimal::from_str("7750.00").unwrap());
    /// ```
    pub fn compute(&self, absent_days: Decimal, worked_days: Decimal) -> ServiceResult<Decimal> {
        match self {
            SalaryStrategy::Regular => {
                let tax_deduction = REGULAR_MONTHLY_BASE * REGULAR_TAX_RATE;
                let divisor = REGULAR_WORKING_DAYS - absent_days;
                if divisor <= Decimal::ZERO {
                    return Err(ServiceError::CalculationError {
                        message: format!(
                            "absent days ({}) leave no working days out of {}",
                            absent_days, REGULAR_WORKING_DAYS
                        ),
                    });
                }
                let daily_rate = REGULAR_MONTHLY_BASE / divisor;
                Ok(round_money(REGULAR_MONTHLY_BASE - daily_rate - tax_deduction))
            }
            SalaryStrategy::Contractual => Ok(round_money(CONTRACTUAL_DAY_RATE * worked_days)),
            SalaryStrategy::Probationary | SalaryStrategy::PartTime => {
                Err(ServiceError::SalaryNotImplemented {
                    category: self.category(),
                })
            }
        }
    }
}
