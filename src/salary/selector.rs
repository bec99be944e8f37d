//! Category-code to strategy dispatch.

use crate::error::ServiceResult;
use crate::models::EmployeeCategory;
use crate::salary::SalaryStrategy;

/// Maps a stored category code to its [`SalaryStrategy`].
///
/// A stateless, explicitly constructed value rather than a static factory:
/// it lives in the application state and handlers receive it as a
/// collaborator, so tests can substitute it like any other dependency.
/// `select` is deterministic and has no side effects.
///
/// # Examples
///
/// ```
/// use payroll_api::salary::{SalaryStrategy, StrategySelector};
///
/// let selector = StrategySelector::new();
/// assert_eq!(selector.select(2).unwrap(), SalaryStrategy::Contractual);
/// assert!(selector.select(9).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StrategySelector;

impl StrategySelector {
    /// Creates a selector.
    pub fn new() -> Self {
        Self
    }

    /// Resolves a category code to its salary strategy.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::UnsupportedCategory`] for any code outside
    /// the known enumeration; the selector never guesses a default rule.
    ///
    /// [`ServiceError::UnsupportedCategory`]: crate::error::ServiceError::UnsupportedCategory
    pub fn select(&self, category_code: i32) -> ServiceResult<SalaryStrategy> {
        let strategy = match EmployeeCategory::try_from(category_code)? {
            EmployeeCategory::Regular => SalaryStrategy::Regular,
            EmployeeCategory::Contractual => SalaryStrategy::Contractual,
            EmployeeCategory::Probationary => SalaryStrategy::Probationary,
            EmployeeCategory::PartTime => SalaryStrategy::PartTime,
        };
        Ok(strategy)
    }
}
