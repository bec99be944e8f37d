//! Salary calculation rules and category dispatch.
//!
//! Each employee category maps to one [`SalaryStrategy`], a pure net-salary
//! rule over attendance figures. The [`StrategySelector`] performs that
//! mapping and refuses codes outside the known enumeration.

mod selector;
mod strategy;

pub use selector::StrategySelector;
pub use strategy::{
    SalaryStrategy, CONTRACTUAL_DAY_RATE, REGULAR_MONTHLY_BASE, REGULAR_TAX_RATE,
    REGULAR_WORKING_DAYS,
};
