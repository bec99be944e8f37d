//! Core data models for the employee records service.
//!
//! This module contains the persisted employee record, its category
//! enumeration, the externally visible transfer shape, and the validated
//! input types built at the request boundary.

mod employee;
mod input;

pub use employee::{Employee, EmployeeCategory, EmployeeView};
pub use input::{EmployeeUpdateInput, NewEmployeeInput, ValidationErrors, MINIMUM_AGE_YEARS};
