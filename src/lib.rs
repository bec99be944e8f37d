//! Employee records service with per-category salary calculation.
//!
//! This crate provides a CRUD API for employee records with soft-delete
//! semantics, plus a salary endpoint that computes net pay from attendance
//! figures using the rule attached to the employee's category.

#![warn(missing_docs)]

pub mod api;
pub mod error;
pub mod models;
pub mod salary;
pub mod store;
