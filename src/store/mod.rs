//! Persistence contract for employee records.
//!
//! The [`EmployeeStore`] trait is the seam between the HTTP surface and
//! whatever backs the records. Commands return the affected id, with `0` as
//! the "no such live row" sentinel; queries filter soft-deleted rows out.
//! Backend faults are real errors, never sentinels.

mod memory;

pub use memory::InMemoryEmployeeStore;

use crate::error::ServiceResult;
use crate::models::{EmployeeUpdateInput, EmployeeView, NewEmployeeInput};

/// Commands and queries over employee records.
///
/// Implementations are shared across request handlers, so the trait is
/// object-safe and bounds `Send + Sync`. Every operation runs to completion
/// within the call; there is no internal retrying or background work.
pub trait EmployeeStore: Send + Sync {
    /// Persists one new non-deleted record and returns its assigned id.
    ///
    /// The input has already passed field validation; the store only
    /// assigns the id and writes.
    fn add(&self, input: NewEmployeeInput) -> ServiceResult<i32>;

    /// Overwrites the mutable fields of an existing live record.
    ///
    /// Returns the id on success, or the `0` sentinel when the id does not
    /// resolve to a live row. Never creates a record; `id` and the
    /// soft-delete flag are untouched.
    fn update(&self, input: EmployeeUpdateInput) -> ServiceResult<i32>;

    /// Soft-deletes a live record.
    ///
    /// Returns the id on success, or `0` when the id is absent or the row
    /// is already soft-deleted, making repeated deletes harmless.
    fn delete(&self, id: i32) -> ServiceResult<i32>;

    /// Fetches the transfer shape of one live record.
    ///
    /// Returns `None` for nonexistent and soft-deleted ids alike.
    fn get_by_id(&self, id: i32) -> ServiceResult<Option<EmployeeView>>;

    /// Fetches the transfer shapes of all live records, in id order.
    ///
    /// An empty store yields an empty vec, never an error.
    fn get_all(&self) -> ServiceResult<Vec<EmployeeView>>;
}
