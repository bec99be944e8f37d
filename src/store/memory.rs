//! In-memory [`EmployeeStore`] backend.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{ServiceError, ServiceResult};
use crate::models::{Employee, EmployeeUpdateInput, EmployeeView, NewEmployeeInput};
use crate::store::EmployeeStore;

#[derive(Debug, Default)]
struct Rows {
    next_id: i32,
    by_id: BTreeMap<i32, Employee>,
}

/// An [`EmployeeStore`] backed by a process-local map.
///
/// Ids are assigned sequentially starting at 1. Reads and writes go through
/// a single `RwLock`, so concurrent writers to the same id are
/// last-write-wins, matching the contract's concurrency model. A poisoned
/// lock surfaces as a storage fault carrying the operation name.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeStore {
    rows: RwLock<Rows>,
}

impl InMemoryEmployeeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self, operation: &'static str) -> ServiceResult<RwLockReadGuard<'_, Rows>> {
        self.rows.read().map_err(|e| ServiceError::StorageFailure {
            operation,
            message: e.to_string(),
        })
    }

    fn write(&self, operation: &'static str) -> ServiceResult<RwLockWriteGuard<'_, Rows>> {
        self.rows.write().map_err(|e| ServiceError::StorageFailure {
            operation,
            message: e.to_string(),
        })
    }
}

impl EmployeeStore for InMemoryEmployeeStore {
    fn add(&self, input: NewEmployeeInput) -> ServiceResult<i32> {
        let mut rows = self.write("add")?;
        rows.next_id += 1;
        let id = rows.next_id;
        rows.by_id.insert(
            id,
            Employee {
                id,
                full_name: input.full_name,
                tin: input.tin,
                birthdate: input.birthdate,
                category: input.category,
                is_deleted: false,
            },
        );
        Ok(id)
    }

    fn update(&self, input: EmployeeUpdateInput) -> ServiceResult<i32> {
        let mut rows = self.write("update")?;
        match rows.by_id.get_mut(&input.id).filter(|row| !row.is_deleted) {
            Some(row) => {
                row.full_name = input.full_name;
                row.tin = input.tin;
                row.birthdate = input.birthdate;
                row.category = input.category;
                Ok(row.id)
            }
            None => Ok(0),
        }
    }

    fn delete(&self, id: i32) -> ServiceResult<i32> {
        let mut rows = self.write("delete")?;
        match rows.by_id.get_mut(&id).filter(|row| !row.is_deleted) {
            Some(row) => {
                row.is_deleted = true;
                Ok(row.id)
            }
            None => Ok(0),
        }
    }

    fn get_by_id(&self, id: i32) -> ServiceResult<Option<EmployeeView>> {
        let rows = self.read("get_by_id")?;
        Ok(rows
            .by_id
            .get(&id)
            .filter(|row| !row.is_deleted)
            .map(EmployeeView::from_record))
    }

    fn get_all(&self) -> ServiceResult<Vec<EmployeeView>> {
        let rows = self.read("get_all")?;
        Ok(rows
            .by_id
            .values()
            .filter(|row| !row.is_deleted)
            .map(EmployeeView::from_record)
            .collect())
    }
}
