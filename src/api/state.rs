//! Application state for the employee records API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::salary::StrategySelector;
use crate::store::{EmployeeStore, InMemoryEmployeeStore};

/// Shared application state.
///
/// Contains the employee store and the strategy selector; both are explicit
/// collaborators so tests can substitute a store implementation.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn EmployeeStore>,
    selector: StrategySelector,
}

impl AppState {
    /// Creates application state over the given store.
    pub fn new(store: impl EmployeeStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
            selector: StrategySelector::new(),
        }
    }

    /// Creates application state backed by an empty in-memory store.
    pub fn in_memory() -> Self {
        Self::new(InMemoryEmployeeStore::new())
    }

    /// Returns the employee store.
    pub fn store(&self) -> &dyn EmployeeStore {
        self.store.as_ref()
    }

    /// Returns the strategy selector.
    pub fn selector(&self) -> &StrategySelector {
        &self.selector
    }
}
