//! Application state shared across all request handlers.
//!
//! `AppState` is built once in `main` and cloned into each handler through Axum's state
//! extraction. It carries the data store behind the `SiegeStore` trait so handlers never
//! reach for a global client, and tests can hand in a fake.

use std::sync::Arc;

use crate::server::{data::store::SiegeStore, model::stats::ChildLookupStrategy};

/// Application state containing shared resources.
///
/// Cheap to clone: the store is reference-counted and the strategy is `Copy`.
#[derive(Clone)]
pub struct AppState {
    /// Read access to the siege results database.
    pub store: Arc<dyn SiegeStore>,

    /// How kill and death records are located for the stats endpoint.
    pub child_lookup: ChildLookupStrategy,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Arguments
    /// - `store` - Data store, usually the SeaORM connection pool
    /// - `child_lookup` - Kill/death lookup strategy from configuration
    pub fn new(store: Arc<dyn SiegeStore>, child_lookup: ChildLookupStrategy) -> Self {
        Self {
            store,
            child_lookup,
        }
    }
}
