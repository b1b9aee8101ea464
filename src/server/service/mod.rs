//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the data store. They work with domain models,
//! coordinate concurrent store calls, and apply the missing-data rules (placeholders,
//! zero defaults, not-found errors). Every service borrows a `&dyn SiegeStore` so it can be
//! driven by the SeaORM pool or by an in-memory fake.

pub mod ranking;
pub mod siege;
pub mod stats;
