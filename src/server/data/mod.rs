//! Database repository layer for the siege results schema.
//!
//! One repository per record set, each a thin wrapper over a borrowed
//! `DatabaseConnection`. Repositories query SeaORM entities and return domain models, so
//! rows are decoded into typed records at this boundary. `store` bundles the repositories
//! behind the `SiegeStore` trait that the service layer depends on.

pub mod player_stat;
pub mod ranking;
pub mod siege;
pub mod store;

#[cfg(test)]
pub mod fake;
#[cfg(test)]
mod test;
