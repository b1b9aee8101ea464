//! Siegeboard Test Utils
//!
//! Shared testing utilities for the siegeboard server. Provides a builder for test contexts
//! backed by in-memory SQLite databases and factories for seeding siege result data.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders that insert sieges, rankings, stats and per-life records
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_sieges() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_siege_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let siege = factory::create_siege(db).await?;
//!     // Perform queries...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
