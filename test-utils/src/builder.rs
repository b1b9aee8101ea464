use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Siege, SiegeGuildRanking};
///
/// let test = TestBuilder::new()
///     .with_table(Siege)
///     .with_table(SiegeGuildRanking)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the entity using SQLite syntax. Tables with
    /// foreign keys should be added after the tables they reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create the table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the siege and ranking tables.
    ///
    /// Enough for listing sieges and resolving top guild / MVP lookups.
    pub fn with_ranking_tables(self) -> Self {
        self.with_table(Siege)
            .with_table(SiegeGuildRanking)
            .with_table(SiegePlayerRanking)
    }

    /// Adds every table of the siege results schema in dependency order:
    /// - Siege
    /// - SiegeGuildRanking
    /// - SiegePlayerRanking
    /// - SiegePlayerStat
    /// - SiegePlayerKill
    /// - SiegePlayerDeath
    pub fn with_siege_tables(self) -> Self {
        self.with_ranking_tables()
            .with_table(SiegePlayerStat)
            .with_table(SiegePlayerKill)
            .with_table(SiegePlayerDeath)
    }

    /// Builds the test context and creates all configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
