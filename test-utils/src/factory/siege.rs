//! Siege factory for creating test siege entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test sieges with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::siege::SiegeFactory;
///
/// let siege = SiegeFactory::new(&db)
///     .name("Castle Rock")
///     .date(Utc.with_ymd_and_hms(2025, 5, 1, 20, 0, 0).unwrap())
///     .build()
///     .await?;
/// ```
pub struct SiegeFactory<'a> {
    db: &'a DatabaseConnection,
    date: DateTime<Utc>,
    name: Option<String>,
    description: Option<String>,
}

impl<'a> SiegeFactory<'a> {
    /// Creates a new SiegeFactory with default values.
    ///
    /// Defaults:
    /// - date: now
    /// - name: `Some("Siege {id}")` where id is auto-incremented
    /// - description: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            date: Utc::now(),
            name: Some(format!("Siege {}", id)),
            description: None,
        }
    }

    /// Sets the date the siege took place.
    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    /// Sets the siege name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the siege description.
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Builds and inserts the siege entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::siege::Model)` - Created siege entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::siege::Model, DbErr> {
        entity::siege::ActiveModel {
            id: ActiveValue::NotSet,
            date: ActiveValue::Set(self.date),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a siege dated now with default values.
///
/// Shorthand for `SiegeFactory::new(db).build().await`.
pub async fn create_siege(db: &DatabaseConnection) -> Result<entity::siege::Model, DbErr> {
    SiegeFactory::new(db).build().await
}
