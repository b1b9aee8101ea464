//! Player death factory for creating per-life death records.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating death records attached to a player stat.
pub struct PlayerDeathFactory<'a> {
    db: &'a DatabaseConnection,
    siege_player_stat_id: i32,
    siege_id: Option<i32>,
    life_number: i32,
    killer_name: String,
}

impl<'a> PlayerDeathFactory<'a> {
    /// Creates a new PlayerDeathFactory with default values.
    ///
    /// Defaults:
    /// - siege_id: `None` (denormalized column left empty)
    /// - killer_name: `"Killer {id}"` where id is auto-incremented
    pub fn new(db: &'a DatabaseConnection, siege_player_stat_id: i32, life_number: i32) -> Self {
        let id = next_id();
        Self {
            db,
            siege_player_stat_id,
            siege_id: None,
            life_number,
            killer_name: format!("Killer {}", id),
        }
    }

    /// Sets the denormalized siege id.
    pub fn siege_id(mut self, siege_id: i32) -> Self {
        self.siege_id = Some(siege_id);
        self
    }

    /// Sets the killer name.
    pub fn killer_name(mut self, killer_name: impl Into<String>) -> Self {
        self.killer_name = killer_name.into();
        self
    }

    /// Builds and inserts the death record into the database.
    pub async fn build(self) -> Result<entity::siege_player_death::Model, DbErr> {
        entity::siege_player_death::ActiveModel {
            id: ActiveValue::NotSet,
            siege_player_stat_id: ActiveValue::Set(self.siege_player_stat_id),
            siege_id: ActiveValue::Set(self.siege_id),
            life_number: ActiveValue::Set(self.life_number),
            killer_name: ActiveValue::Set(self.killer_name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a death record with default values.
pub async fn create_player_death(
    db: &DatabaseConnection,
    siege_player_stat_id: i32,
    life_number: i32,
) -> Result<entity::siege_player_death::Model, DbErr> {
    PlayerDeathFactory::new(db, siege_player_stat_id, life_number)
        .build()
        .await
}
