//! Player kill factory for creating per-life kill records.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating kill records attached to a player stat.
pub struct PlayerKillFactory<'a> {
    db: &'a DatabaseConnection,
    siege_player_stat_id: i32,
    siege_id: Option<i32>,
    life_number: i32,
    victim_name: String,
    points_earned: Option<i32>,
}

impl<'a> PlayerKillFactory<'a> {
    /// Creates a new PlayerKillFactory with default values.
    ///
    /// Defaults:
    /// - siege_id: `None` (denormalized column left empty)
    /// - victim_name: `"Victim {id}"` where id is auto-incremented
    /// - points_earned: `Some(1)`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `siege_player_stat_id` - Player stat the kill belongs to
    /// - `life_number` - Life during which the kill happened
    pub fn new(db: &'a DatabaseConnection, siege_player_stat_id: i32, life_number: i32) -> Self {
        let id = next_id();
        Self {
            db,
            siege_player_stat_id,
            siege_id: None,
            life_number,
            victim_name: format!("Victim {}", id),
            points_earned: Some(1),
        }
    }

    /// Sets the denormalized siege id.
    pub fn siege_id(mut self, siege_id: i32) -> Self {
        self.siege_id = Some(siege_id);
        self
    }

    /// Sets the victim name.
    pub fn victim_name(mut self, victim_name: impl Into<String>) -> Self {
        self.victim_name = victim_name.into();
        self
    }

    /// Sets the points earned for the kill.
    pub fn points_earned(mut self, points_earned: Option<i32>) -> Self {
        self.points_earned = points_earned;
        self
    }

    /// Builds and inserts the kill record into the database.
    pub async fn build(self) -> Result<entity::siege_player_kill::Model, DbErr> {
        entity::siege_player_kill::ActiveModel {
            id: ActiveValue::NotSet,
            siege_player_stat_id: ActiveValue::Set(self.siege_player_stat_id),
            siege_id: ActiveValue::Set(self.siege_id),
            life_number: ActiveValue::Set(self.life_number),
            victim_name: ActiveValue::Set(self.victim_name),
            points_earned: ActiveValue::Set(self.points_earned),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a kill record with default values.
pub async fn create_player_kill(
    db: &DatabaseConnection,
    siege_player_stat_id: i32,
    life_number: i32,
) -> Result<entity::siege_player_kill::Model, DbErr> {
    PlayerKillFactory::new(db, siege_player_stat_id, life_number)
        .build()
        .await
}
