//! Player ranking factory for creating test player score rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating player ranking rows for a siege.
pub struct PlayerRankingFactory<'a> {
    db: &'a DatabaseConnection,
    siege_id: i32,
    player_name: String,
    score: i32,
}

impl<'a> PlayerRankingFactory<'a> {
    /// Creates a new PlayerRankingFactory with default values.
    ///
    /// Defaults:
    /// - player_name: `"Player {id}"` where id is auto-incremented
    /// - score: `10`
    pub fn new(db: &'a DatabaseConnection, siege_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            siege_id,
            player_name: format!("Player {}", id),
            score: 10,
        }
    }

    /// Sets the player name.
    pub fn player_name(mut self, player_name: impl Into<String>) -> Self {
        self.player_name = player_name.into();
        self
    }

    /// Sets the player score.
    pub fn score(mut self, score: i32) -> Self {
        self.score = score;
        self
    }

    /// Builds and inserts the player ranking into the database.
    pub async fn build(self) -> Result<entity::siege_player_ranking::Model, DbErr> {
        entity::siege_player_ranking::ActiveModel {
            id: ActiveValue::NotSet,
            siege_id: ActiveValue::Set(self.siege_id),
            player_name: ActiveValue::Set(self.player_name),
            score: ActiveValue::Set(self.score),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a player ranking with the given score.
pub async fn create_player_ranking(
    db: &DatabaseConnection,
    siege_id: i32,
    player_name: &str,
    score: i32,
) -> Result<entity::siege_player_ranking::Model, DbErr> {
    PlayerRankingFactory::new(db, siege_id)
        .player_name(player_name)
        .score(score)
        .build()
        .await
}
