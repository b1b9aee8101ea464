//! Guild ranking factory for creating test guild score rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating guild ranking rows for a siege.
pub struct GuildRankingFactory<'a> {
    db: &'a DatabaseConnection,
    siege_id: i32,
    guild_name: String,
    score: i32,
}

impl<'a> GuildRankingFactory<'a> {
    /// Creates a new GuildRankingFactory with default values.
    ///
    /// Defaults:
    /// - guild_name: `"Guild {id}"` where id is auto-incremented
    /// - score: `100`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `siege_id` - Siege the ranking belongs to
    pub fn new(db: &'a DatabaseConnection, siege_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            siege_id,
            guild_name: format!("Guild {}", id),
            score: 100,
        }
    }

    /// Sets the guild name.
    pub fn guild_name(mut self, guild_name: impl Into<String>) -> Self {
        self.guild_name = guild_name.into();
        self
    }

    /// Sets the guild score.
    pub fn score(mut self, score: i32) -> Self {
        self.score = score;
        self
    }

    /// Builds and inserts the guild ranking into the database.
    pub async fn build(self) -> Result<entity::siege_guild_ranking::Model, DbErr> {
        entity::siege_guild_ranking::ActiveModel {
            id: ActiveValue::NotSet,
            siege_id: ActiveValue::Set(self.siege_id),
            guild_name: ActiveValue::Set(self.guild_name),
            score: ActiveValue::Set(self.score),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guild ranking with the given score.
///
/// # Arguments
/// - `db` - Database connection
/// - `siege_id` - Siege the ranking belongs to
/// - `guild_name` - Guild name
/// - `score` - Guild score
pub async fn create_guild_ranking(
    db: &DatabaseConnection,
    siege_id: i32,
    guild_name: &str,
    score: i32,
) -> Result<entity::siege_guild_ranking::Model, DbErr> {
    GuildRankingFactory::new(db, siege_id)
        .guild_name(guild_name)
        .score(score)
        .build()
        .await
}
