//! Player stat factory for creating per-player siege totals.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating player stat rows for a siege.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::player_stat::PlayerStatFactory;
///
/// let stat = PlayerStatFactory::new(&db, siege.id)
///     .player_name("Ragnar")
///     .guild_name(None)
///     .kills(None)
///     .build()
///     .await?;
/// ```
pub struct PlayerStatFactory<'a> {
    db: &'a DatabaseConnection,
    siege_id: i32,
    player_name: String,
    guild_name: Option<String>,
    kills: Option<i32>,
    deaths: Option<i32>,
    points: Option<i32>,
}

impl<'a> PlayerStatFactory<'a> {
    /// Creates a new PlayerStatFactory with default values.
    ///
    /// Defaults:
    /// - player_name: `"Player {id}"` where id is auto-incremented
    /// - guild_name: `Some("Guild {id}")`
    /// - kills: `Some(0)`, deaths: `Some(0)`, points: `Some(0)`
    pub fn new(db: &'a DatabaseConnection, siege_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            siege_id,
            player_name: format!("Player {}", id),
            guild_name: Some(format!("Guild {}", id)),
            kills: Some(0),
            deaths: Some(0),
            points: Some(0),
        }
    }

    /// Sets the player name.
    pub fn player_name(mut self, player_name: impl Into<String>) -> Self {
        self.player_name = player_name.into();
        self
    }

    /// Sets the guild name, `None` for a guildless player.
    pub fn guild_name(mut self, guild_name: Option<String>) -> Self {
        self.guild_name = guild_name;
        self
    }

    /// Sets the kill total.
    pub fn kills(mut self, kills: Option<i32>) -> Self {
        self.kills = kills;
        self
    }

    /// Sets the death total.
    pub fn deaths(mut self, deaths: Option<i32>) -> Self {
        self.deaths = deaths;
        self
    }

    /// Sets the points total.
    pub fn points(mut self, points: Option<i32>) -> Self {
        self.points = points;
        self
    }

    /// Builds and inserts the player stat into the database.
    pub async fn build(self) -> Result<entity::siege_player_stat::Model, DbErr> {
        entity::siege_player_stat::ActiveModel {
            id: ActiveValue::NotSet,
            siege_id: ActiveValue::Set(self.siege_id),
            player_name: ActiveValue::Set(self.player_name),
            guild_name: ActiveValue::Set(self.guild_name),
            kills: ActiveValue::Set(self.kills),
            deaths: ActiveValue::Set(self.deaths),
            points: ActiveValue::Set(self.points),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a player stat with default values for the siege.
pub async fn create_player_stat(
    db: &DatabaseConnection,
    siege_id: i32,
) -> Result<entity::siege_player_stat::Model, DbErr> {
    PlayerStatFactory::new(db, siege_id).build().await
}
