//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::{
    guild_ranking::GuildRankingFactory, player_ranking::PlayerRankingFactory,
    siege::SiegeFactory,
};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a siege with one guild ranking and one player ranking.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_name` - Name of the single ranked guild
/// - `player_name` - Name of the single ranked player
///
/// # Returns
/// - `Ok(entity::siege::Model)` - Created siege
/// - `Err(DbErr)` - Database error during insert
pub async fn create_siege_with_leaders(
    db: &DatabaseConnection,
    guild_name: &str,
    player_name: &str,
) -> Result<entity::siege::Model, DbErr> {
    let siege = SiegeFactory::new(db).build().await?;

    GuildRankingFactory::new(db, siege.id)
        .guild_name(guild_name)
        .build()
        .await?;
    PlayerRankingFactory::new(db, siege.id)
        .player_name(player_name)
        .build()
        .await?;

    Ok(siege)
}
