use crate::server::{
    data::store::SiegeStore,
    error::AppError,
    model::ranking::{GuildRanking, PlayerRanking, Rankings},
};

pub struct RankingService<'a> {
    store: &'a dyn SiegeStore,
}

impl<'a> RankingService<'a> {
    pub fn new(store: &'a dyn SiegeStore) -> Self {
        Self { store }
    }

    /// Gets the full guild and player rankings of a siege, fetched concurrently
    pub async fn get_rankings(&self, siege_id: i32) -> Result<Rankings, AppError> {
        let (guilds, players) = tokio::try_join!(
            self.store.guild_rankings(siege_id, None),
            self.store.player_rankings(siege_id, None),
        )?;

        Ok(Rankings { guilds, players })
    }

    /// Gets the highest scoring guild, or None when the siege has no guild rankings
    pub async fn get_top_guild(&self, siege_id: i32) -> Result<Option<GuildRanking>, AppError> {
        let rows = self.store.guild_rankings(siege_id, Some(1)).await?;

        Ok(rows.into_iter().next())
    }

    /// Gets the highest scoring player, or None when the siege has no player rankings
    pub async fn get_mvp(&self, siege_id: i32) -> Result<Option<PlayerRanking>, AppError> {
        let rows = self.store.player_rankings(siege_id, Some(1)).await?;

        Ok(rows.into_iter().next())
    }
}
