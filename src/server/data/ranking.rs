use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::ranking::{GuildRanking, PlayerRanking};

pub struct RankingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RankingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets guild rankings for a siege ordered by score descending
    ///
    /// Equal scores are ordered by row id, so the first inserted guild ranks higher.
    ///
    /// # Arguments
    /// - `siege_id` - Siege to fetch rankings for
    /// - `limit` - Maximum number of rows, `None` for all
    pub async fn get_guild_rankings(
        &self,
        siege_id: i32,
        limit: Option<u64>,
    ) -> Result<Vec<GuildRanking>, DbErr> {
        let rankings = entity::prelude::SiegeGuildRanking::find()
            .filter(entity::siege_guild_ranking::Column::SiegeId.eq(siege_id))
            .order_by_desc(entity::siege_guild_ranking::Column::Score)
            .order_by_asc(entity::siege_guild_ranking::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(rankings.into_iter().map(GuildRanking::from_entity).collect())
    }

    /// Gets player rankings for a siege ordered by score descending
    ///
    /// Same ordering and limit semantics as `get_guild_rankings`.
    pub async fn get_player_rankings(
        &self,
        siege_id: i32,
        limit: Option<u64>,
    ) -> Result<Vec<PlayerRanking>, DbErr> {
        let rankings = entity::prelude::SiegePlayerRanking::find()
            .filter(entity::siege_player_ranking::Column::SiegeId.eq(siege_id))
            .order_by_desc(entity::siege_player_ranking::Column::Score)
            .order_by_asc(entity::siege_player_ranking::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(rankings
            .into_iter()
            .map(PlayerRanking::from_entity)
            .collect())
    }
}
