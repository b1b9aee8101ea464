use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::stats::{DeathRecord, KillRecord, PlayerStat};

pub struct PlayerStatRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerStatRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the per-player stat rows of a siege in insertion order
    pub async fn get_by_siege_id(&self, siege_id: i32) -> Result<Vec<PlayerStat>, DbErr> {
        let stats = entity::prelude::SiegePlayerStat::find()
            .filter(entity::siege_player_stat::Column::SiegeId.eq(siege_id))
            .order_by_asc(entity::siege_player_stat::Column::Id)
            .all(self.db)
            .await?;

        Ok(stats.into_iter().map(PlayerStat::from_entity).collect())
    }

    /// Gets kill records belonging to any of the given player stats
    ///
    /// Returns an empty list without querying when `stat_ids` is empty.
    pub async fn get_kills_by_stat_ids(&self, stat_ids: &[i32]) -> Result<Vec<KillRecord>, DbErr> {
        if stat_ids.is_empty() {
            return Ok(Vec::new());
        }

        let kills = entity::prelude::SiegePlayerKill::find()
            .filter(
                entity::siege_player_kill::Column::SiegePlayerStatId.is_in(stat_ids.to_vec()),
            )
            .order_by_asc(entity::siege_player_kill::Column::Id)
            .all(self.db)
            .await?;

        Ok(kills.into_iter().map(KillRecord::from_entity).collect())
    }

    /// Gets death records belonging to any of the given player stats
    ///
    /// Returns an empty list without querying when `stat_ids` is empty.
    pub async fn get_deaths_by_stat_ids(
        &self,
        stat_ids: &[i32],
    ) -> Result<Vec<DeathRecord>, DbErr> {
        if stat_ids.is_empty() {
            return Ok(Vec::new());
        }

        let deaths = entity::prelude::SiegePlayerDeath::find()
            .filter(
                entity::siege_player_death::Column::SiegePlayerStatId.is_in(stat_ids.to_vec()),
            )
            .order_by_asc(entity::siege_player_death::Column::Id)
            .all(self.db)
            .await?;

        Ok(deaths.into_iter().map(DeathRecord::from_entity).collect())
    }

    /// Gets kill records by their denormalized siege id
    ///
    /// Rows that never had `siege_id` filled in are not returned.
    pub async fn get_kills_by_siege_id(&self, siege_id: i32) -> Result<Vec<KillRecord>, DbErr> {
        let kills = entity::prelude::SiegePlayerKill::find()
            .filter(entity::siege_player_kill::Column::SiegeId.eq(siege_id))
            .order_by_asc(entity::siege_player_kill::Column::Id)
            .all(self.db)
            .await?;

        Ok(kills.into_iter().map(KillRecord::from_entity).collect())
    }

    /// Gets death records by their denormalized siege id
    pub async fn get_deaths_by_siege_id(&self, siege_id: i32) -> Result<Vec<DeathRecord>, DbErr> {
        let deaths = entity::prelude::SiegePlayerDeath::find()
            .filter(entity::siege_player_death::Column::SiegeId.eq(siege_id))
            .order_by_asc(entity::siege_player_death::Column::Id)
            .all(self.db)
            .await?;

        Ok(deaths.into_iter().map(DeathRecord::from_entity).collect())
    }
}
