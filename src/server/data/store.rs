//! Read access to the siege results database behind a trait.
//!
//! Services take a `&dyn SiegeStore` instead of a connection so the same code runs against
//! the SeaORM pool in production and against in-memory fakes in tests.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::{player_stat::PlayerStatRepository, ranking::RankingRepository, siege::SiegeRepository},
    model::{
        ranking::{GuildRanking, PlayerRanking},
        siege::Siege,
        stats::{ChildLookup, DeathRecord, KillRecord, PlayerStat},
    },
};

#[async_trait]
pub trait SiegeStore: Send + Sync {
    /// All sieges, most recent first.
    async fn list_sieges(&self) -> Result<Vec<Siege>, DbErr>;

    async fn siege_exists(&self, siege_id: i32) -> Result<bool, DbErr>;

    /// Guild rankings by score descending, ties by insertion order.
    async fn guild_rankings(
        &self,
        siege_id: i32,
        limit: Option<u64>,
    ) -> Result<Vec<GuildRanking>, DbErr>;

    /// Player rankings by score descending, ties by insertion order.
    async fn player_rankings(
        &self,
        siege_id: i32,
        limit: Option<u64>,
    ) -> Result<Vec<PlayerRanking>, DbErr>;

    async fn player_stats(&self, siege_id: i32) -> Result<Vec<PlayerStat>, DbErr>;

    async fn kill_records(&self, lookup: &ChildLookup) -> Result<Vec<KillRecord>, DbErr>;

    async fn death_records(&self, lookup: &ChildLookup) -> Result<Vec<DeathRecord>, DbErr>;
}

#[async_trait]
impl SiegeStore for DatabaseConnection {
    async fn list_sieges(&self) -> Result<Vec<Siege>, DbErr> {
        SiegeRepository::new(self).get_all().await
    }

    async fn siege_exists(&self, siege_id: i32) -> Result<bool, DbErr> {
        SiegeRepository::new(self).exists(siege_id).await
    }

    async fn guild_rankings(
        &self,
        siege_id: i32,
        limit: Option<u64>,
    ) -> Result<Vec<GuildRanking>, DbErr> {
        RankingRepository::new(self)
            .get_guild_rankings(siege_id, limit)
            .await
    }

    async fn player_rankings(
        &self,
        siege_id: i32,
        limit: Option<u64>,
    ) -> Result<Vec<PlayerRanking>, DbErr> {
        RankingRepository::new(self)
            .get_player_rankings(siege_id, limit)
            .await
    }

    async fn player_stats(&self, siege_id: i32) -> Result<Vec<PlayerStat>, DbErr> {
        PlayerStatRepository::new(self).get_by_siege_id(siege_id).await
    }

    async fn kill_records(&self, lookup: &ChildLookup) -> Result<Vec<KillRecord>, DbErr> {
        let repo = PlayerStatRepository::new(self);

        match lookup {
            ChildLookup::ByStatIds(ids) => repo.get_kills_by_stat_ids(ids).await,
            ChildLookup::BySiegeId(siege_id) => repo.get_kills_by_siege_id(*siege_id).await,
        }
    }

    async fn death_records(&self, lookup: &ChildLookup) -> Result<Vec<DeathRecord>, DbErr> {
        let repo = PlayerStatRepository::new(self);

        match lookup {
            ChildLookup::ByStatIds(ids) => repo.get_deaths_by_stat_ids(ids).await,
            ChildLookup::BySiegeId(siege_id) => repo.get_deaths_by_siege_id(*siege_id).await,
        }
    }
}
