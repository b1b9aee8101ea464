//! In-memory `SiegeStore` used by service and router tests.
//!
//! Mirrors the ordering guarantees of the SeaORM implementation (date descending, score
//! descending with insertion order on ties) and can inject latency and failures.

use std::{cmp::Reverse, collections::HashSet, time::Duration};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::server::{
    data::store::SiegeStore,
    model::{
        ranking::{GuildRanking, PlayerRanking},
        siege::Siege,
        stats::{ChildLookup, DeathRecord, KillRecord, PlayerStat},
    },
};

#[derive(Default)]
pub struct FakeStore {
    sieges: Vec<Siege>,
    guild_rankings: Vec<(i32, GuildRanking)>,
    player_rankings: Vec<(i32, PlayerRanking)>,
    stats: Vec<(i32, PlayerStat)>,
    kills: Vec<(i32, KillRecord)>,
    deaths: Vec<(i32, DeathRecord)>,
    latency: Option<Duration>,
    failing_sieges: HashSet<i32>,
    fail_all: bool,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_siege(mut self, id: i32, date: DateTime<Utc>) -> Self {
        self.sieges.push(Siege {
            id,
            date,
            name: Some(format!("Siege {}", id)),
            description: None,
        });
        self
    }

    pub fn with_guild_ranking(mut self, siege_id: i32, guild_name: &str, score: i32) -> Self {
        self.guild_rankings.push((
            siege_id,
            GuildRanking {
                guild_name: guild_name.to_string(),
                score,
            },
        ));
        self
    }

    pub fn with_player_ranking(mut self, siege_id: i32, player_name: &str, score: i32) -> Self {
        self.player_rankings.push((
            siege_id,
            PlayerRanking {
                player_name: player_name.to_string(),
                score,
            },
        ));
        self
    }

    pub fn with_stat(mut self, siege_id: i32, stat: PlayerStat) -> Self {
        self.stats.push((siege_id, stat));
        self
    }

    pub fn with_kill(mut self, siege_id: i32, kill: KillRecord) -> Self {
        self.kills.push((siege_id, kill));
        self
    }

    pub fn with_death(mut self, siege_id: i32, death: DeathRecord) -> Self {
        self.deaths.push((siege_id, death));
        self
    }

    /// Every query sleeps for `latency` before answering.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Queries scoped to `siege_id` fail.
    pub fn failing_for(mut self, siege_id: i32) -> Self {
        self.failing_sieges.insert(siege_id);
        self
    }

    /// Every query fails.
    pub fn failing(mut self) -> Self {
        self.fail_all = true;
        self
    }

    async fn respond(&self, siege_id: Option<i32>) -> Result<(), DbErr> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        let scoped_failure = siege_id.is_some_and(|id| self.failing_sieges.contains(&id));
        if self.fail_all || scoped_failure {
            return Err(DbErr::Custom("simulated query failure".to_string()));
        }

        Ok(())
    }

    fn ranked<T: Clone>(
        rows: &[(i32, T)],
        siege_id: i32,
        score: impl Fn(&T) -> i32,
        limit: Option<u64>,
    ) -> Vec<T> {
        let mut matching: Vec<T> = rows
            .iter()
            .filter(|(id, _)| *id == siege_id)
            .map(|(_, row)| row.clone())
            .collect();

        matching.sort_by_key(|row| Reverse(score(row)));

        if let Some(limit) = limit {
            matching.truncate(limit as usize);
        }

        matching
    }

    fn children<T: Clone>(
        rows: &[(i32, T)],
        lookup: &ChildLookup,
        stat_id: impl Fn(&T) -> i32,
    ) -> Vec<T> {
        rows.iter()
            .filter(|(siege_id, row)| match lookup {
                ChildLookup::ByStatIds(ids) => ids.contains(&stat_id(row)),
                ChildLookup::BySiegeId(id) => siege_id == id,
            })
            .map(|(_, row)| row.clone())
            .collect()
    }
}

#[async_trait]
impl SiegeStore for FakeStore {
    async fn list_sieges(&self) -> Result<Vec<Siege>, DbErr> {
        self.respond(None).await?;

        let mut sieges = self.sieges.clone();
        sieges.sort_by(|a, b| b.date.cmp(&a.date).then(a.id.cmp(&b.id)));

        Ok(sieges)
    }

    async fn siege_exists(&self, siege_id: i32) -> Result<bool, DbErr> {
        self.respond(Some(siege_id)).await?;

        Ok(self.sieges.iter().any(|siege| siege.id == siege_id))
    }

    async fn guild_rankings(
        &self,
        siege_id: i32,
        limit: Option<u64>,
    ) -> Result<Vec<GuildRanking>, DbErr> {
        self.respond(Some(siege_id)).await?;

        Ok(Self::ranked(
            &self.guild_rankings,
            siege_id,
            |ranking| ranking.score,
            limit,
        ))
    }

    async fn player_rankings(
        &self,
        siege_id: i32,
        limit: Option<u64>,
    ) -> Result<Vec<PlayerRanking>, DbErr> {
        self.respond(Some(siege_id)).await?;

        Ok(Self::ranked(
            &self.player_rankings,
            siege_id,
            |ranking| ranking.score,
            limit,
        ))
    }

    async fn player_stats(&self, siege_id: i32) -> Result<Vec<PlayerStat>, DbErr> {
        self.respond(Some(siege_id)).await?;

        Ok(self
            .stats
            .iter()
            .filter(|(id, _)| *id == siege_id)
            .map(|(_, stat)| stat.clone())
            .collect())
    }

    async fn kill_records(&self, lookup: &ChildLookup) -> Result<Vec<KillRecord>, DbErr> {
        self.respond(None).await?;

        Ok(Self::children(&self.kills, lookup, |kill| {
            kill.siege_player_stat_id
        }))
    }

    async fn death_records(&self, lookup: &ChildLookup) -> Result<Vec<DeathRecord>, DbErr> {
        self.respond(None).await?;

        Ok(Self::children(&self.deaths, lookup, |death| {
            death.siege_player_stat_id
        }))
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    /// Sieges sharing a date come back by ascending id whatever order they were added in.
    #[tokio::test]
    async fn lists_equal_dates_by_id() {
        let date = Utc.with_ymd_and_hms(2025, 5, 1, 20, 0, 0).unwrap();
        let store = FakeStore::new()
            .with_siege(3, date)
            .with_siege(9, Utc.with_ymd_and_hms(2025, 6, 1, 20, 0, 0).unwrap())
            .with_siege(1, date);

        let sieges = store.list_sieges().await.unwrap();

        assert_eq!(
            sieges.iter().map(|s| s.id).collect::<Vec<_>>(),
            vec![9, 1, 3]
        );
    }
}
