use std::collections::HashMap;

use crate::server::{
    data::store::SiegeStore,
    error::AppError,
    model::stats::{
        ChildLookup, ChildLookupStrategy, DeathRecord, KillRecord, LifeDeath, LifeKill,
        PlayerStat, PlayerStatLine, NO_GUILD,
    },
};

pub struct StatsService<'a> {
    store: &'a dyn SiegeStore,
    strategy: ChildLookupStrategy,
}

impl<'a> StatsService<'a> {
    pub fn new(store: &'a dyn SiegeStore, strategy: ChildLookupStrategy) -> Self {
        Self { store, strategy }
    }

    /// Gets aggregated per-player statistics of a siege.
    ///
    /// Siege existence and the stat rows are fetched concurrently; kill and death records
    /// are fetched concurrently once the stat ids are known.
    ///
    /// # Returns
    /// - `Ok(Vec<PlayerStatLine>)` - One line per stat row, in stored order
    /// - `Err(AppError::NotFound)` - Siege does not exist or has no statistics
    /// - `Err(AppError::DbErr)` - Any store query failed
    pub async fn get_player_stats(&self, siege_id: i32) -> Result<Vec<PlayerStatLine>, AppError> {
        let (exists, stats) = tokio::try_join!(
            self.store.siege_exists(siege_id),
            self.store.player_stats(siege_id),
        )?;

        if !exists {
            return Err(AppError::NotFound("Siege not found".to_string()));
        }
        if stats.is_empty() {
            return Err(AppError::NotFound(
                "No statistics found for this siege".to_string(),
            ));
        }

        let lookup = ChildLookup::new(self.strategy, siege_id, &stats);
        let (kills, deaths) = tokio::try_join!(
            self.store.kill_records(&lookup),
            self.store.death_records(&lookup),
        )?;

        Ok(aggregate_player_stats(stats, kills, deaths))
    }
}

/// Joins kill and death records onto their player stat rows.
///
/// Records are grouped by stat id in one pass, keeping fetch order within each group.
/// Records whose stat id matches no row are dropped.
pub fn aggregate_player_stats(
    stats: Vec<PlayerStat>,
    kills: Vec<KillRecord>,
    deaths: Vec<DeathRecord>,
) -> Vec<PlayerStatLine> {
    let mut kills_by_stat: HashMap<i32, Vec<LifeKill>> = HashMap::new();
    for kill in kills {
        kills_by_stat
            .entry(kill.siege_player_stat_id)
            .or_default()
            .push(LifeKill {
                life_number: kill.life_number,
                victim_name: kill.victim_name,
                points_earned: kill.points_earned.unwrap_or(0),
            });
    }

    let mut deaths_by_stat: HashMap<i32, Vec<LifeDeath>> = HashMap::new();
    for death in deaths {
        deaths_by_stat
            .entry(death.siege_player_stat_id)
            .or_default()
            .push(LifeDeath {
                life_number: death.life_number,
                killer_name: death.killer_name,
            });
    }

    stats
        .into_iter()
        .map(|stat| PlayerStatLine {
            kills_by_life: kills_by_stat.remove(&stat.id).unwrap_or_default(),
            deaths_by_life: deaths_by_stat.remove(&stat.id).unwrap_or_default(),
            player_name: stat.player_name,
            guild_name: stat.guild_name.unwrap_or_else(|| NO_GUILD.to_string()),
            kills: stat.kills.unwrap_or(0),
            deaths: stat.deaths.unwrap_or(0),
            points: stat.points.unwrap_or(0),
        })
        .collect()
}
