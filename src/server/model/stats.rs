//! Player statistics domain models.
//!
//! Raw rows (`PlayerStat`, `KillRecord`, `DeathRecord`) keep the nullable columns as
//! `Option`; `PlayerStatLine` is the aggregated, placeholder-resolved view returned by the
//! stats endpoint.

use std::str::FromStr;

use crate::model::stats::{LifeDeathDto, LifeKillDto, PlayerStatDto};

/// Guild name reported for players whose stat row has no guild.
pub const NO_GUILD: &str = "No Guild";

/// Per-player totals for one siege, as stored.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerStat {
    /// Join key for kill and death records.
    pub id: i32,
    pub player_name: String,
    pub guild_name: Option<String>,
    pub kills: Option<i32>,
    pub deaths: Option<i32>,
    pub points: Option<i32>,
}

impl PlayerStat {
    pub fn from_entity(entity: entity::siege_player_stat::Model) -> Self {
        Self {
            id: entity.id,
            player_name: entity.player_name,
            guild_name: entity.guild_name,
            kills: entity.kills,
            deaths: entity.deaths,
            points: entity.points,
        }
    }
}

/// A kill scored during one life of a player.
#[derive(Debug, Clone, PartialEq)]
pub struct KillRecord {
    pub siege_player_stat_id: i32,
    pub life_number: i32,
    pub victim_name: String,
    pub points_earned: Option<i32>,
}

impl KillRecord {
    pub fn from_entity(entity: entity::siege_player_kill::Model) -> Self {
        Self {
            siege_player_stat_id: entity.siege_player_stat_id,
            life_number: entity.life_number,
            victim_name: entity.victim_name,
            points_earned: entity.points_earned,
        }
    }
}

/// The death that ended one life of a player.
#[derive(Debug, Clone, PartialEq)]
pub struct DeathRecord {
    pub siege_player_stat_id: i32,
    pub life_number: i32,
    pub killer_name: String,
}

impl DeathRecord {
    pub fn from_entity(entity: entity::siege_player_death::Model) -> Self {
        Self {
            siege_player_stat_id: entity.siege_player_stat_id,
            life_number: entity.life_number,
            killer_name: entity.killer_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LifeKill {
    pub life_number: i32,
    pub victim_name: String,
    pub points_earned: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LifeDeath {
    pub life_number: i32,
    pub killer_name: String,
}

/// Aggregated statistics of one player, with per-life kills and deaths in fetch order.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerStatLine {
    pub player_name: String,
    pub guild_name: String,
    pub kills: i32,
    pub deaths: i32,
    pub points: i32,
    pub kills_by_life: Vec<LifeKill>,
    pub deaths_by_life: Vec<LifeDeath>,
}

impl PlayerStatLine {
    pub fn into_dto(self) -> PlayerStatDto {
        PlayerStatDto {
            player_name: self.player_name,
            guild_name: self.guild_name,
            kills: self.kills,
            deaths: self.deaths,
            points: self.points,
            kills_by_life: self
                .kills_by_life
                .into_iter()
                .map(|kill| LifeKillDto {
                    life_number: kill.life_number,
                    victim_name: kill.victim_name,
                    points_earned: kill.points_earned,
                })
                .collect(),
            deaths_by_life: self
                .deaths_by_life
                .into_iter()
                .map(|death| LifeDeathDto {
                    life_number: death.life_number,
                    killer_name: death.killer_name,
                })
                .collect(),
        }
    }
}

/// How kill and death records are located for a siege's players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChildLookupStrategy {
    /// Filter on membership in the fetched player stat ids.
    #[default]
    StatIds,
    /// Filter on the denormalized `siege_id` column of the record tables.
    SiegeId,
}

impl FromStr for ChildLookupStrategy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "stat_ids" => Ok(Self::StatIds),
            "siege_id" => Ok(Self::SiegeId),
            other => Err(format!("unknown child lookup strategy '{}'", other)),
        }
    }
}

/// A concrete kill/death query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChildLookup {
    ByStatIds(Vec<i32>),
    BySiegeId(i32),
}

impl ChildLookup {
    /// Builds the query for `strategy` from a siege and its already fetched stat rows.
    pub fn new(strategy: ChildLookupStrategy, siege_id: i32, stats: &[PlayerStat]) -> Self {
        match strategy {
            ChildLookupStrategy::StatIds => {
                Self::ByStatIds(stats.iter().map(|stat| stat.id).collect())
            }
            ChildLookupStrategy::SiegeId => Self::BySiegeId(siege_id),
        }
    }
}
