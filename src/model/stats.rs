use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LifeKillDto {
    pub life_number: i32,
    pub victim_name: String,
    pub points_earned: i32,
}

#[derive(Serialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LifeDeathDto {
    pub life_number: i32,
    pub killer_name: String,
}

/// Per-player statistics for a siege with the kills and deaths of every life.
#[derive(Serialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PlayerStatDto {
    pub player_name: String,
    pub guild_name: String,
    pub kills: i32,
    pub deaths: i32,
    pub points: i32,
    pub kills_by_life: Vec<LifeKillDto>,
    pub deaths_by_life: Vec<LifeDeathDto>,
}
