use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, PartialEq, Clone, Debug, ToSchema)]
pub struct GuildRankingDto {
    pub guild_name: String,
    pub score: i32,
}

#[derive(Serialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PlayerRankingDto {
    pub player_name: String,
    pub score: i32,
}

#[derive(Serialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RankingsDto {
    pub guilds: Vec<GuildRankingDto>,
    pub players: Vec<PlayerRankingDto>,
}

/// Top guild of a siege. `score` is omitted for the `"—"` placeholder.
#[derive(Serialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TopGuildDto {
    pub guild_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<i32>,
}

/// MVP of a siege. `score` is omitted for the `"—"` placeholder.
#[derive(Serialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MvpDto {
    pub player_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<i32>,
}
