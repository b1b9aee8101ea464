//! Guild and player ranking domain models.

use crate::{
    model::ranking::{GuildRankingDto, MvpDto, PlayerRankingDto, RankingsDto, TopGuildDto},
    server::model::NO_RESULT,
};

/// A guild's score in one siege.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildRanking {
    pub guild_name: String,
    pub score: i32,
}

impl GuildRanking {
    pub fn from_entity(entity: entity::siege_guild_ranking::Model) -> Self {
        Self {
            guild_name: entity.guild_name,
            score: entity.score,
        }
    }

    pub fn into_dto(self) -> GuildRankingDto {
        GuildRankingDto {
            guild_name: self.guild_name,
            score: self.score,
        }
    }
}

/// A player's score in one siege.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRanking {
    pub player_name: String,
    pub score: i32,
}

impl PlayerRanking {
    pub fn from_entity(entity: entity::siege_player_ranking::Model) -> Self {
        Self {
            player_name: entity.player_name,
            score: entity.score,
        }
    }

    pub fn into_dto(self) -> PlayerRankingDto {
        PlayerRankingDto {
            player_name: self.player_name,
            score: self.score,
        }
    }
}

/// Full guild and player rankings of a siege, each ordered by score descending.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Rankings {
    pub guilds: Vec<GuildRanking>,
    pub players: Vec<PlayerRanking>,
}

impl Rankings {
    pub fn into_dto(self) -> RankingsDto {
        RankingsDto {
            guilds: self.guilds.into_iter().map(GuildRanking::into_dto).collect(),
            players: self.players.into_iter().map(PlayerRanking::into_dto).collect(),
        }
    }
}

impl From<Option<GuildRanking>> for TopGuildDto {
    fn from(top: Option<GuildRanking>) -> Self {
        match top {
            Some(ranking) => TopGuildDto {
                guild_name: ranking.guild_name,
                score: Some(ranking.score),
            },
            None => TopGuildDto {
                guild_name: NO_RESULT.to_string(),
                score: None,
            },
        }
    }
}

impl From<Option<PlayerRanking>> for MvpDto {
    fn from(top: Option<PlayerRanking>) -> Self {
        match top {
            Some(ranking) => MvpDto {
                player_name: ranking.player_name,
                score: Some(ranking.score),
            },
            None => MvpDto {
                player_name: NO_RESULT.to_string(),
                score: None,
            },
        }
    }
}
