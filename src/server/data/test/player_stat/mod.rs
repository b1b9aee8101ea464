use crate::server::data::player_stat::PlayerStatRepository;
use sea_orm::{ConnectionTrait, DbErr};
use test_utils::{
    builder::TestBuilder,
    factory::{
        self, player_death::PlayerDeathFactory, player_kill::PlayerKillFactory,
        player_stat::PlayerStatFactory,
    },
};

mod by_siege_id;
mod get_by_siege_id;
mod get_deaths_by_stat_ids;
mod get_kills_by_stat_ids;
