use crate::server::data::ranking::RankingRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_guild_rankings;
