use crate::server::data::siege::SiegeRepository;
use chrono::{TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod exists;
mod get_all;
