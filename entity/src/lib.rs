//! SeaORM entities for the siege results schema.
//!
//! One module per table. The schema itself is owned by the `migration` crate; these models
//! mirror it column for column so rows are decoded into typed records at the query boundary.

pub mod prelude;

pub mod siege;
pub mod siege_guild_ranking;
pub mod siege_player_death;
pub mod siege_player_kill;
pub mod siege_player_ranking;
pub mod siege_player_stat;
