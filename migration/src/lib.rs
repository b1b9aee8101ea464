pub use sea_orm_migration::prelude::*;

mod m20251004_000001_create_sieges_table;
mod m20251004_000002_create_siege_guild_rankings_table;
mod m20251004_000003_create_siege_player_rankings_table;
mod m20251004_000004_create_siege_player_stats_table;
mod m20251004_000005_create_siege_player_kills_table;
mod m20251004_000006_create_siege_player_deaths_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251004_000001_create_sieges_table::Migration),
            Box::new(m20251004_000002_create_siege_guild_rankings_table::Migration),
            Box::new(m20251004_000003_create_siege_player_rankings_table::Migration),
            Box::new(m20251004_000004_create_siege_player_stats_table::Migration),
            Box::new(m20251004_000005_create_siege_player_kills_table::Migration),
            Box::new(m20251004_000006_create_siege_player_deaths_table::Migration),
        ]
    }
}
