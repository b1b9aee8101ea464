use sea_orm_migration::{prelude::*, schema::*};

use super::m20251004_000004_create_siege_player_stats_table::SiegePlayerStat;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SiegePlayerDeath::Table)
                    .if_not_exists()
                    .col(pk_auto(SiegePlayerDeath::Id))
                    .col(integer(SiegePlayerDeath::SiegePlayerStatId))
                    .col(integer_null(SiegePlayerDeath::SiegeId))
                    .col(integer(SiegePlayerDeath::LifeNumber))
                    .col(string(SiegePlayerDeath::KillerName))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_siege_player_deaths_stat_id")
                            .from(SiegePlayerDeath::Table, SiegePlayerDeath::SiegePlayerStatId)
                            .to(SiegePlayerStat::Table, SiegePlayerStat::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_siege_player_deaths_stat_id")
                    .table(SiegePlayerDeath::Table)
                    .col(SiegePlayerDeath::SiegePlayerStatId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SiegePlayerDeath::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SiegePlayerDeath {
    #[sea_orm(iden = "siege_player_deaths")]
    Table,
    Id,
    SiegePlayerStatId,
    SiegeId,
    LifeNumber,
    KillerName,
}
