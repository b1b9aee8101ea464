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
                    .table(SiegePlayerKill::Table)
                    .if_not_exists()
                    .col(pk_auto(SiegePlayerKill::Id))
                    .col(integer(SiegePlayerKill::SiegePlayerStatId))
                    .col(integer_null(SiegePlayerKill::SiegeId))
                    .col(integer(SiegePlayerKill::LifeNumber))
                    .col(string(SiegePlayerKill::VictimName))
                    .col(integer_null(SiegePlayerKill::PointsEarned))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_siege_player_kills_stat_id")
                            .from(SiegePlayerKill::Table, SiegePlayerKill::SiegePlayerStatId)
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
                    .name("idx_siege_player_kills_stat_id")
                    .table(SiegePlayerKill::Table)
                    .col(SiegePlayerKill::SiegePlayerStatId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SiegePlayerKill::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SiegePlayerKill {
    #[sea_orm(iden = "siege_player_kills")]
    Table,
    Id,
    SiegePlayerStatId,
    SiegeId,
    LifeNumber,
    VictimName,
    PointsEarned,
}
