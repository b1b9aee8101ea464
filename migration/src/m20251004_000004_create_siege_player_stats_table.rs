use sea_orm_migration::{prelude::*, schema::*};

use super::m20251004_000001_create_sieges_table::Siege;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SiegePlayerStat::Table)
                    .if_not_exists()
                    .col(pk_auto(SiegePlayerStat::Id))
                    .col(integer(SiegePlayerStat::SiegeId))
                    .col(string(SiegePlayerStat::PlayerName))
                    .col(string_null(SiegePlayerStat::GuildName))
                    .col(integer_null(SiegePlayerStat::Kills))
                    .col(integer_null(SiegePlayerStat::Deaths))
                    .col(integer_null(SiegePlayerStat::Points))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_siege_player_stats_siege_id")
                            .from(SiegePlayerStat::Table, SiegePlayerStat::SiegeId)
                            .to(Siege::Table, Siege::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_siege_player_stats_siege_id")
                    .table(SiegePlayerStat::Table)
                    .col(SiegePlayerStat::SiegeId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SiegePlayerStat::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SiegePlayerStat {
    #[sea_orm(iden = "siege_player_stats")]
    Table,
    Id,
    SiegeId,
    PlayerName,
    GuildName,
    Kills,
    Deaths,
    Points,
}
