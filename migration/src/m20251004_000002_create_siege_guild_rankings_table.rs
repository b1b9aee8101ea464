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
                    .table(SiegeGuildRanking::Table)
                    .if_not_exists()
                    .col(pk_auto(SiegeGuildRanking::Id))
                    .col(integer(SiegeGuildRanking::SiegeId))
                    .col(string(SiegeGuildRanking::GuildName))
                    .col(integer(SiegeGuildRanking::Score))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_siege_guild_rankings_siege_id")
                            .from(SiegeGuildRanking::Table, SiegeGuildRanking::SiegeId)
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
                    .name("idx_siege_guild_rankings_siege_score")
                    .table(SiegeGuildRanking::Table)
                    .col(SiegeGuildRanking::SiegeId)
                    .col(SiegeGuildRanking::Score)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SiegeGuildRanking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SiegeGuildRanking {
    #[sea_orm(iden = "siege_guild_rankings")]
    Table,
    Id,
    SiegeId,
    GuildName,
    Score,
}
