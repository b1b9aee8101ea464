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
                    .table(SiegePlayerRanking::Table)
                    .if_not_exists()
                    .col(pk_auto(SiegePlayerRanking::Id))
                    .col(integer(SiegePlayerRanking::SiegeId))
                    .col(string(SiegePlayerRanking::PlayerName))
                    .col(integer(SiegePlayerRanking::Score))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_siege_player_rankings_siege_id")
                            .from(SiegePlayerRanking::Table, SiegePlayerRanking::SiegeId)
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
                    .name("idx_siege_player_rankings_siege_score")
                    .table(SiegePlayerRanking::Table)
                    .col(SiegePlayerRanking::SiegeId)
                    .col(SiegePlayerRanking::Score)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SiegePlayerRanking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SiegePlayerRanking {
    #[sea_orm(iden = "siege_player_rankings")]
    Table,
    Id,
    SiegeId,
    PlayerName,
    Score,
}
