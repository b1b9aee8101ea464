use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Siege::Table)
                    .if_not_exists()
                    .col(pk_auto(Siege::Id))
                    .col(timestamp_with_time_zone(Siege::Date))
                    .col(string_null(Siege::Name))
                    .col(text_null(Siege::Description))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_sieges_date")
                    .table(Siege::Table)
                    .col(Siege::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Siege::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Siege {
    #[sea_orm(iden = "sieges")]
    Table,
    Id,
    Date,
    Name,
    Description,
}
