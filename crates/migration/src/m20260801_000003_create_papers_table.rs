use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Papers::Table)
                    .if_not_exists()
                    .col(pk_auto(Papers::Id))
                    .col(string(Papers::Title))
                    .col(text(Papers::Abstract))
                    .col(string(Papers::Status))
                    .col(date(Papers::Date))
                    .col(string_null(Papers::Affiliation))
                    .col(string_null(Papers::Publication))
                    .col(string_null(Papers::Doi))
                    .col(timestamp_with_time_zone(Papers::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Papers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Papers {
    Table,
    Id,
    Title,
    Abstract,
    Status,
    Date,
    Affiliation,
    Publication,
    Doi,
    CreatedAt,
}
