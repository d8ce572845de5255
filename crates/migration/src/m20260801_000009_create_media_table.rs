use sea_orm_migration::{prelude::*, schema::*};

use super::m20260801_000004_create_projects_table::Projects;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Media::Table)
                    .if_not_exists()
                    .col(pk_auto(Media::Id))
                    .col(string(Media::Caption))
                    .col(string(Media::Url))
                    .col(string(Media::Mime))
                    .col(integer(Media::ProjectId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_media_project_id")
                            .from(Media::Table, Media::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Media::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Media {
    Table,
    Id,
    Caption,
    Url,
    Mime,
    ProjectId,
}
