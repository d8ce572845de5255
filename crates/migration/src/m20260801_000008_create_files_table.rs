use sea_orm_migration::{prelude::*, schema::*};

use super::m20260801_000003_create_papers_table::Papers;
use super::m20260801_000004_create_projects_table::Projects;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Files::Table)
                    .if_not_exists()
                    .col(pk_auto(Files::Id))
                    .col(string(Files::Filename))
                    .col(string(Files::Url))
                    .col(string(Files::Mime))
                    .col(big_integer(Files::Size))
                    .col(integer_null(Files::PaperId))
                    .col(integer_null(Files::ProjectId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_files_paper_id")
                            .from(Files::Table, Files::PaperId)
                            .to(Papers::Table, Papers::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_files_project_id")
                            .from(Files::Table, Files::ProjectId)
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
            .drop_table(Table::drop().table(Files::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Files {
    Table,
    Id,
    Filename,
    Url,
    Mime,
    Size,
    PaperId,
    ProjectId,
}
