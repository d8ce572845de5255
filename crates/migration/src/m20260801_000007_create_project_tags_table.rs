use sea_orm_migration::{prelude::*, schema::*};

use super::m20260801_000002_create_tags_table::Tags;
use super::m20260801_000004_create_projects_table::Projects;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProjectTags::Table)
                    .if_not_exists()
                    .col(pk_auto(ProjectTags::Id))
                    .col(integer(ProjectTags::ProjectId))
                    .col(integer(ProjectTags::TagId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_tags_project_id")
                            .from(ProjectTags::Table, ProjectTags::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_tags_tag_id")
                            .from(ProjectTags::Table, ProjectTags::TagId)
                            .to(Tags::Table, Tags::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_project_tags_unique")
                            .col(ProjectTags::ProjectId)
                            .col(ProjectTags::TagId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProjectTags::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ProjectTags {
    Table,
    Id,
    ProjectId,
    TagId,
}
