use sea_orm_migration::{prelude::*, schema::*};

use super::m20260801_000002_create_tags_table::Tags;
use super::m20260801_000003_create_papers_table::Papers;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PaperTags::Table)
                    .if_not_exists()
                    .col(pk_auto(PaperTags::Id))
                    .col(integer(PaperTags::PaperId))
                    .col(integer(PaperTags::TagId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_paper_tags_paper_id")
                            .from(PaperTags::Table, PaperTags::PaperId)
                            .to(Papers::Table, Papers::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_paper_tags_tag_id")
                            .from(PaperTags::Table, PaperTags::TagId)
                            .to(Tags::Table, Tags::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_paper_tags_unique")
                            .col(PaperTags::PaperId)
                            .col(PaperTags::TagId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PaperTags::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PaperTags {
    Table,
    Id,
    PaperId,
    TagId,
}
