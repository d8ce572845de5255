use sea_orm_migration::{prelude::*, schema::*};

use super::m20260801_000001_create_users_table::Users;
use super::m20260801_000003_create_papers_table::Papers;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PaperAuthors::Table)
                    .if_not_exists()
                    .col(pk_auto(PaperAuthors::Id))
                    .col(integer(PaperAuthors::PaperId))
                    .col(integer(PaperAuthors::UserId))
                    .col(string(PaperAuthors::Role))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_paper_authors_paper_id")
                            .from(PaperAuthors::Table, PaperAuthors::PaperId)
                            .to(Papers::Table, Papers::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_paper_authors_user_id")
                            .from(PaperAuthors::Table, PaperAuthors::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_paper_authors_unique")
                            .col(PaperAuthors::PaperId)
                            .col(PaperAuthors::UserId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PaperAuthors::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PaperAuthors {
    Table,
    Id,
    PaperId,
    UserId,
    Role,
}
