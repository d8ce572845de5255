pub use sea_orm_migration::prelude::*;

mod m20260801_000001_create_users_table;
mod m20260801_000002_create_tags_table;
mod m20260801_000003_create_papers_table;
mod m20260801_000004_create_projects_table;
mod m20260801_000005_create_paper_authors_table;
mod m20260801_000006_create_paper_tags_table;
mod m20260801_000007_create_project_tags_table;
mod m20260801_000008_create_files_table;
mod m20260801_000009_create_media_table;
mod m20260801_000010_create_events_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_users_table::Migration),
            Box::new(m20260801_000002_create_tags_table::Migration),
            Box::new(m20260801_000003_create_papers_table::Migration),
            Box::new(m20260801_000004_create_projects_table::Migration),
            Box::new(m20260801_000005_create_paper_authors_table::Migration),
            Box::new(m20260801_000006_create_paper_tags_table::Migration),
            Box::new(m20260801_000007_create_project_tags_table::Migration),
            Box::new(m20260801_000008_create_files_table::Migration),
            Box::new(m20260801_000009_create_media_table::Migration),
            Box::new(m20260801_000010_create_events_table::Migration),
        ]
    }
}
