//! User entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_type = "Text", nullable)]
    pub name: Option<String>,

    #[sea_orm(column_type = "Text", unique)]
    pub email: String,

    /// Argon2 PHC string; absent for users that cannot log in
    #[sea_orm(column_type = "Text", nullable)]
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,

    /// USER or ADMIN
    #[sea_orm(column_type = "Text")]
    pub role: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub position: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub department: Option<String>,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::paper_author::Entity")]
    PaperAuthors,

    #[sea_orm(has_many = "super::project::Entity")]
    Projects,
}

impl Related<super::paper_author::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PaperAuthors.def()
    }
}

impl Related<super::project::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Projects.def()
    }
}

impl Related<super::paper::Entity> for Entity {
    fn to() -> RelationDef {
        super::paper_author::Relation::Paper.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::paper_author::Relation::User.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
