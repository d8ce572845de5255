//! Tag entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tags")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_type = "Text", unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::paper_tag::Entity")]
    PaperTags,

    #[sea_orm(has_many = "super::project_tag::Entity")]
    ProjectTags,
}

impl Related<super::paper_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PaperTags.def()
    }
}

impl Related<super::project_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectTags.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
