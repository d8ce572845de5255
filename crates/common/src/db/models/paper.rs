//! Paper entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "papers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_type = "Text")]
    pub title: String,

    #[sea_orm(column_name = "abstract", column_type = "Text")]
    #[serde(rename = "abstract")]
    pub abstract_text: String,

    /// Publication status, e.g. "published", "draft"
    #[sea_orm(column_type = "Text")]
    pub status: String,

    /// Publication date
    pub date: Date,

    #[sea_orm(column_type = "Text", nullable)]
    pub affiliation: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub publication: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub doi: Option<String>,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::paper_author::Entity")]
    PaperAuthors,

    #[sea_orm(has_many = "super::paper_tag::Entity")]
    PaperTags,

    #[sea_orm(has_many = "super::file::Entity")]
    Files,
}

impl Related<super::paper_author::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PaperAuthors.def()
    }
}

impl Related<super::paper_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PaperTags.def()
    }
}

impl Related<super::file::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Files.def()
    }
}

impl Related<super::tag::Entity> for Entity {
    fn to() -> RelationDef {
        super::paper_tag::Relation::Tag.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::paper_tag::Relation::Paper.def().rev())
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::paper_author::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::paper_author::Relation::Paper.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
