//! SeaORM entity models
//!
//! Database entities for the LabArchive catalog

mod event;
mod file;
mod media;
mod paper;
mod paper_author;
mod paper_tag;
mod project;
mod project_tag;
mod tag;
mod user;

pub use user::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity, Model as User,
};

pub use paper::{
    ActiveModel as PaperActiveModel, Column as PaperColumn, Entity as PaperEntity, Model as Paper,
};

pub use project::{
    ActiveModel as ProjectActiveModel, Column as ProjectColumn, Entity as ProjectEntity,
    Model as Project,
};

pub use tag::{
    ActiveModel as TagActiveModel, Column as TagColumn, Entity as TagEntity, Model as Tag,
};

pub use paper_author::{
    ActiveModel as PaperAuthorActiveModel, Column as PaperAuthorColumn,
    Entity as PaperAuthorEntity, Model as PaperAuthor,
};

pub use paper_tag::{
    ActiveModel as PaperTagActiveModel, Column as PaperTagColumn, Entity as PaperTagEntity,
    Model as PaperTag,
};

pub use project_tag::{
    ActiveModel as ProjectTagActiveModel, Column as ProjectTagColumn, Entity as ProjectTagEntity,
    Model as ProjectTag,
};

pub use file::{
    ActiveModel as FileActiveModel, Column as FileColumn, Entity as FileEntity, Model as File,
};

pub use media::{
    ActiveModel as MediaActiveModel, Column as MediaColumn, Entity as MediaEntity, Model as Media,
};

pub use event::{
    ActiveModel as EventActiveModel, Column as EventColumn, Entity as EventEntity, Model as Event,
};
