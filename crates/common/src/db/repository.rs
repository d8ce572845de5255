//! Repository for database operations
//!
//! Provides a clean interface for all data access operations
//! with proper error handling and transaction support.

use crate::db::models::*;
use crate::db::DbPool;
use crate::errors::{AppError, Result};
use chrono::{NaiveDate, Utc};
use sea_orm::sea_query::{Expr, Func, IntoColumnRef, Query, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, EntityTrait,
    LoaderTrait, QueryFilter, QueryOrder, QuerySelect, Set, SqlErr, TransactionTrait,
};
use serde::Serialize;
use std::collections::HashMap;

/// Author join row with the referenced user
#[derive(Debug, Clone, Serialize)]
pub struct AuthorEntry {
    pub role: String,
    pub user: User,
}

/// Paper with its loaded relations
#[derive(Debug, Clone, Serialize)]
pub struct PaperGraph {
    #[serde(flatten)]
    pub paper: Paper,
    pub authors: Vec<AuthorEntry>,
    pub tags: Vec<Tag>,
    pub files: Vec<File>,
}

/// Project with its loaded relations
#[derive(Debug, Clone, Serialize)]
pub struct ProjectGraph {
    #[serde(flatten)]
    pub project: Project,
    pub owner: Option<User>,
    pub tags: Vec<Tag>,
    pub media: Vec<Media>,
    pub events: Vec<Event>,
    pub files: Vec<File>,
}

/// Paper authored by a specific user, with the author role on the join row
#[derive(Debug, Clone, Serialize)]
pub struct AuthoredPaper {
    pub role: String,
    pub paper: Paper,
    pub tags: Vec<Tag>,
    pub files: Vec<File>,
}

/// Full user detail: the user plus everything they author or own
#[derive(Debug, Clone, Serialize)]
pub struct UserDetail {
    #[serde(flatten)]
    pub user: User,
    pub papers: Vec<AuthoredPaper>,
    pub projects: Vec<ProjectGraph>,
}

/// Fields for creating a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: Option<String>,
    pub email: String,
    pub password_hash: Option<String>,
    pub role: String,
    pub position: Option<String>,
    pub department: Option<String>,
}

/// Fields for creating a paper
#[derive(Debug, Clone, Default)]
pub struct NewPaper {
    pub title: String,
    pub abstract_text: String,
    pub date: Option<NaiveDate>,
    pub status: Option<String>,
    pub affiliation: Option<String>,
    pub publication: Option<String>,
    pub doi: Option<String>,
    pub author_ids: Vec<i32>,
    pub tag_names: Vec<String>,
}

/// Partial update of a paper; `None` leaves the field untouched
#[derive(Debug, Clone, Default)]
pub struct PaperChanges {
    pub title: Option<String>,
    pub abstract_text: Option<String>,
    pub date: Option<NaiveDate>,
    /// When present, replaces the author join rows wholesale
    pub author_ids: Option<Vec<i32>>,
    /// When present, replaces the tag join rows wholesale
    pub tag_names: Option<Vec<String>>,
}

/// Fields for creating a project
#[derive(Debug, Clone, Default)]
pub struct NewProject {
    pub title: String,
    pub summary: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub owner_id: Option<i32>,
    pub tag_names: Vec<String>,
}

/// Sort modes for the paper search endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaperSort {
    /// No ordering applied
    #[default]
    Relevance,
    YearAsc,
    YearDesc,
    TitleAsc,
    TitleDesc,
}

impl PaperSort {
    /// Parse the wire value; anything unknown falls back to relevance
    pub fn parse(value: &str) -> Self {
        match value {
            "year_asc" => PaperSort::YearAsc,
            "year_desc" => PaperSort::YearDesc,
            "title_asc" => PaperSort::TitleAsc,
            "title_desc" => PaperSort::TitleDesc,
            _ => PaperSort::Relevance,
        }
    }
}

/// Search parameters for the papers listing
#[derive(Debug, Clone, Default)]
pub struct PaperSearch {
    /// Free-text query matched against title, abstract, and tag names
    pub query: Option<String>,
    /// Restrict to papers dated within this calendar year
    pub year: Option<i32>,
    pub sort: PaperSort,
    /// Column filters: title / tag name / author name contains
    pub title: Option<String>,
    pub tag: Option<String>,
    pub author: Option<String>,
}

/// Author role written on the first join row at paper creation
const ROLE_CORRESPONDING: &str = "corresponding";
/// Author role written on subsequent join rows
const ROLE_CO_AUTHOR: &str = "co-author";

/// Case-insensitive `contains` predicate: LOWER(col) LIKE '%needle%'
fn contains_ci<C: IntoColumnRef>(col: C, needle: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col(col))).like(format!("%{}%", needle.to_lowercase()))
}

/// Repository for data access operations
#[derive(Clone)]
pub struct Repository {
    pool: DbPool,
}

impl Repository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get the read connection
    fn read_conn(&self) -> &DatabaseConnection {
        self.pool.read()
    }

    /// Get the write connection
    fn write_conn(&self) -> &DatabaseConnection {
        self.pool.write()
    }

    // ========================================================================
    // Health Check
    // ========================================================================

    /// Ping the database
    pub async fn ping(&self) -> Result<()> {
        self.pool.ping().await
    }

    // ========================================================================
    // User Operations
    // ========================================================================

    /// List all users, newest first
    pub async fn list_users(&self) -> Result<Vec<User>> {
        UserEntity::find()
            .order_by_desc(UserColumn::CreatedAt)
            .all(self.read_conn())
            .await
            .map_err(Into::into)
    }

    /// List all users projected to (id, name), ordered by name
    pub async fn list_author_options(&self) -> Result<Vec<(i32, Option<String>)>> {
        UserEntity::find()
            .select_only()
            .column(UserColumn::Id)
            .column(UserColumn::Name)
            .order_by_asc(UserColumn::Name)
            .into_tuple()
            .all(self.read_conn())
            .await
            .map_err(Into::into)
    }

    /// Find a user by ID
    pub async fn find_user_by_id(&self, id: i32) -> Result<Option<User>> {
        UserEntity::find_by_id(id)
            .one(self.read_conn())
            .await
            .map_err(Into::into)
    }

    /// Find a user by email
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        UserEntity::find()
            .filter(UserColumn::Email.eq(email))
            .one(self.read_conn())
            .await
            .map_err(Into::into)
    }

    /// Create a new user; a duplicate email maps to a conflict error
    pub async fn create_user(&self, new: NewUser) -> Result<User> {
        let email = new.email.clone();
        let user = UserActiveModel {
            name: Set(new.name),
            email: Set(new.email),
            password_hash: Set(new.password_hash),
            role: Set(new.role),
            position: Set(new.position),
            department: Set(new.department),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        match user.insert(self.write_conn()).await {
            Ok(user) => Ok(user),
            Err(e) => match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    Err(AppError::DuplicateEmail { email })
                }
                _ => Err(e.into()),
            },
        }
    }

    /// Load a user together with authored papers and owned projects
    pub async fn user_detail(&self, id: i32) -> Result<Option<UserDetail>> {
        let conn = self.read_conn();

        let Some(user) = UserEntity::find_by_id(id).one(conn).await? else {
            return Ok(None);
        };

        // Papers the user authored, with the role carried on the join row
        let author_rows = PaperAuthorEntity::find()
            .filter(PaperAuthorColumn::UserId.eq(id))
            .find_also_related(PaperEntity)
            .all(conn)
            .await?;

        let papers: Vec<Paper> = author_rows
            .iter()
            .filter_map(|(_, paper)| paper.clone())
            .collect();
        let tags = papers.load_many_to_many(TagEntity, PaperTagEntity, conn).await?;
        let files = papers.load_many(FileEntity, conn).await?;

        let authored = author_rows
            .into_iter()
            .filter_map(|(row, paper)| paper.map(|p| (row.role, p)))
            .zip(tags.into_iter().zip(files))
            .map(|((role, paper), (tags, files))| AuthoredPaper {
                role,
                paper,
                tags,
                files,
            })
            .collect();

        let projects = ProjectEntity::find()
            .filter(ProjectColumn::OwnerId.eq(id))
            .order_by_desc(ProjectColumn::CreatedAt)
            .all(conn)
            .await?;
        let projects = self.load_project_graphs(projects).await?;

        Ok(Some(UserDetail {
            user,
            papers: authored,
            projects,
        }))
    }

    // ========================================================================
    // Tag Operations
    // ========================================================================

    /// List all tags
    pub async fn list_tags(&self) -> Result<Vec<Tag>> {
        TagEntity::find()
            .all(self.read_conn())
            .await
            .map_err(Into::into)
    }

    /// Find a tag by exact name, creating it when absent
    async fn find_or_create_tag<C: ConnectionTrait>(&self, conn: &C, name: &str) -> Result<Tag> {
        if let Some(tag) = TagEntity::find()
            .filter(TagColumn::Name.eq(name))
            .one(conn)
            .await?
        {
            return Ok(tag);
        }

        TagActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        }
        .insert(conn)
        .await
        .map_err(Into::into)
    }

    // ========================================================================
    // Paper Operations
    // ========================================================================

    /// List all papers with authors, tags, and files, ordered by id
    pub async fn list_papers(&self) -> Result<Vec<PaperGraph>> {
        let papers = PaperEntity::find()
            .order_by_asc(PaperColumn::Id)
            .all(self.read_conn())
            .await?;
        self.load_paper_graphs(papers).await
    }

    /// List all papers without relations (admin dashboard)
    pub async fn list_papers_plain(&self) -> Result<Vec<Paper>> {
        PaperEntity::find()
            .order_by_asc(PaperColumn::Id)
            .all(self.read_conn())
            .await
            .map_err(Into::into)
    }

    /// Load one paper with its relations
    pub async fn get_paper(&self, id: i32) -> Result<Option<PaperGraph>> {
        let Some(paper) = PaperEntity::find_by_id(id).one(self.read_conn()).await? else {
            return Ok(None);
        };
        let mut graphs = self.load_paper_graphs(vec![paper]).await?;
        Ok(graphs.pop())
    }

    /// Distinct publication years in first-seen order
    pub async fn distinct_years(&self) -> Result<Vec<i32>> {
        use chrono::Datelike;

        let dates: Vec<NaiveDate> = PaperEntity::find()
            .select_only()
            .column(PaperColumn::Date)
            .into_tuple()
            .all(self.read_conn())
            .await?;

        let mut seen = Vec::new();
        for date in dates {
            let year = date.year();
            if !seen.contains(&year) {
                seen.push(year);
            }
        }
        Ok(seen)
    }

    /// The id the next created paper would take
    pub async fn next_paper_id(&self) -> Result<i32> {
        let last = PaperEntity::find()
            .order_by_desc(PaperColumn::Id)
            .one(self.read_conn())
            .await?;
        Ok(last.map(|paper| paper.id + 1).unwrap_or(1))
    }

    /// Search papers with dynamic predicate composition
    ///
    /// All provided filters are ANDed; the free-text query ORs across
    /// title, abstract, and tag names. Matching is case-insensitive.
    pub async fn search_papers(&self, params: &PaperSearch) -> Result<Vec<PaperGraph>> {
        let mut cond = Condition::all();

        if let Some(ref title) = params.title {
            cond = cond.add(contains_ci(PaperColumn::Title, title));
        }

        if let Some(ref tag) = params.tag {
            cond = cond.add(PaperColumn::Id.in_subquery(Self::tag_match_subquery(tag)));
        }

        if let Some(ref author) = params.author {
            cond = cond.add(PaperColumn::Id.in_subquery(Self::author_match_subquery(author)));
        }

        if let Some(year) = params.year {
            let start = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(AppError::InvalidFormat {
                message: format!("Invalid year: {}", year),
            })?;
            let end = NaiveDate::from_ymd_opt(year + 1, 1, 1).ok_or(AppError::InvalidFormat {
                message: format!("Invalid year: {}", year),
            })?;
            cond = cond
                .add(PaperColumn::Date.gte(start))
                .add(PaperColumn::Date.lt(end));
        }

        if let Some(ref query) = params.query {
            cond = cond.add(
                Condition::any()
                    .add(contains_ci(PaperColumn::Title, query))
                    .add(contains_ci(PaperColumn::AbstractText, query))
                    .add(PaperColumn::Id.in_subquery(Self::tag_match_subquery(query))),
            );
        }

        let mut select = PaperEntity::find().filter(cond);

        select = match params.sort {
            PaperSort::YearAsc => select.order_by_asc(PaperColumn::Date),
            PaperSort::YearDesc => select.order_by_desc(PaperColumn::Date),
            PaperSort::TitleAsc => select.order_by_asc(PaperColumn::Title),
            PaperSort::TitleDesc => select.order_by_desc(PaperColumn::Title),
            PaperSort::Relevance => select,
        };

        let papers = select.all(self.read_conn()).await?;
        self.load_paper_graphs(papers).await
    }

    /// Subquery selecting paper ids with a tag whose name contains `needle`
    fn tag_match_subquery(needle: &str) -> sea_orm::sea_query::SelectStatement {
        Query::select()
            .column((PaperTagEntity, PaperTagColumn::PaperId))
            .from(PaperTagEntity)
            .inner_join(
                TagEntity,
                Expr::col((TagEntity, TagColumn::Id))
                    .equals((PaperTagEntity, PaperTagColumn::TagId)),
            )
            .and_where(contains_ci((TagEntity, TagColumn::Name), needle))
            .to_owned()
    }

    /// Subquery selecting paper ids with an author whose name contains `needle`
    fn author_match_subquery(needle: &str) -> sea_orm::sea_query::SelectStatement {
        Query::select()
            .column((PaperAuthorEntity, PaperAuthorColumn::PaperId))
            .from(PaperAuthorEntity)
            .inner_join(
                UserEntity,
                Expr::col((UserEntity, UserColumn::Id))
                    .equals((PaperAuthorEntity, PaperAuthorColumn::UserId)),
            )
            .and_where(contains_ci((UserEntity, UserColumn::Name), needle))
            .to_owned()
    }

    /// Create a paper together with its author and tag join rows
    pub async fn create_paper(&self, new: NewPaper) -> Result<PaperGraph> {
        let txn = self.write_conn().begin().await?;

        let paper = PaperActiveModel {
            title: Set(new.title),
            abstract_text: Set(new.abstract_text),
            status: Set(new.status.unwrap_or_else(|| "draft".to_string())),
            date: Set(new.date.unwrap_or_else(|| Utc::now().date_naive())),
            affiliation: Set(new.affiliation),
            publication: Set(new.publication),
            doi: Set(new.doi),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        self.insert_paper_authors(&txn, paper.id, &new.author_ids).await?;
        self.insert_paper_tags(&txn, paper.id, &new.tag_names).await?;

        txn.commit().await?;

        self.get_paper(paper.id)
            .await?
            .ok_or_else(|| AppError::PaperNotFound {
                id: paper.id.to_string(),
            })
    }

    /// Apply a partial update, replacing join rows where requested
    pub async fn update_paper(&self, id: i32, changes: PaperChanges) -> Result<PaperGraph> {
        let txn = self.write_conn().begin().await?;

        let paper = PaperEntity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::PaperNotFound { id: id.to_string() })?;

        let mut active: PaperActiveModel = paper.into();
        if let Some(title) = changes.title {
            active.title = Set(title);
        }
        if let Some(abstract_text) = changes.abstract_text {
            active.abstract_text = Set(abstract_text);
        }
        if let Some(date) = changes.date {
            active.date = Set(date);
        }
        active.update(&txn).await?;

        if let Some(ref author_ids) = changes.author_ids {
            PaperAuthorEntity::delete_many()
                .filter(PaperAuthorColumn::PaperId.eq(id))
                .exec(&txn)
                .await?;
            self.insert_paper_authors(&txn, id, author_ids).await?;
        }

        if let Some(ref tag_names) = changes.tag_names {
            PaperTagEntity::delete_many()
                .filter(PaperTagColumn::PaperId.eq(id))
                .exec(&txn)
                .await?;
            self.insert_paper_tags(&txn, id, tag_names).await?;
        }

        txn.commit().await?;

        self.get_paper(id)
            .await?
            .ok_or_else(|| AppError::PaperNotFound { id: id.to_string() })
    }

    /// Delete a paper; join rows, files cascade at the schema level
    pub async fn delete_paper(&self, id: i32) -> Result<bool> {
        let result = PaperEntity::delete_by_id(id)
            .exec(self.write_conn())
            .await?;
        Ok(result.rows_affected > 0)
    }

    async fn insert_paper_authors<C: ConnectionTrait>(
        &self,
        conn: &C,
        paper_id: i32,
        author_ids: &[i32],
    ) -> Result<()> {
        for (index, user_id) in author_ids.iter().enumerate() {
            let role = if index == 0 {
                ROLE_CORRESPONDING
            } else {
                ROLE_CO_AUTHOR
            };
            PaperAuthorActiveModel {
                paper_id: Set(paper_id),
                user_id: Set(*user_id),
                role: Set(role.to_string()),
                ..Default::default()
            }
            .insert(conn)
            .await?;
        }
        Ok(())
    }

    async fn insert_paper_tags<C: ConnectionTrait>(
        &self,
        conn: &C,
        paper_id: i32,
        tag_names: &[String],
    ) -> Result<()> {
        for name in tag_names {
            let tag = self.find_or_create_tag(conn, name).await?;
            PaperTagActiveModel {
                paper_id: Set(paper_id),
                tag_id: Set(tag.id),
                ..Default::default()
            }
            .insert(conn)
            .await?;
        }
        Ok(())
    }

    /// Attach authors, tags, and files to a batch of papers
    async fn load_paper_graphs(&self, papers: Vec<Paper>) -> Result<Vec<PaperGraph>> {
        let conn = self.read_conn();

        let author_rows = papers.load_many(PaperAuthorEntity, conn).await?;
        let tags = papers.load_many_to_many(TagEntity, PaperTagEntity, conn).await?;
        let files = papers.load_many(FileEntity, conn).await?;

        // Resolve the users referenced by the author join rows in one query
        let user_ids: Vec<i32> = author_rows
            .iter()
            .flatten()
            .map(|row| row.user_id)
            .collect();
        let users: HashMap<i32, User> = if user_ids.is_empty() {
            HashMap::new()
        } else {
            UserEntity::find()
                .filter(UserColumn::Id.is_in(user_ids))
                .all(conn)
                .await?
                .into_iter()
                .map(|user| (user.id, user))
                .collect()
        };

        let graphs = papers
            .into_iter()
            .zip(author_rows.into_iter().zip(tags.into_iter().zip(files)))
            .map(|(paper, (author_rows, (tags, files)))| {
                let authors = author_rows
                    .into_iter()
                    .filter_map(|row| {
                        users.get(&row.user_id).cloned().map(|user| AuthorEntry {
                            role: row.role,
                            user,
                        })
                    })
                    .collect();
                PaperGraph {
                    paper,
                    authors,
                    tags,
                    files,
                }
            })
            .collect();

        Ok(graphs)
    }

    // ========================================================================
    // Project Operations
    // ========================================================================

    /// List all projects with owner, tags, media, events, and files
    pub async fn list_projects(&self) -> Result<Vec<ProjectGraph>> {
        let projects = ProjectEntity::find()
            .order_by_desc(ProjectColumn::CreatedAt)
            .all(self.read_conn())
            .await?;
        self.load_project_graphs(projects).await
    }

    /// Load one project with its relations
    pub async fn get_project(&self, id: i32) -> Result<Option<ProjectGraph>> {
        let Some(project) = ProjectEntity::find_by_id(id).one(self.read_conn()).await? else {
            return Ok(None);
        };
        let mut graphs = self.load_project_graphs(vec![project]).await?;
        Ok(graphs.pop())
    }

    /// Create a project together with its tag join rows
    pub async fn create_project(&self, new: NewProject) -> Result<ProjectGraph> {
        let txn = self.write_conn().begin().await?;

        let project = ProjectActiveModel {
            title: Set(new.title),
            summary: Set(new.summary),
            start_date: Set(new.start_date),
            end_date: Set(new.end_date),
            owner_id: Set(new.owner_id),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        for name in &new.tag_names {
            let tag = self.find_or_create_tag(&txn, name).await?;
            ProjectTagActiveModel {
                project_id: Set(project.id),
                tag_id: Set(tag.id),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;

        self.get_project(project.id)
            .await?
            .ok_or_else(|| AppError::ProjectNotFound {
                id: project.id.to_string(),
            })
    }

    /// Attach owner, tags, media, events, and files to a batch of projects
    async fn load_project_graphs(&self, projects: Vec<Project>) -> Result<Vec<ProjectGraph>> {
        let conn = self.read_conn();

        let tags = projects
            .load_many_to_many(TagEntity, ProjectTagEntity, conn)
            .await?;
        let media = projects.load_many(MediaEntity, conn).await?;
        let events = projects.load_many(EventEntity, conn).await?;
        let files = projects.load_many(FileEntity, conn).await?;

        let owner_ids: Vec<i32> = projects.iter().filter_map(|p| p.owner_id).collect();
        let owners: HashMap<i32, User> = if owner_ids.is_empty() {
            HashMap::new()
        } else {
            UserEntity::find()
                .filter(UserColumn::Id.is_in(owner_ids))
                .all(conn)
                .await?
                .into_iter()
                .map(|user| (user.id, user))
                .collect()
        };

        let graphs = projects
            .into_iter()
            .zip(tags.into_iter().zip(media.into_iter().zip(events.into_iter().zip(files))))
            .map(|(project, (tags, (media, (events, files))))| {
                let owner = project.owner_id.and_then(|id| owners.get(&id).cloned());
                ProjectGraph {
                    project,
                    owner,
                    tags,
                    media,
                    events,
                    files,
                }
            })
            .collect();

        Ok(graphs)
    }

    // ========================================================================
    // File / Media / Event Operations (used by the seeder)
    // ========================================================================

    /// Attach a file to a paper or project
    pub async fn create_file(
        &self,
        filename: String,
        url: String,
        mime: String,
        size: i64,
        paper_id: Option<i32>,
        project_id: Option<i32>,
    ) -> Result<File> {
        FileActiveModel {
            filename: Set(filename),
            url: Set(url),
            mime: Set(mime),
            size: Set(size),
            paper_id: Set(paper_id),
            project_id: Set(project_id),
            ..Default::default()
        }
        .insert(self.write_conn())
        .await
        .map_err(Into::into)
    }

    /// Attach a media item to a project
    pub async fn create_media(
        &self,
        caption: String,
        url: String,
        mime: String,
        project_id: i32,
    ) -> Result<Media> {
        MediaActiveModel {
            caption: Set(caption),
            url: Set(url),
            mime: Set(mime),
            project_id: Set(project_id),
            ..Default::default()
        }
        .insert(self.write_conn())
        .await
        .map_err(Into::into)
    }

    /// Attach an event to a project
    pub async fn create_event(
        &self,
        title: String,
        description: String,
        event_date: NaiveDate,
        project_id: i32,
    ) -> Result<Event> {
        EventActiveModel {
            title: Set(title),
            description: Set(description),
            event_date: Set(event_date),
            project_id: Set(project_id),
            ..Default::default()
        }
        .insert(self.write_conn())
        .await
        .map_err(Into::into)
    }

    /// Delete every row of every table, children before parents
    ///
    /// Used by the seeder to reset the catalog.
    pub async fn clear_all(&self) -> Result<()> {
        let conn = self.write_conn();
        EventEntity::delete_many().exec(conn).await?;
        MediaEntity::delete_many().exec(conn).await?;
        FileEntity::delete_many().exec(conn).await?;
        PaperAuthorEntity::delete_many().exec(conn).await?;
        PaperTagEntity::delete_many().exec(conn).await?;
        ProjectTagEntity::delete_many().exec(conn).await?;
        ProjectEntity::delete_many().exec(conn).await?;
        PaperEntity::delete_many().exec(conn).await?;
        UserEntity::delete_many().exec(conn).await?;
        TagEntity::delete_many().exec(conn).await?;
        Ok(())
    }
}
