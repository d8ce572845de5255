//! Paper handlers
//!
//! Listing, lookup helpers, search, and the CRUD mutations.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::AppState;
use labarchive_common::{
    auth::hash_password,
    db::models::{Tag, User},
    db::{NewPaper, NewUser, PaperChanges, PaperGraph, PaperSearch, PaperSort, Repository},
    errors::{AppError, Result},
    metrics, DEFAULT_USER_ROLE,
};

/// Request to create a paper
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePaperRequest {
    #[validate(length(min = 1, max = 500))]
    pub title: String,

    #[serde(rename = "abstract", default)]
    pub abstract_text: String,

    pub date: Option<NaiveDate>,

    pub status: Option<String>,

    pub affiliation: Option<String>,

    pub publication: Option<String>,

    pub doi: Option<String>,

    #[serde(default)]
    pub author_ids: Vec<i32>,

    #[serde(default)]
    pub tag_names: Vec<String>,
}

/// Partial update request; absent fields stay untouched
#[derive(Debug, Deserialize)]
pub struct UpdatePaperRequest {
    pub title: Option<String>,

    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,

    pub date: Option<NaiveDate>,

    /// Replaces the author join rows when present
    pub author_ids: Option<Vec<i32>>,

    /// Replaces the tag join rows when present
    pub tag_names: Option<Vec<String>>,
}

/// Request to create a user
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub department: Option<String>,
    pub role: Option<String>,
    pub position: Option<String>,
}

/// Search query parameters
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub query: String,

    pub year: Option<String>,

    pub sort: Option<String>,

    /// JSON-encoded column filters: {"title": ..., "tag": ..., "author": ...}
    pub filters: Option<String>,
}

/// Column filters carried inside the `filters` query parameter
#[derive(Debug, Default, Deserialize)]
struct ColumnFilters {
    title: Option<String>,
    tag: Option<String>,
    author: Option<String>,
}

#[derive(Serialize)]
pub struct AuthorOption {
    pub id: i32,
    pub name: Option<String>,
}

#[derive(Serialize)]
pub struct NextIdResponse {
    pub id: i32,
}

/// List all papers with authors, tags, and files
pub async fn list_papers(State(state): State<AppState>) -> Result<Json<Vec<PaperGraph>>> {
    let repo = Repository::new(state.db.clone());
    Ok(Json(repo.list_papers().await?))
}

/// Distinct publication years
pub async fn years(State(state): State<AppState>) -> Result<Json<Vec<i32>>> {
    let repo = Repository::new(state.db.clone());
    Ok(Json(repo.distinct_years().await?))
}

/// All users as author options, ordered by name
pub async fn author_options(State(state): State<AppState>) -> Result<Json<Vec<AuthorOption>>> {
    let repo = Repository::new(state.db.clone());

    let options = repo
        .list_author_options()
        .await?
        .into_iter()
        .map(|(id, name)| AuthorOption { id, name })
        .collect();

    Ok(Json(options))
}

/// The id the next created paper would take
pub async fn next_id(State(state): State<AppState>) -> Result<Json<NextIdResponse>> {
    let repo = Repository::new(state.db.clone());
    Ok(Json(NextIdResponse {
        id: repo.next_paper_id().await?,
    }))
}

/// All tags
pub async fn tags(State(state): State<AppState>) -> Result<Json<Vec<Tag>>> {
    let repo = Repository::new(state.db.clone());
    Ok(Json(repo.list_tags().await?))
}

/// Search papers by free text, column filters, year, and sort mode
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<Vec<PaperGraph>>> {
    let filters = match params.filters.as_deref() {
        Some(raw) => serde_json::from_str::<ColumnFilters>(raw).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Invalid filters JSON, ignoring");
            ColumnFilters::default()
        }),
        None => ColumnFilters::default(),
    };

    let search = PaperSearch {
        query: Some(params.query).filter(|q| !q.is_empty()),
        year: params.year.as_deref().and_then(|y| y.parse().ok()),
        sort: PaperSort::parse(params.sort.as_deref().unwrap_or("relevance")),
        title: filters.title,
        tag: filters.tag,
        author: filters.author,
    };

    let repo = Repository::new(state.db.clone());
    let papers = repo.search_papers(&search).await?;

    metrics::record_search(papers.len());

    Ok(Json(papers))
}

/// Get one paper with its relations
pub async fn get_paper(
    State(state): State<AppState>,
    Path(paper_id): Path<i32>,
) -> Result<Json<PaperGraph>> {
    let repo = Repository::new(state.db.clone());

    let paper = repo
        .get_paper(paper_id)
        .await?
        .ok_or_else(|| AppError::PaperNotFound {
            id: paper_id.to_string(),
        })?;

    Ok(Json(paper))
}

/// Create a paper with author and tag associations
pub async fn create_paper(
    State(state): State<AppState>,
    Json(request): Json<CreatePaperRequest>,
) -> Result<(StatusCode, Json<PaperGraph>)> {
    request.validate().map_err(|e| AppError::Validation {
        message: e.to_string(),
        field: None,
    })?;

    let repo = Repository::new(state.db.clone());

    let paper = repo
        .create_paper(NewPaper {
            title: request.title,
            abstract_text: request.abstract_text,
            date: request.date,
            status: request.status,
            affiliation: request.affiliation,
            publication: request.publication,
            doi: request.doi,
            author_ids: request.author_ids,
            tag_names: request.tag_names,
        })
        .await?;

    metrics::record_created("papers");
    tracing::info!(
        paper_id = paper.paper.id,
        title = %paper.paper.title,
        "Paper created"
    );

    Ok((StatusCode::CREATED, Json(paper)))
}

/// Apply a partial update, replacing author/tag joins when requested
pub async fn update_paper(
    State(state): State<AppState>,
    Path(paper_id): Path<i32>,
    Json(request): Json<UpdatePaperRequest>,
) -> Result<Json<PaperGraph>> {
    let repo = Repository::new(state.db.clone());

    let paper = repo
        .update_paper(
            paper_id,
            PaperChanges {
                title: request.title,
                abstract_text: request.abstract_text,
                date: request.date,
                author_ids: request.author_ids,
                tag_names: request.tag_names,
            },
        )
        .await?;

    tracing::info!(paper_id, "Paper updated");

    Ok(Json(paper))
}

/// Create a user
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>)> {
    let email = request.email.filter(|e| !e.is_empty()).ok_or_else(|| {
        AppError::MissingField {
            field: "email".to_string(),
        }
    })?;
    let password = request.password.filter(|p| !p.is_empty()).ok_or_else(|| {
        AppError::MissingField {
            field: "password".to_string(),
        }
    })?;

    let repo = Repository::new(state.db.clone());

    let user = repo
        .create_user(NewUser {
            name: request.name,
            email,
            password_hash: Some(hash_password(&password)?),
            role: request.role.unwrap_or_else(|| DEFAULT_USER_ROLE.to_string()),
            position: request.position,
            department: request.department,
        })
        .await?;

    metrics::record_created("users");
    tracing::info!(user_id = user.id, email = %user.email, "User created");

    Ok((StatusCode::CREATED, Json(user)))
}

/// Delete a paper; join rows and files cascade
pub async fn delete_paper(
    State(state): State<AppState>,
    Path(paper_id): Path<i32>,
) -> Result<StatusCode> {
    let repo = Repository::new(state.db.clone());

    if !repo.delete_paper(paper_id).await? {
        return Err(AppError::PaperNotFound {
            id: paper_id.to_string(),
        });
    }

    metrics::record_paper_deleted();
    tracing::info!(paper_id, "Paper deleted");

    Ok(StatusCode::NO_CONTENT)
}
