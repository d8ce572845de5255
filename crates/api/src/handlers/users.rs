//! User handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::handlers::projects::CreateProjectRequest;
use crate::AppState;
use labarchive_common::{
    db::{ProjectGraph, Repository, UserDetail},
    errors::{AppError, Result},
    metrics,
};

/// Listing projection: no email, no hash
#[derive(Serialize)]
pub struct UserSummary {
    pub id: i32,
    pub name: Option<String>,
    pub role: String,
    pub department: Option<String>,
    pub created_at: String,
}

/// List all users, newest first
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserSummary>>> {
    let repo = Repository::new(state.db.clone());

    let users = repo
        .list_users()
        .await?
        .into_iter()
        .map(|user| UserSummary {
            id: user.id,
            name: user.name,
            role: user.role,
            department: user.department,
            created_at: user.created_at.to_rfc3339(),
        })
        .collect();

    Ok(Json(users))
}

/// Get one user with authored papers and owned projects
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<UserDetail>> {
    let repo = Repository::new(state.db.clone());

    let detail = repo
        .user_detail(user_id)
        .await?
        .ok_or_else(|| AppError::UserNotFound {
            id: user_id.to_string(),
        })?;

    Ok(Json(detail))
}

/// Create a project on behalf of a user
pub async fn create_user_project(
    State(state): State<AppState>,
    Json(request): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<ProjectGraph>)> {
    let repo = Repository::new(state.db.clone());

    let project = repo.create_project(request.into_new_project()?).await?;

    metrics::record_created("projects");
    tracing::info!(
        project_id = project.project.id,
        owner_id = ?project.project.owner_id,
        "Project created for user"
    );

    Ok((StatusCode::CREATED, Json(project)))
}
