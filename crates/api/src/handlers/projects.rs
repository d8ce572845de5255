//! Project handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::AppState;
use labarchive_common::{
    db::{NewProject, ProjectGraph, Repository},
    errors::{AppError, Result},
    metrics,
};

/// Request to create a project
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProjectRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: String,

    #[serde(default)]
    pub summary: String,

    pub start_date: Option<NaiveDate>,

    pub end_date: Option<NaiveDate>,

    pub owner_id: Option<i32>,

    #[serde(default)]
    pub tag_names: Vec<String>,
}

impl CreateProjectRequest {
    /// Validate and convert into repository input
    pub fn into_new_project(self) -> Result<NewProject> {
        self.validate().map_err(|e| AppError::Validation {
            message: e.to_string(),
            field: None,
        })?;

        Ok(NewProject {
            title: self.title,
            summary: self.summary,
            start_date: self.start_date,
            end_date: self.end_date,
            owner_id: self.owner_id,
            tag_names: self.tag_names,
        })
    }
}

/// List all projects with owner, tags, and media
pub async fn list_projects(State(state): State<AppState>) -> Result<Json<Vec<ProjectGraph>>> {
    let repo = Repository::new(state.db.clone());
    Ok(Json(repo.list_projects().await?))
}

/// Get one project
pub async fn get_project(
    State(state): State<AppState>,
    Path(project_id): Path<i32>,
) -> Result<Json<ProjectGraph>> {
    let repo = Repository::new(state.db.clone());

    let project = repo
        .get_project(project_id)
        .await?
        .ok_or_else(|| AppError::ProjectNotFound {
            id: project_id.to_string(),
        })?;

    Ok(Json(project))
}

/// Create a project
pub async fn create_project(
    State(state): State<AppState>,
    Json(request): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<ProjectGraph>)> {
    let repo = Repository::new(state.db.clone());

    let project = repo.create_project(request.into_new_project()?).await?;

    metrics::record_created("projects");
    tracing::info!(
        project_id = project.project.id,
        title = %project.project.title,
        "Project created"
    );

    Ok((StatusCode::CREATED, Json(project)))
}
