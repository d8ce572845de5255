//! Admin dashboard handler
//!
//! Mounted behind `require_auth` + `require_admin`.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;
use labarchive_common::{
    auth::AuthUser,
    db::models::{Paper, User},
    db::Repository,
    errors::Result,
};

#[derive(Serialize)]
pub struct DashboardResponse {
    pub users: Vec<User>,
    pub papers: Vec<Paper>,
}

/// Admin-only dashboard: every user and paper in the catalog
pub async fn dashboard(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
) -> Result<Json<DashboardResponse>> {
    let repo = Repository::new(state.db.clone());

    let users = repo.list_users().await?;
    let papers = repo.list_papers_plain().await?;

    tracing::debug!(admin = %claims.email, "Dashboard fetched");

    Ok(Json(DashboardResponse { users, papers }))
}
