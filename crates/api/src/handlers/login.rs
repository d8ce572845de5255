//! Login handler
//!
//! Verifies credentials and issues the JWT consumed by the route guards.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::AppState;
use labarchive_common::{
    auth::verify_password,
    db::Repository,
    errors::{AppError, Result},
    metrics,
};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user_id: i32,
    pub role: String,
}

/// Authenticate a user and issue a bearer token
///
/// Unknown email, missing hash, and wrong password all produce the same
/// response so credential probing learns nothing.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
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

    let rejected = || {
        metrics::record_login(false);
        AppError::Unauthorized {
            message: "Invalid email or password.".to_string(),
        }
    };

    let user = repo
        .find_user_by_email(&email)
        .await?
        .ok_or_else(rejected)?;

    let hash = user.password_hash.as_deref().ok_or_else(rejected)?;
    if !verify_password(&password, hash) {
        return Err(rejected());
    }

    let token = state.jwt.generate_token(user.id, &user.email, &user.role)?;

    metrics::record_login(true);
    tracing::info!(user_id = user.id, email = %user.email, "User logged in");

    Ok(Json(LoginResponse {
        token,
        user_id: user.id,
        role: user.role,
    }))
}
