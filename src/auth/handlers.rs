//! Authentication handlers

use axum::extract::{Extension, Json};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use super::models::{LoginRequest, LoginResponse};
use crate::common::{safe_email_log, ApiError, AppState};
use crate::users::UsersService;

/// POST /login
/// Authenticates a user via email and password and issues a bearer token
///
/// # Request Body
/// ```json
/// {
///   "email": "a@b.com",
///   "password": "secret"
/// }
/// ```
///
/// # Response
/// ```json
/// {
///   "message": "Welcome to the Milky Way! ...",
///   "accessToken": "<jwt token>"
/// }
/// ```
pub async fn login(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    // Caller error, checked before any store access
    if payload.email.is_empty() || payload.password.is_empty() {
        warn!("Login rejected: email or password missing");
        return Err(ApiError::BadRequest(
            "Email and password are required".to_string(),
        ));
    }

    let state = state_lock.read().await.clone();

    let users = UsersService::new(state.db.clone());
    let user = users
        .verify_credentials(&payload.email, &payload.password)
        .await?;

    let username = user.username.clone().unwrap_or_default();
    let access_token = state.tokens.issue(&user.id, &username)?;

    info!(
        user_id = %user.id,
        email = %safe_email_log(&payload.email),
        "Login successful, token issued"
    );

    Ok(Json(LoginResponse {
        message: "Welcome to the Milky Way! Here is your access token. have it and enjoy routings"
            .to_string(),
        access_token,
    }))
}
