use super::models::{CreateSocialUserRequest, CreateUserRequest, UpdateUserRequest};
use super::services::UsersService;
use crate::auth::AuthedUser;
use crate::common::{ApiError, AppState};
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// POST /users - Register a new account
pub async fn create_user(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Json(request): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let users_service = UsersService::new(app_state.db.clone());

    let user = users_service.create_user(request).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// POST /users/social - Register or fetch an account from a social identity
pub async fn create_social_user(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Json(request): Json<CreateSocialUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let users_service = UsersService::new(app_state.db.clone());

    let user = users_service.create_social_user(request).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /users - Get all users (requires bearer token)
pub async fn get_users(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    user: AuthedUser,
) -> Result<impl IntoResponse, ApiError> {
    debug!(user_id = %user.id, username = %user.username, "Listing users");

    let app_state = state.read().await;
    let users_service = UsersService::new(app_state.db.clone());

    let users = users_service.get_all_users().await?;

    Ok(Json(users))
}

/// GET /users/:id - Get user by ID
pub async fn get_user_by_id(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let users_service = UsersService::new(app_state.db.clone());

    let user = users_service.get_user_by_id(&user_id).await?;

    Ok(Json(user))
}

/// PUT /users/:id - Update user
pub async fn update_user(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(user_id): Path<String>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let users_service = UsersService::new(app_state.db.clone());

    let user = users_service.update_user(&user_id, request).await?;

    Ok(Json(user))
}

/// DELETE /users/:id - Delete user
pub async fn delete_user(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let users_service = UsersService::new(app_state.db.clone());

    let user = users_service.delete_user(&user_id).await?;

    Ok(Json(user))
}
