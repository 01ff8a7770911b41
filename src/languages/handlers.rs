use super::models::{BulkStatusRequest, CreateLanguageRequest, MessageResponse, UpdateLanguageRequest};
use super::services::LanguagesService;
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

/// GET /languages - Get all languages (requires bearer token)
pub async fn get_languages(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    user: AuthedUser,
) -> Result<impl IntoResponse, ApiError> {
    debug!(user_id = %user.id, "Listing languages");

    let app_state = state.read().await;
    let service = LanguagesService::new(app_state.db.clone());

    let languages = service.get_all_languages().await?;

    Ok(Json(languages))
}

/// GET /languages/:id - Get language by ID
pub async fn get_language_by_id(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(language_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = LanguagesService::new(app_state.db.clone());

    let language = service.get_language_by_id(&language_id).await?;

    Ok(Json(language))
}

/// POST /languages - Create a new language
pub async fn create_language(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Json(request): Json<CreateLanguageRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = LanguagesService::new(app_state.db.clone());

    let language = service.create_language(request).await?;

    Ok((StatusCode::CREATED, Json(language)))
}

/// PUT /languages/:id - Update language
pub async fn update_language(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(language_id): Path<String>,
    Json(request): Json<UpdateLanguageRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = LanguagesService::new(app_state.db.clone());

    let language = service.update_language(&language_id, request).await?;

    Ok(Json(language))
}

/// DELETE /languages/:id - Delete language, returning the deleted record
pub async fn delete_language(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(language_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = LanguagesService::new(app_state.db.clone());

    let language = service.delete_language(&language_id).await?;

    Ok(Json(language))
}

/// DELETE /languages/delete/many - Delete a batch of languages by ID
pub async fn delete_many_languages(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Json(ids): Json<Vec<String>>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = LanguagesService::new(app_state.db.clone());

    let languages = service.delete_many_languages(&ids).await?;

    Ok(Json(languages))
}

/// PATCH /languages/update/many - Set the status of a batch of languages
pub async fn update_many_languages(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Json(request): Json<BulkStatusRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = LanguagesService::new(app_state.db.clone());

    service
        .update_many_languages(&request.ids, &request.status)
        .await?;

    Ok(Json(MessageResponse {
        message: "Languages updated successfully".to_string(),
    }))
}

/// PUT /languages/status/:id - Toggle language between show and hide
pub async fn toggle_status(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(language_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = LanguagesService::new(app_state.db.clone());

    let language = service.toggle_status(&language_id).await?;

    Ok(Json(language))
}
