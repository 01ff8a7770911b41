use super::models::{BulkStatusRequest, CreateCategoryRequest, MessageResponse, UpdateCategoryRequest};
use super::services::CategoriesService;
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

/// GET /categories - Get all categories (requires bearer token)
pub async fn get_categories(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    user: AuthedUser,
) -> Result<impl IntoResponse, ApiError> {
    debug!(user_id = %user.id, "Listing categories");

    let app_state = state.read().await;
    let service = CategoriesService::new(app_state.db.clone());

    let categories = service.get_all_categories().await?;

    Ok(Json(categories))
}

/// GET /categories/:id - Get category by ID
pub async fn get_category_by_id(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(category_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = CategoriesService::new(app_state.db.clone());

    let category = service.get_category_by_id(&category_id).await?;

    Ok(Json(category))
}

/// POST /categories - Create a new category
pub async fn create_category(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Json(request): Json<CreateCategoryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = CategoriesService::new(app_state.db.clone());

    let category = service.create_category(request).await?;

    Ok((StatusCode::CREATED, Json(category)))
}

/// PUT /categories/:id - Update category
pub async fn update_category(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(category_id): Path<String>,
    Json(request): Json<UpdateCategoryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = CategoriesService::new(app_state.db.clone());

    let category = service.update_category(&category_id, request).await?;

    Ok(Json(category))
}

/// DELETE /categories/:id - Delete category, returning the deleted record
pub async fn delete_category(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(category_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = CategoriesService::new(app_state.db.clone());

    let category = service.delete_category(&category_id).await?;

    Ok(Json(category))
}

/// PATCH /categories/delete/many - Delete a batch of categories by ID
pub async fn delete_many_categories(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Json(ids): Json<Vec<String>>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = CategoriesService::new(app_state.db.clone());

    let categories = service.delete_many_categories(&ids).await?;

    Ok(Json(categories))
}

/// PATCH /categories/update/many - Set the status of a batch of categories
pub async fn update_many_categories(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Json(request): Json<BulkStatusRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = CategoriesService::new(app_state.db.clone());

    service
        .update_many_categories(&request.ids, &request.status)
        .await?;

    Ok(Json(MessageResponse {
        message: "Categories updated successfully".to_string(),
    }))
}

/// PUT /categories/status/:id - Toggle category between show and hide
pub async fn toggle_status(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(category_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = CategoriesService::new(app_state.db.clone());

    let category = service.toggle_status(&category_id).await?;

    Ok(Json(category))
}
