use super::models::{
    BulkStatusRequest, CreateAttributeRequest, MessageResponse, UpdateAttributeRequest,
};
use super::services::AttributesService;
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

/// GET /attributes - Get all attributes (requires bearer token)
pub async fn get_attributes(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    user: AuthedUser,
) -> Result<impl IntoResponse, ApiError> {
    debug!(user_id = %user.id, "Listing attributes");

    let app_state = state.read().await;
    let service = AttributesService::new(app_state.db.clone());

    let attributes = service.get_all_attributes().await?;

    Ok(Json(attributes))
}

/// GET /attributes/:id - Get attribute by ID
pub async fn get_attribute_by_id(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(attribute_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = AttributesService::new(app_state.db.clone());

    let attribute = service.get_attribute_by_id(&attribute_id).await?;

    Ok(Json(attribute))
}

/// POST /attributes - Create a new attribute
pub async fn add_attribute(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Json(request): Json<CreateAttributeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = AttributesService::new(app_state.db.clone());

    let attribute = service.add_attribute(request).await?;

    Ok((StatusCode::CREATED, Json(attribute)))
}

/// PUT /attributes/:id - Update attribute
pub async fn update_attribute(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(attribute_id): Path<String>,
    Json(request): Json<UpdateAttributeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = AttributesService::new(app_state.db.clone());

    let attribute = service.update_attribute(&attribute_id, request).await?;

    Ok(Json(attribute))
}

/// DELETE /attributes/:id - Delete attribute, returning the deleted record
pub async fn delete_attribute(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(attribute_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = AttributesService::new(app_state.db.clone());

    let attribute = service.delete_attribute(&attribute_id).await?;

    Ok(Json(attribute))
}

/// DELETE /attributes/delete/many - Delete a batch of attributes by ID
pub async fn delete_many_attributes(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Json(ids): Json<Vec<String>>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = AttributesService::new(app_state.db.clone());

    let attributes = service.delete_many_attributes(&ids).await?;

    Ok(Json(attributes))
}

/// PATCH /attributes/update/many - Set the status of a batch of attributes
pub async fn update_many_attributes(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Json(request): Json<BulkStatusRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = AttributesService::new(app_state.db.clone());

    service
        .update_many_attributes(&request.ids, &request.status)
        .await?;

    Ok(Json(MessageResponse {
        message: "Attributes updated successfully".to_string(),
    }))
}
