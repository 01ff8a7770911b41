use super::models::{BulkStatusRequest, CreateBrandRequest, MessageResponse, UpdateBrandRequest};
use super::services::BrandsService;
use crate::common::{ApiError, AppState};
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;

/// GET /brands - Get all brands
pub async fn get_brands(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = BrandsService::new(app_state.db.clone());

    let brands = service.get_all_brands().await?;

    Ok(Json(brands))
}

/// GET /brands/:id - Get brand by ID
pub async fn get_brand_by_id(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(brand_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = BrandsService::new(app_state.db.clone());

    let brand = service.get_brand_by_id(&brand_id).await?;

    Ok(Json(brand))
}

/// POST /brands - Create a new brand
pub async fn create_brand(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Json(request): Json<CreateBrandRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = BrandsService::new(app_state.db.clone());

    let brand = service.create_brand(request).await?;

    Ok((StatusCode::CREATED, Json(brand)))
}

/// PUT /brands/:id - Update brand
pub async fn update_brand(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(brand_id): Path<String>,
    Json(request): Json<UpdateBrandRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = BrandsService::new(app_state.db.clone());

    let brand = service.update_brand(&brand_id, request).await?;

    Ok(Json(brand))
}

/// DELETE /brands/:id - Delete brand, returning the deleted record
pub async fn delete_brand(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(brand_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = BrandsService::new(app_state.db.clone());

    let brand = service.delete_brand(&brand_id).await?;

    Ok(Json(brand))
}

/// PATCH /brands/delete/many - Delete a batch of brands by ID
pub async fn delete_many_brands(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Json(ids): Json<Vec<String>>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = BrandsService::new(app_state.db.clone());

    let brands = service.delete_many_brands(&ids).await?;

    Ok(Json(brands))
}

/// PATCH /brands/update/many - Set the status of a batch of brands
pub async fn update_many_brands(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Json(request): Json<BulkStatusRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = BrandsService::new(app_state.db.clone());

    service
        .update_many_brands(&request.ids, &request.status)
        .await?;

    Ok(Json(MessageResponse {
        message: "Brands updated successfully".to_string(),
    }))
}

/// PUT /brands/status/:id - Toggle brand between show and hide
pub async fn toggle_status(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(brand_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = BrandsService::new(app_state.db.clone());

    let brand = service.toggle_status(&brand_id).await?;

    Ok(Json(brand))
}
