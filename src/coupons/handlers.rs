use super::models::{
    BulkUpdateCouponsRequest, CreateCouponRequest, MessageResponse, StatusRequest,
    UpdateCouponRequest,
};
use super::services::CouponsService;
use crate::common::{ApiError, AppState};
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;

/// GET /coupons - Get all coupons
pub async fn get_coupons(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = CouponsService::new(app_state.db.clone());

    let coupons = service.get_all_coupons().await?;

    Ok(Json(coupons))
}

/// GET /coupons/:id - Get coupon by ID
pub async fn get_coupon_by_id(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(coupon_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = CouponsService::new(app_state.db.clone());

    let coupon = service.get_coupon_by_id(&coupon_id).await?;

    Ok(Json(coupon))
}

/// POST /coupons/add - Create a new coupon
pub async fn add_coupon(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Json(request): Json<CreateCouponRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = CouponsService::new(app_state.db.clone());

    let coupon = service.add_coupon(request).await?;

    Ok((StatusCode::CREATED, Json(coupon)))
}

/// POST /coupons/add/all - Create a batch of coupons in one request
pub async fn add_all_coupons(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Json(requests): Json<Vec<CreateCouponRequest>>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = CouponsService::new(app_state.db.clone());

    let count = service.add_all_coupons(requests).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: format!("{} coupons added successfully", count),
        }),
    ))
}

/// PUT /coupons/:id - Update coupon
pub async fn update_coupon(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(coupon_id): Path<String>,
    Json(request): Json<UpdateCouponRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = CouponsService::new(app_state.db.clone());

    let coupon = service.update_coupon(&coupon_id, request).await?;

    Ok(Json(coupon))
}

/// PATCH /coupons/update/many - Apply a field patch to a batch of coupons
pub async fn update_many_coupons(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Json(request): Json<BulkUpdateCouponsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = CouponsService::new(app_state.db.clone());

    service
        .update_many_coupons(&request.ids, request.updated_fields)
        .await?;

    Ok(Json(MessageResponse {
        message: "Coupons updated successfully".to_string(),
    }))
}

/// PUT /coupons/status/:id - Toggle coupon between show and hide
pub async fn toggle_status(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(coupon_id): Path<String>,
    Json(request): Json<StatusRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = CouponsService::new(app_state.db.clone());

    let coupon = service.toggle_status(&coupon_id, request.status).await?;

    Ok(Json(coupon))
}

/// DELETE /coupons/:id - Delete coupon, returning the deleted record
pub async fn delete_coupon(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(coupon_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = CouponsService::new(app_state.db.clone());

    let coupon = service.delete_coupon(&coupon_id).await?;

    Ok(Json(coupon))
}

/// PATCH /coupons/delete/many - Delete a batch of coupons by ID
pub async fn delete_many_coupons(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Json(ids): Json<Vec<String>>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = CouponsService::new(app_state.db.clone());

    let coupons = service.delete_many_coupons(&ids).await?;

    Ok(Json(coupons))
}
