use super::models::{
    BulkStatusRequest, CreateTestimonialRequest, MessageResponse, UpdateTestimonialRequest,
};
use super::services::TestimonialsService;
use crate::common::{ApiError, AppState};
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;

/// GET /testimonials - Get all testimonials
pub async fn get_testimonials(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = TestimonialsService::new(app_state.db.clone());

    let testimonials = service.get_all_testimonials().await?;

    Ok(Json(testimonials))
}

/// GET /testimonials/:id - Get testimonial by ID
pub async fn get_testimonial_by_id(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(testimonial_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = TestimonialsService::new(app_state.db.clone());

    let testimonial = service.get_testimonial_by_id(&testimonial_id).await?;

    Ok(Json(testimonial))
}

/// POST /testimonials - Create a new testimonial
pub async fn create_testimonial(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Json(request): Json<CreateTestimonialRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = TestimonialsService::new(app_state.db.clone());

    let testimonial = service.create_testimonial(request).await?;

    Ok((StatusCode::CREATED, Json(testimonial)))
}

/// PUT /testimonials/:id - Update testimonial
pub async fn update_testimonial(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(testimonial_id): Path<String>,
    Json(request): Json<UpdateTestimonialRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = TestimonialsService::new(app_state.db.clone());

    let testimonial = service
        .update_testimonial(&testimonial_id, request)
        .await?;

    Ok(Json(testimonial))
}

/// DELETE /testimonials/:id - Delete testimonial, returning the deleted record
pub async fn delete_testimonial(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(testimonial_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = TestimonialsService::new(app_state.db.clone());

    let testimonial = service.delete_testimonial(&testimonial_id).await?;

    Ok(Json(testimonial))
}

/// PATCH /testimonials/delete/many - Delete a batch of testimonials by ID
pub async fn delete_many_testimonials(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Json(ids): Json<Vec<String>>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = TestimonialsService::new(app_state.db.clone());

    let testimonials = service.delete_many_testimonials(&ids).await?;

    Ok(Json(testimonials))
}

/// PATCH /testimonials/update/many - Set the status of a batch of testimonials
pub async fn update_many_testimonials(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Json(request): Json<BulkStatusRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = TestimonialsService::new(app_state.db.clone());

    service
        .update_many_testimonials(&request.ids, &request.status)
        .await?;

    Ok(Json(MessageResponse {
        message: "Testimonials updated successfully".to_string(),
    }))
}

/// PUT /testimonials/status/:id - Toggle testimonial between show and hide
pub async fn toggle_status(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(testimonial_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = TestimonialsService::new(app_state.db.clone());

    let testimonial = service.toggle_status(&testimonial_id).await?;

    Ok(Json(testimonial))
}
