use super::models::{BulkStatusRequest, CreateCountryRequest, MessageResponse, UpdateCountryRequest};
use super::services::CountriesService;
use crate::common::{ApiError, AppState};
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;

/// GET /countries - Get all countries
pub async fn get_countries(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = CountriesService::new(app_state.db.clone());

    let countries = service.get_all_countries().await?;

    Ok(Json(countries))
}

/// GET /countries/:id - Get country by ID
pub async fn get_country_by_id(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(country_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = CountriesService::new(app_state.db.clone());

    let country = service.get_country_by_id(&country_id).await?;

    Ok(Json(country))
}

/// POST /countries - Create a new country
pub async fn create_country(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Json(request): Json<CreateCountryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = CountriesService::new(app_state.db.clone());

    let country = service.create_country(request).await?;

    Ok((StatusCode::CREATED, Json(country)))
}

/// PUT /countries/:id - Update country
pub async fn update_country(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(country_id): Path<String>,
    Json(request): Json<UpdateCountryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = CountriesService::new(app_state.db.clone());

    let country = service.update_country(&country_id, request).await?;

    Ok(Json(country))
}

/// DELETE /countries/:id - Delete country, returning the deleted record
pub async fn delete_country(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(country_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = CountriesService::new(app_state.db.clone());

    let country = service.delete_country(&country_id).await?;

    Ok(Json(country))
}

/// PATCH /countries/delete/many - Delete a batch of countries by ID
pub async fn delete_many_countries(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Json(ids): Json<Vec<String>>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = CountriesService::new(app_state.db.clone());

    let countries = service.delete_many_countries(&ids).await?;

    Ok(Json(countries))
}

/// PATCH /countries/update/many - Set the status of a batch of countries
pub async fn update_many_countries(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Json(request): Json<BulkStatusRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = CountriesService::new(app_state.db.clone());

    service
        .update_many_countries(&request.ids, &request.status)
        .await?;

    Ok(Json(MessageResponse {
        message: "Countries updated successfully".to_string(),
    }))
}

/// PUT /countries/status/:id - Toggle country between show and hide
pub async fn toggle_status(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(country_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let service = CountriesService::new(app_state.db.clone());

    let country = service.toggle_status(&country_id).await?;

    Ok(Json(country))
}
