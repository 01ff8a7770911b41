use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub title: Option<String>,
    pub message: Option<String>,
    pub rating: Option<i64>,
    pub avatar: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateTestimonialRequest {
    pub name: String,
    pub title: Option<String>,
    pub message: Option<String>,
    pub rating: Option<i64>,
    pub avatar: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTestimonialRequest {
    pub name: Option<String>,
    pub title: Option<String>,
    pub message: Option<String>,
    pub rating: Option<i64>,
    pub avatar: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BulkStatusRequest {
    pub ids: Vec<String>,
    pub status: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}
