use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Attribute {
    pub id: String,
    pub title: String,
    pub name: Option<String>,
    pub option: Option<String>,
    pub lang: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateAttributeRequest {
    pub title: String,
    pub name: Option<String>,
    pub option: Option<String>,
    pub lang: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAttributeRequest {
    pub title: Option<String>,
    pub name: Option<String>,
    pub option: Option<String>,
    pub lang: Option<String>,
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
