//! Authentication extractors for Axum

use async_trait::async_trait;
use axum::{
    extract::{Extension, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::warn;

use crate::common::{helpers::safe_token_log, ApiError, AppState};

/// Authenticated user extractor
///
/// Validates the bearer token from the Authorization header against the
/// process-wide token service. Admission is decided from the token alone;
/// no store lookup happens here.
#[derive(Debug)]
pub struct AuthedUser {
    pub id: String,
    pub username: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthedUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(state_lock): Extension<Arc<RwLock<AppState>>> =
            Extension::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::InternalServer("missing app state".to_string()))?;

        let app_state = state_lock.read().await.clone();

        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .map(|s| s.to_string());

        let token = match token {
            Some(t) => t,
            None => {
                warn!("Authentication failed: missing Authorization header");
                return Err(ApiError::Unauthorized("missing auth".into()));
            }
        };

        // Handle "Bearer <token>" format or raw token
        let bare_token = if let Some(rest) = token.strip_prefix("Bearer ") {
            rest.to_string()
        } else {
            token
        };

        let claims = app_state.tokens.verify(&bare_token).map_err(|e| {
            warn!(error = %e, token = %safe_token_log(&bare_token), "Bearer token validation failed");
            ApiError::from(e)
        })?;

        Ok(AuthedUser {
            id: claims.sub,
            username: claims.username,
        })
    }
}
