//! Authentication routes

use axum::{routing::post, Router};

use super::handlers;

/// Creates and returns the authentication router
///
/// # Routes
/// - `POST /login` - Email/password login, returns a bearer token
pub fn auth_routes() -> Router {
    Router::new().route("/login", post(handlers::login))
}
