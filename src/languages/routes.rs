use super::handlers;
use axum::{
    routing::{delete, get, patch, put},
    Router,
};

/// Creates the languages router with all language-related routes
pub fn languages_routes() -> Router {
    Router::new()
        .route(
            "/languages",
            get(handlers::get_languages).post(handlers::create_language),
        )
        .route(
            "/languages/delete/many",
            delete(handlers::delete_many_languages),
        )
        .route(
            "/languages/update/many",
            patch(handlers::update_many_languages),
        )
        .route("/languages/status/:id", put(handlers::toggle_status))
        .route(
            "/languages/:id",
            get(handlers::get_language_by_id)
                .put(handlers::update_language)
                .delete(handlers::delete_language),
        )
}
