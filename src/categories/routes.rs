use super::handlers;
use axum::{
    routing::{get, patch, put},
    Router,
};

/// Creates the categories router with all category-related routes
pub fn categories_routes() -> Router {
    Router::new()
        .route(
            "/categories",
            get(handlers::get_categories).post(handlers::create_category),
        )
        .route(
            "/categories/delete/many",
            patch(handlers::delete_many_categories),
        )
        .route(
            "/categories/update/many",
            patch(handlers::update_many_categories),
        )
        .route("/categories/status/:id", put(handlers::toggle_status))
        .route(
            "/categories/:id",
            get(handlers::get_category_by_id)
                .put(handlers::update_category)
                .delete(handlers::delete_category),
        )
}
