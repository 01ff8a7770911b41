use super::handlers;
use axum::{
    routing::{get, patch, put},
    Router,
};

/// Creates the brands router with all brand-related routes
pub fn brands_routes() -> Router {
    Router::new()
        .route(
            "/brands",
            get(handlers::get_brands).post(handlers::create_brand),
        )
        .route("/brands/delete/many", patch(handlers::delete_many_brands))
        .route("/brands/update/many", patch(handlers::update_many_brands))
        .route("/brands/status/:id", put(handlers::toggle_status))
        .route(
            "/brands/:id",
            get(handlers::get_brand_by_id)
                .put(handlers::update_brand)
                .delete(handlers::delete_brand),
        )
}
