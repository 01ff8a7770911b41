use super::handlers;
use axum::{
    routing::{delete, get, patch},
    Router,
};

/// Creates the attributes router with all attribute-related routes
pub fn attributes_routes() -> Router {
    Router::new()
        .route(
            "/attributes",
            get(handlers::get_attributes).post(handlers::add_attribute),
        )
        .route(
            "/attributes/delete/many",
            delete(handlers::delete_many_attributes),
        )
        .route(
            "/attributes/update/many",
            patch(handlers::update_many_attributes),
        )
        .route(
            "/attributes/:id",
            get(handlers::get_attribute_by_id)
                .put(handlers::update_attribute)
                .delete(handlers::delete_attribute),
        )
}
