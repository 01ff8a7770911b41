use super::handlers;
use axum::{
    routing::{get, patch, put},
    Router,
};

/// Creates the testimonials router with all testimonial-related routes
pub fn testimonials_routes() -> Router {
    Router::new()
        .route(
            "/testimonials",
            get(handlers::get_testimonials).post(handlers::create_testimonial),
        )
        .route(
            "/testimonials/delete/many",
            patch(handlers::delete_many_testimonials),
        )
        .route(
            "/testimonials/update/many",
            patch(handlers::update_many_testimonials),
        )
        .route("/testimonials/status/:id", put(handlers::toggle_status))
        .route(
            "/testimonials/:id",
            get(handlers::get_testimonial_by_id)
                .put(handlers::update_testimonial)
                .delete(handlers::delete_testimonial),
        )
}
