use super::handlers;
use axum::{
    routing::{get, post},
    Router,
};

/// Creates the users router with all user-related routes
pub fn users_routes() -> Router {
    Router::new()
        .route(
            "/users",
            get(handlers::get_users).post(handlers::create_user),
        )
        .route("/users/social", post(handlers::create_social_user))
        .route(
            "/users/:id",
            get(handlers::get_user_by_id)
                .put(handlers::update_user)
                .delete(handlers::delete_user),
        )
}
