use super::handlers;
use axum::{
    routing::{get, patch, put},
    Router,
};

/// Creates the countries router with all country-related routes
pub fn countries_routes() -> Router {
    Router::new()
        .route(
            "/countries",
            get(handlers::get_countries).post(handlers::create_country),
        )
        .route(
            "/countries/delete/many",
            patch(handlers::delete_many_countries),
        )
        .route(
            "/countries/update/many",
            patch(handlers::update_many_countries),
        )
        .route("/countries/status/:id", put(handlers::toggle_status))
        .route(
            "/countries/:id",
            get(handlers::get_country_by_id)
                .put(handlers::update_country)
                .delete(handlers::delete_country),
        )
}
