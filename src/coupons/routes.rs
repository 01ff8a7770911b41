use super::handlers;
use axum::{
    routing::{get, patch, post, put},
    Router,
};

/// Creates the coupons router with all coupon-related routes
pub fn coupons_routes() -> Router {
    Router::new()
        .route("/coupons", get(handlers::get_coupons))
        .route("/coupons/add", post(handlers::add_coupon))
        .route("/coupons/add/all", post(handlers::add_all_coupons))
        .route("/coupons/delete/many", patch(handlers::delete_many_coupons))
        .route("/coupons/update/many", patch(handlers::update_many_coupons))
        .route("/coupons/status/:id", put(handlers::toggle_status))
        .route(
            "/coupons/:id",
            get(handlers::get_coupon_by_id)
                .put(handlers::update_coupon)
                .delete(handlers::delete_coupon),
        )
}
