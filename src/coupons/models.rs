use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Coupon {
    pub id: String,
    pub title: String,
    pub coupon_code: String,
    /// RFC 3339 timestamp after which the coupon is no longer redeemable
    pub end_time: String,
    pub discount_percentage: f64,
    pub minimum_amount: f64,
    pub product_type: Option<String>,
    pub logo: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateCouponRequest {
    pub title: String,
    pub coupon_code: String,
    pub end_time: String,
    pub discount_percentage: f64,
    pub minimum_amount: f64,
    pub product_type: Option<String>,
    pub logo: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCouponRequest {
    pub title: Option<String>,
    pub coupon_code: Option<String>,
    pub end_time: Option<String>,
    pub discount_percentage: Option<f64>,
    pub minimum_amount: Option<f64>,
    pub product_type: Option<String>,
    pub logo: Option<String>,
    pub status: Option<String>,
}

/// Body of PATCH /coupons/update/many: a batch of ids plus the field patch
/// applied to every one of them
#[derive(Debug, Deserialize)]
pub struct BulkUpdateCouponsRequest {
    pub ids: Vec<String>,
    pub updated_fields: UpdateCouponRequest,
}

/// Body of PUT /coupons/status/:id
#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    pub status: Option<String>,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}
