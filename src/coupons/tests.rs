//! Tests for coupons module

#[cfg(test)]
mod tests {
    use super::super::models::{CreateCouponRequest, UpdateCouponRequest};
    use super::super::services::CouponsService;
    use crate::common::{migrations, ApiError};
    use sqlx::sqlite::SqlitePoolOptions;
    use sqlx::SqlitePool;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("failed to open in-memory database");
        migrations::run_migrations(&pool)
            .await
            .expect("migrations failed");
        pool
    }

    fn request(title: &str, code: &str) -> CreateCouponRequest {
        CreateCouponRequest {
            title: title.to_string(),
            coupon_code: code.to_string(),
            end_time: "2026-12-31T23:59:59Z".to_string(),
            discount_percentage: 15.0,
            minimum_amount: 100.0,
            product_type: Some("clothing".to_string()),
            logo: None,
            status: None,
        }
    }

    fn empty_patch() -> UpdateCouponRequest {
        UpdateCouponRequest {
            title: None,
            coupon_code: None,
            end_time: None,
            discount_percentage: None,
            minimum_amount: None,
            product_type: None,
            logo: None,
            status: None,
        }
    }

    #[tokio::test]
    async fn test_add_and_fetch_coupon() {
        let pool = test_pool().await;
        let service = CouponsService::new(pool);

        let created = service
            .add_coupon(request("Summer Sale", "SUMMER15"))
            .await
            .expect("create failed");
        assert_eq!(created.coupon_code, "SUMMER15");
        assert_eq!(created.discount_percentage, 15.0);
        assert_eq!(created.status.as_deref(), Some("show"));

        let fetched = service
            .get_coupon_by_id(&created.id)
            .await
            .expect("fetch failed");
        assert_eq!(fetched.id, created.id);
    }

    #[tokio::test]
    async fn test_add_all_inserts_every_coupon() {
        let pool = test_pool().await;
        let service = CouponsService::new(pool);

        let count = service
            .add_all_coupons(vec![
                request("Summer Sale", "SUMMER15"),
                request("Winter Sale", "WINTER20"),
                request("Clearance", "CLEAR50"),
            ])
            .await
            .expect("bulk insert failed");
        assert_eq!(count, 3);

        let all = service.get_all_coupons().await.expect("list failed");
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn test_add_all_rejects_empty_batch() {
        let pool = test_pool().await;
        let service = CouponsService::new(pool);

        let err = service
            .add_all_coupons(Vec::new())
            .await
            .expect_err("empty batch accepted");
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_update_coupon_partial() {
        let pool = test_pool().await;
        let service = CouponsService::new(pool);

        let created = service
            .add_coupon(request("Summer Sale", "SUMMER15"))
            .await
            .expect("create failed");

        let mut patch = empty_patch();
        patch.discount_percentage = Some(25.0);
        let updated = service
            .update_coupon(&created.id, patch)
            .await
            .expect("update failed");

        assert_eq!(updated.discount_percentage, 25.0);
        assert_eq!(updated.coupon_code, "SUMMER15");
    }

    #[tokio::test]
    async fn test_bulk_field_patch_filters_on_id() {
        let pool = test_pool().await;
        let service = CouponsService::new(pool);

        let a = service
            .add_coupon(request("Summer Sale", "SUMMER15"))
            .await
            .expect("create failed");
        let b = service
            .add_coupon(request("Winter Sale", "WINTER20"))
            .await
            .expect("create failed");
        let untouched = service
            .add_coupon(request("Clearance", "CLEAR50"))
            .await
            .expect("create failed");

        let mut patch = empty_patch();
        patch.minimum_amount = Some(250.0);
        let updated = service
            .update_many_coupons(&[a.id.clone(), b.id.clone()], patch)
            .await
            .expect("bulk update failed");
        assert_eq!(updated, 2);

        let a = service.get_coupon_by_id(&a.id).await.expect("fetch failed");
        let c = service
            .get_coupon_by_id(&untouched.id)
            .await
            .expect("fetch failed");
        assert_eq!(a.minimum_amount, 250.0);
        assert_eq!(c.minimum_amount, 100.0);
    }

    #[tokio::test]
    async fn test_bulk_patch_unknown_ids_not_found() {
        let pool = test_pool().await;
        let service = CouponsService::new(pool);

        let mut patch = empty_patch();
        patch.status = Some("hide".to_string());
        let err = service
            .update_many_coupons(&["K_NOPE01".to_string()], patch)
            .await
            .expect_err("phantom update succeeded");
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_bulk_patch_without_fields_is_bad_request() {
        let pool = test_pool().await;
        let service = CouponsService::new(pool);

        let a = service
            .add_coupon(request("Summer Sale", "SUMMER15"))
            .await
            .expect("create failed");

        let err = service
            .update_many_coupons(&[a.id], empty_patch())
            .await
            .expect_err("empty patch accepted");
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_toggle_status_follows_client_view() {
        let pool = test_pool().await;
        let service = CouponsService::new(pool);

        let created = service
            .add_coupon(request("Summer Sale", "SUMMER15"))
            .await
            .expect("create failed");

        let hidden = service
            .toggle_status(&created.id, Some("show".to_string()))
            .await
            .expect("toggle failed");
        assert_eq!(hidden.status.as_deref(), Some("hide"));

        let shown = service
            .toggle_status(&created.id, Some("hide".to_string()))
            .await
            .expect("toggle failed");
        assert_eq!(shown.status.as_deref(), Some("show"));
    }

    #[tokio::test]
    async fn test_delete_many_returns_deleted_records() {
        let pool = test_pool().await;
        let service = CouponsService::new(pool);

        let a = service
            .add_coupon(request("Summer Sale", "SUMMER15"))
            .await
            .expect("create failed");
        let b = service
            .add_coupon(request("Winter Sale", "WINTER20"))
            .await
            .expect("create failed");

        let deleted = service
            .delete_many_coupons(&[a.id.clone(), b.id.clone()])
            .await
            .expect("bulk delete failed");
        assert_eq!(deleted.len(), 2);

        let err = service
            .get_coupon_by_id(&a.id)
            .await
            .expect_err("deleted coupon still present");
        assert!(matches!(err, ApiError::NotFound(_)));
    }
}
