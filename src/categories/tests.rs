//! Tests for categories module

#[cfg(test)]
mod tests {
    use super::super::models::{CreateCategoryRequest, UpdateCategoryRequest};
    use super::super::services::CategoriesService;
    use crate::common::{migrations, ApiError, Validator};
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

    fn request(name: &str) -> CreateCategoryRequest {
        CreateCategoryRequest {
            name: name.to_string(),
            description: Some("test".to_string()),
            icon: None,
            status: None,
        }
    }

    #[test]
    fn test_create_category_validation_empty_name() {
        let req = request("");
        let result = req.validate(&req);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.field == "name"));
    }

    #[tokio::test]
    async fn test_create_and_fetch_category() {
        let pool = test_pool().await;
        let service = CategoriesService::new(pool);

        let created = service.create_category(request("Shoes")).await.expect("create failed");
        assert_eq!(created.name, "Shoes");
        assert_eq!(created.status.as_deref(), Some("show"));

        let fetched = service
            .get_category_by_id(&created.id)
            .await
            .expect("fetch failed");
        assert_eq!(fetched.id, created.id);
    }

    #[tokio::test]
    async fn test_duplicate_name_conflicts() {
        let pool = test_pool().await;
        let service = CategoriesService::new(pool);

        service.create_category(request("Shoes")).await.expect("create failed");
        let err = service
            .create_category(request("Shoes"))
            .await
            .expect_err("duplicate name accepted");
        assert!(matches!(err, ApiError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_update_category_partial() {
        let pool = test_pool().await;
        let service = CategoriesService::new(pool);

        let created = service.create_category(request("Shoes")).await.expect("create failed");
        let updated = service
            .update_category(
                &created.id,
                UpdateCategoryRequest {
                    name: None,
                    description: Some("footwear".to_string()),
                    icon: None,
                    status: None,
                },
            )
            .await
            .expect("update failed");

        assert_eq!(updated.name, "Shoes");
        assert_eq!(updated.description.as_deref(), Some("footwear"));
    }

    #[tokio::test]
    async fn test_toggle_status_flips_show_and_hide() {
        let pool = test_pool().await;
        let service = CategoriesService::new(pool);

        let created = service.create_category(request("Shoes")).await.expect("create failed");
        assert_eq!(created.status.as_deref(), Some("show"));

        let hidden = service.toggle_status(&created.id).await.expect("toggle failed");
        assert_eq!(hidden.status.as_deref(), Some("hide"));

        let shown = service.toggle_status(&created.id).await.expect("toggle failed");
        assert_eq!(shown.status.as_deref(), Some("show"));
    }

    #[tokio::test]
    async fn test_bulk_status_update_filters_on_id() {
        let pool = test_pool().await;
        let service = CategoriesService::new(pool);

        let a = service.create_category(request("Shoes")).await.expect("create failed");
        let b = service.create_category(request("Bags")).await.expect("create failed");
        let untouched = service.create_category(request("Hats")).await.expect("create failed");

        let updated = service
            .update_many_categories(&[a.id.clone(), b.id.clone()], "hide")
            .await
            .expect("bulk update failed");
        assert_eq!(updated, 2);

        let a = service.get_category_by_id(&a.id).await.expect("fetch failed");
        let c = service
            .get_category_by_id(&untouched.id)
            .await
            .expect("fetch failed");
        assert_eq!(a.status.as_deref(), Some("hide"));
        assert_eq!(c.status.as_deref(), Some("show"));
    }

    #[tokio::test]
    async fn test_bulk_status_update_unknown_ids_not_found() {
        let pool = test_pool().await;
        let service = CategoriesService::new(pool);

        let err = service
            .update_many_categories(&["C_NOPE01".to_string()], "hide")
            .await
            .expect_err("phantom update succeeded");
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_bulk_delete_returns_deleted_records() {
        let pool = test_pool().await;
        let service = CategoriesService::new(pool.clone());

        let a = service.create_category(request("Shoes")).await.expect("create failed");
        let b = service.create_category(request("Bags")).await.expect("create failed");

        let deleted = service
            .delete_many_categories(&[a.id.clone(), b.id.clone()])
            .await
            .expect("bulk delete failed");
        assert_eq!(deleted.len(), 2);

        let err = service
            .get_category_by_id(&a.id)
            .await
            .expect_err("deleted category still present");
        assert!(matches!(err, ApiError::NotFound(_)));
    }
}
