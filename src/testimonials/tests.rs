//! Tests for testimonials module

#[cfg(test)]
mod tests {
    use super::super::models::CreateTestimonialRequest;
    use super::super::services::TestimonialsService;
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

    fn request(name: &str, rating: Option<i64>) -> CreateTestimonialRequest {
        CreateTestimonialRequest {
            name: name.to_string(),
            title: Some("Happy customer".to_string()),
            message: Some("Great store".to_string()),
            rating,
            avatar: None,
            status: None,
        }
    }

    #[tokio::test]
    async fn test_create_testimonial_with_valid_rating() {
        let pool = test_pool().await;
        let service = TestimonialsService::new(pool);

        let created = service
            .create_testimonial(request("Alice", Some(5)))
            .await
            .expect("create failed");
        assert_eq!(created.rating, Some(5));
        assert_eq!(created.status.as_deref(), Some("show"));
    }

    #[tokio::test]
    async fn test_rating_out_of_bounds_rejected() {
        let pool = test_pool().await;
        let service = TestimonialsService::new(pool);

        let err = service
            .create_testimonial(request("Alice", Some(6)))
            .await
            .expect_err("out-of-range rating accepted");
        assert!(matches!(err, ApiError::ValidationError(_)));

        let pool = test_pool().await;
        let service = TestimonialsService::new(pool);
        let err = service
            .create_testimonial(request("Alice", Some(0)))
            .await
            .expect_err("zero rating accepted");
        assert!(matches!(err, ApiError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_rating_is_optional() {
        let pool = test_pool().await;
        let service = TestimonialsService::new(pool);

        let created = service
            .create_testimonial(request("Bob", None))
            .await
            .expect("create failed");
        assert_eq!(created.rating, None);
    }
}
