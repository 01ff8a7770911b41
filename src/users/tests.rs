//! Tests for users module
//!
//! These tests run against an in-memory SQLite pool so the store-level
//! uniqueness constraint and the hashing contract are exercised for real.

#[cfg(test)]
mod tests {
    use super::super::models::{CreateSocialUserRequest, CreateUserRequest};
    use super::super::services::UsersService;
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

    fn email_request(email: &str, password: &str) -> CreateUserRequest {
        CreateUserRequest {
            username: Some("rahul".to_string()),
            email: Some(email.to_string()),
            phone: None,
            password: Some(password.to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_user_stores_hash_not_plaintext() {
        let pool = test_pool().await;
        let service = UsersService::new(pool.clone());

        service
            .create_user(email_request("a@b.com", "secret"))
            .await
            .expect("create failed");

        let (stored,): (String,) =
            sqlx::query_as("SELECT password FROM users WHERE email = 'a@b.com'")
                .fetch_one(&pool)
                .await
                .expect("user row missing");

        assert_ne!(stored, "secret");
        assert!(stored.starts_with("$2"), "expected a bcrypt hash");
    }

    #[tokio::test]
    async fn test_verify_credentials_success() {
        let pool = test_pool().await;
        let service = UsersService::new(pool);

        let created = service
            .create_user(email_request("a@b.com", "secret"))
            .await
            .expect("create failed");

        let user = service
            .verify_credentials("a@b.com", "secret")
            .await
            .expect("valid credentials rejected");

        assert_eq!(user.id, created.id);
        assert_eq!(user.username.as_deref(), Some("rahul"));
    }

    #[tokio::test]
    async fn test_verify_credentials_wrong_password_is_unauthorized() {
        let pool = test_pool().await;
        let service = UsersService::new(pool);

        service
            .create_user(email_request("a@b.com", "secret"))
            .await
            .expect("create failed");

        let err = service
            .verify_credentials("a@b.com", "wrong")
            .await
            .expect_err("wrong password accepted");
        assert!(matches!(err, ApiError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn test_verify_credentials_unknown_email_same_error_as_wrong_password() {
        let pool = test_pool().await;
        let service = UsersService::new(pool);

        service
            .create_user(email_request("a@b.com", "secret"))
            .await
            .expect("create failed");

        let unknown = service
            .verify_credentials("nobody@b.com", "secret")
            .await
            .expect_err("unknown email accepted");
        let wrong = service
            .verify_credentials("a@b.com", "wrong")
            .await
            .expect_err("wrong password accepted");

        // Account enumeration guard: both paths produce the same class and message
        match (&unknown, &wrong) {
            (ApiError::Unauthorized(a), ApiError::Unauthorized(b)) => assert_eq!(a, b),
            _ => panic!("expected Unauthorized for both, got {:?} / {:?}", unknown, wrong),
        }
    }

    #[tokio::test]
    async fn test_verify_credentials_empty_input_is_caller_error() {
        let pool = test_pool().await;
        let service = UsersService::new(pool);

        let err = service
            .verify_credentials("", "secret")
            .await
            .expect_err("empty email accepted");
        assert!(matches!(err, ApiError::BadRequest(_)));

        let err = service
            .verify_credentials("a@b.com", "")
            .await
            .expect_err("empty password accepted");
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected_by_store_constraint() {
        let pool = test_pool().await;
        let service = UsersService::new(pool);

        service
            .create_user(email_request("a@b.com", "secret"))
            .await
            .expect("first create failed");

        let err = service
            .create_user(email_request("a@b.com", "other"))
            .await
            .expect_err("duplicate email accepted");
        assert!(matches!(err, ApiError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_concurrent_same_email_creates_accept_exactly_one() {
        let pool = test_pool().await;

        let s1 = UsersService::new(pool.clone());
        let s2 = UsersService::new(pool.clone());

        let (r1, r2) = tokio::join!(
            s1.create_user(email_request("race@b.com", "one")),
            s2.create_user(email_request("race@b.com", "two")),
        );

        let oks = [r1.is_ok(), r2.is_ok()].iter().filter(|b| **b).count();
        assert_eq!(oks, 1, "exactly one concurrent create must win");

        let loser = if r1.is_err() { r1 } else { r2 };
        assert!(matches!(loser, Err(ApiError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_create_user_requires_email_or_phone() {
        let pool = test_pool().await;
        let service = UsersService::new(pool);

        let err = service
            .create_user(CreateUserRequest {
                username: None,
                email: None,
                phone: None,
                password: None,
            })
            .await
            .expect_err("empty account accepted");
        assert!(matches!(err, ApiError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_create_user_with_email_requires_password() {
        let pool = test_pool().await;
        let service = UsersService::new(pool);

        let err = service
            .create_user(CreateUserRequest {
                username: None,
                email: Some("a@b.com".to_string()),
                phone: None,
                password: None,
            })
            .await
            .expect_err("passwordless email account accepted");
        assert!(matches!(err, ApiError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_phone_only_account_allowed_without_password() {
        let pool = test_pool().await;
        let service = UsersService::new(pool);

        let user = service
            .create_user(CreateUserRequest {
                username: Some("phoneonly".to_string()),
                email: None,
                phone: Some("+911234567890".to_string()),
                password: None,
            })
            .await
            .expect("phone-only account rejected");

        assert!(user.password.is_none());
    }

    #[tokio::test]
    async fn test_social_create_returns_existing_account_for_known_email() {
        let pool = test_pool().await;
        let service = UsersService::new(pool);

        let first = service
            .create_social_user(CreateSocialUserRequest {
                username: Some("g-user".to_string()),
                email: Some("g@b.com".to_string()),
                phone: None,
                social: Some("google".to_string()),
            })
            .await
            .expect("social create failed");

        let second = service
            .create_social_user(CreateSocialUserRequest {
                username: Some("other-name".to_string()),
                email: Some("g@b.com".to_string()),
                phone: None,
                social: Some("google".to_string()),
            })
            .await
            .expect("repeat social create failed");

        assert_eq!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_social_create_requires_provider() {
        let pool = test_pool().await;
        let service = UsersService::new(pool);

        let err = service
            .create_social_user(CreateSocialUserRequest {
                username: None,
                email: Some("g@b.com".to_string()),
                phone: None,
                social: None,
            })
            .await
            .expect_err("providerless social account accepted");
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_get_user_by_id_not_found() {
        let pool = test_pool().await;
        let service = UsersService::new(pool);

        let err = service
            .get_user_by_id("U_MISSING")
            .await
            .expect_err("missing user found");
        assert!(matches!(err, ApiError::NotFound(_)));
    }
}
