//! Tests for auth module
//!
//! These tests verify core authentication functionality including:
//! - Token round-trip (issue then verify)
//! - Expiry and tamper classification
//! - Claims structure

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::auth::token::TokenError;
    use crate::common::{migrations, ApiError, AppState};
    use crate::users::models::CreateUserRequest;
    use crate::users::UsersService;
    use axum::extract::{Extension, Json};
    use chrono::Duration;
    use sqlx::sqlite::SqlitePoolOptions;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    fn service() -> TokenService {
        TokenService::new("test_secret_key", Duration::hours(2))
    }

    async fn app_state() -> Arc<RwLock<AppState>> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("failed to open in-memory database");
        migrations::run_migrations(&pool)
            .await
            .expect("migrations failed");

        let tokens = Arc::new(TokenService::new("test_secret_key", Duration::hours(2)));
        Arc::new(RwLock::new(AppState { db: pool, tokens }))
    }

    async fn seed_account(state: &Arc<RwLock<AppState>>, email: &str, password: &str) {
        let db = state.read().await.db.clone();
        UsersService::new(db)
            .create_user(CreateUserRequest {
                username: Some("rahul".to_string()),
                email: Some(email.to_string()),
                phone: None,
                password: Some(password.to_string()),
            })
            .await
            .expect("seed account failed");
    }

    fn login_body(email: &str, password: &str) -> Json<models::LoginRequest> {
        Json(models::LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
    }

    #[test]
    fn test_claims_structure() {
        let claims = models::Claims {
            sub: "U_K7NP3X".to_string(),
            username: "rahul".to_string(),
            exp: 1234567890,
        };

        assert_eq!(claims.sub, "U_K7NP3X");
        assert_eq!(claims.username, "rahul");
    }

    #[test]
    fn test_login_response_uses_access_token_key() {
        let response = models::LoginResponse {
            message: "welcome".to_string(),
            access_token: "abc.def.ghi".to_string(),
        };

        let json = serde_json::to_value(&response).expect("serialize failed");
        assert_eq!(json["accessToken"], "abc.def.ghi");
        assert!(json.get("access_token").is_none());
    }

    #[test]
    fn test_token_round_trip() {
        let tokens = service();
        let token = tokens.issue("U_ABC123", "govinda").expect("issue failed");

        let claims = tokens.verify(&token).expect("verify failed");
        assert_eq!(claims.sub, "U_ABC123");
        assert_eq!(claims.username, "govinda");
    }

    #[test]
    fn test_expired_token_reports_expired() {
        // A negative validity window puts exp in the past at issuance
        let tokens = TokenService::new("test_secret_key", Duration::seconds(-10));
        let token = tokens.issue("U_ABC123", "govinda").expect("issue failed");

        let err = tokens.verify(&token).expect_err("expired token accepted");
        assert!(
            matches!(err, TokenError::Expired),
            "expired token must classify as Expired, got {:?}",
            err
        );
    }

    #[test]
    fn test_wrong_secret_reports_bad_signature() {
        let tokens = service();
        let other = TokenService::new("some_other_secret", Duration::hours(2));

        let token = tokens.issue("U_ABC123", "govinda").expect("issue failed");
        let err = other.verify(&token).expect_err("forged token accepted");
        assert!(matches!(err, TokenError::BadSignature));
    }

    #[test]
    fn test_tampered_payload_reports_bad_signature() {
        let tokens = service();
        let token = tokens.issue("U_ABC123", "govinda").expect("issue failed");

        // Flip one character inside the payload segment
        let mut parts: Vec<String> = token.split('.').map(str::to_string).collect();
        assert_eq!(parts.len(), 3);
        let mut payload: Vec<char> = parts[1].chars().collect();
        payload[0] = if payload[0] == 'A' { 'B' } else { 'A' };
        parts[1] = payload.into_iter().collect();
        let tampered = parts.join(".");

        let err = tokens.verify(&tampered).expect_err("tampered token accepted");
        assert!(matches!(err, TokenError::BadSignature));
    }

    #[test]
    fn test_tampered_signature_reports_bad_signature() {
        let tokens = service();
        let token = tokens.issue("U_ABC123", "govinda").expect("issue failed");

        let mut parts: Vec<String> = token.split('.').map(str::to_string).collect();
        let mut sig: Vec<char> = parts[2].chars().collect();
        sig[0] = if sig[0] == 'A' { 'B' } else { 'A' };
        parts[2] = sig.into_iter().collect();
        let tampered = parts.join(".");

        let err = tokens.verify(&tampered).expect_err("tampered token accepted");
        assert!(matches!(err, TokenError::BadSignature));
    }

    #[tokio::test]
    async fn test_login_returns_greeting_and_verifiable_token() {
        let state = app_state().await;
        seed_account(&state, "a@b.com", "secret").await;

        let Json(response) = handlers::login(Extension(state.clone()), login_body("a@b.com", "secret"))
            .await
            .expect("valid login rejected");

        assert_eq!(
            response.message,
            "Welcome to the Milky Way! Here is your access token. have it and enjoy routings"
        );

        let claims = state
            .read()
            .await
            .tokens
            .verify(&response.access_token)
            .expect("issued token failed verification");
        assert_eq!(claims.username, "rahul");
    }

    #[tokio::test]
    async fn test_login_empty_fields_is_bad_request() {
        let state = app_state().await;
        seed_account(&state, "a@b.com", "secret").await;

        let err = handlers::login(Extension(state.clone()), login_body("", "secret"))
            .await
            .expect_err("empty email accepted");
        assert!(matches!(err, ApiError::BadRequest(_)));

        let err = handlers::login(Extension(state), login_body("a@b.com", ""))
            .await
            .expect_err("empty password accepted");
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_login_wrong_password_is_unauthorized() {
        let state = app_state().await;
        seed_account(&state, "a@b.com", "secret").await;

        let err = handlers::login(Extension(state), login_body("a@b.com", "wrong"))
            .await
            .expect_err("wrong password accepted");
        assert!(matches!(err, ApiError::Unauthorized(_)));
    }

    #[test]
    fn test_unparseable_token_reports_malformed() {
        let tokens = service();

        let err = tokens.verify("not-a-jwt").expect_err("garbage accepted");
        assert!(matches!(err, TokenError::Malformed));

        let err = tokens.verify("").expect_err("empty token accepted");
        assert!(matches!(err, TokenError::Malformed));
    }
}
