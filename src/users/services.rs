use super::models::{CreateSocialUserRequest, CreateUserRequest, UpdateUserRequest, User};
use crate::common::{generate_user_id, safe_email_log, ApiError, Validator};
use sqlx::SqlitePool;
use tracing::{info, warn};

/// bcrypt work factor, deliberately slow to resist brute force
const HASH_COST: u32 = 10;

pub struct UsersService {
    db: SqlitePool,
}

impl UsersService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    // ============================================================================
    // Credential Verification
    // ============================================================================

    /// Verify an email/password pair against the stored hash.
    ///
    /// Unknown email, wrong password, and passwordless (social) accounts all
    /// fail with the same Unauthorized error so callers cannot tell which
    /// case they hit. The distinction is logged server-side only.
    pub async fn verify_credentials(&self, email: &str, password: &str) -> Result<User, ApiError> {
        if email.is_empty() || password.is_empty() {
            return Err(ApiError::BadRequest(
                "Email and password are required".to_string(),
            ));
        }

        let user: Option<User> = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        let user = match user {
            Some(u) => u,
            None => {
                warn!(email = %safe_email_log(email), "Login failed: no account for email");
                return Err(ApiError::Unauthorized("Invalid credentials".to_string()));
            }
        };

        let stored_hash = match &user.password {
            Some(h) => h.clone(),
            None => {
                warn!(user_id = %user.id, "Login failed: account has no password set");
                return Err(ApiError::Unauthorized("Invalid credentials".to_string()));
            }
        };

        let valid = bcrypt::verify(password, &stored_hash)
            .map_err(|_| ApiError::InternalServer("password verification failed".to_string()))?;

        if !valid {
            warn!(email = %safe_email_log(email), "Login failed: password mismatch");
            return Err(ApiError::Unauthorized("Invalid credentials".to_string()));
        }

        Ok(user)
    }

    // ============================================================================
    // User CRUD Operations
    // ============================================================================

    /// Create a user, hashing the password before it ever touches the store
    pub async fn create_user(&self, request: CreateUserRequest) -> Result<User, ApiError> {
        let validation_result = request.validate(&request);
        if !validation_result.is_valid {
            return Err(ApiError::from(validation_result));
        }

        let hashed_password = match &request.password {
            Some(p) if !p.is_empty() => Some(
                bcrypt::hash(p, HASH_COST)
                    .map_err(|_| ApiError::InternalServer("failed to hash password".to_string()))?,
            ),
            _ => None,
        };

        let user_id = generate_user_id();
        let now = chrono::Utc::now().to_rfc3339();

        sqlx::query(
            r#"
            INSERT INTO users (id, username, email, phone, password, social, status, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, NULL, 'show', ?, ?)
            "#,
        )
        .bind(&user_id)
        .bind(&request.username)
        .bind(&request.email)
        .bind(&request.phone)
        .bind(&hashed_password)
        .bind(&now)
        .bind(&now)
        .execute(&self.db)
        .await
        .map_err(|e| {
            if e.to_string().contains("UNIQUE constraint failed") {
                ApiError::Conflict("Email already exists".to_string())
            } else {
                ApiError::DatabaseError(e)
            }
        })?;

        info!(user_id = %user_id, "Created user");

        self.get_user_by_id(&user_id).await
    }

    /// Create an account backed by a third-party identity provider.
    ///
    /// Returns the existing account when the email is already registered;
    /// two racing creates resolve the same way through the store's unique
    /// index rather than an application pre-check.
    pub async fn create_social_user(
        &self,
        request: CreateSocialUserRequest,
    ) -> Result<User, ApiError> {
        let social = match request.social.as_deref() {
            Some(s) if !s.is_empty() => s.to_string(),
            _ => {
                return Err(ApiError::BadRequest(
                    "social type cannot be null".to_string(),
                ))
            }
        };

        if let Some(email) = request.email.as_deref() {
            if let Some(existing) = self.find_by_email(email).await? {
                return Ok(existing);
            }
        }

        let user_id = generate_user_id();
        let now = chrono::Utc::now().to_rfc3339();

        let insert = sqlx::query(
            r#"
            INSERT INTO users (id, username, email, phone, password, social, status, created_at, updated_at)
            VALUES (?, ?, ?, ?, NULL, ?, 'show', ?, ?)
            "#,
        )
        .bind(&user_id)
        .bind(&request.username)
        .bind(&request.email)
        .bind(&request.phone)
        .bind(&social)
        .bind(&now)
        .bind(&now)
        .execute(&self.db)
        .await;

        match insert {
            Ok(_) => {
                info!(user_id = %user_id, provider = %social, "Created social user");
                self.get_user_by_id(&user_id).await
            }
            Err(e) if e.to_string().contains("UNIQUE constraint failed") => {
                // Lost the race against a concurrent create for the same email
                if let Some(email) = request.email.as_deref() {
                    if let Some(existing) = self.find_by_email(email).await? {
                        return Ok(existing);
                    }
                }
                Err(ApiError::Conflict("Email already exists".to_string()))
            }
            Err(e) => Err(ApiError::DatabaseError(e)),
        }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.db)
            .await
            .map_err(ApiError::DatabaseError)
    }

    pub async fn get_all_users(&self) -> Result<Vec<User>, ApiError> {
        let users = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY created_at DESC")
            .fetch_all(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        Ok(users)
    }

    pub async fn get_user_by_id(&self, user_id: &str) -> Result<User, ApiError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(user_id)
            .fetch_optional(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?
            .ok_or_else(|| ApiError::NotFound(format!("User with ID {} not found", user_id)))?;

        Ok(user)
    }

    /// Update an existing user; a supplied password is re-hashed first
    pub async fn update_user(
        &self,
        user_id: &str,
        request: UpdateUserRequest,
    ) -> Result<User, ApiError> {
        self.get_user_by_id(user_id).await?;

        let now = chrono::Utc::now().to_rfc3339();

        let mut updates = Vec::new();
        let mut params: Vec<String> = Vec::new();

        if let Some(username) = &request.username {
            updates.push("username = ?");
            params.push(username.clone());
        }

        if let Some(email) = &request.email {
            updates.push("email = ?");
            params.push(email.clone());
        }

        if let Some(phone) = &request.phone {
            updates.push("phone = ?");
            params.push(phone.clone());
        }

        if let Some(password) = &request.password {
            if !password.is_empty() {
                let hashed = bcrypt::hash(password, HASH_COST).map_err(|_| {
                    ApiError::InternalServer("failed to hash password".to_string())
                })?;
                updates.push("password = ?");
                params.push(hashed);
            }
        }

        if let Some(social) = &request.social {
            updates.push("social = ?");
            params.push(social.clone());
        }

        if let Some(status) = &request.status {
            updates.push("status = ?");
            params.push(status.clone());
        }

        if updates.is_empty() {
            return self.get_user_by_id(user_id).await;
        }

        updates.push("updated_at = ?");
        params.push(now);
        params.push(user_id.to_string());

        let query = format!("UPDATE users SET {} WHERE id = ?", updates.join(", "));

        let mut query_builder = sqlx::query(&query);
        for param in params {
            query_builder = query_builder.bind(param);
        }

        query_builder.execute(&self.db).await.map_err(|e| {
            if e.to_string().contains("UNIQUE constraint failed") {
                ApiError::Conflict("Email already exists for another user".to_string())
            } else {
                ApiError::DatabaseError(e)
            }
        })?;

        info!(user_id = %user_id, "Updated user");

        self.get_user_by_id(user_id).await
    }

    /// Delete a user, returning the deleted record
    pub async fn delete_user(&self, user_id: &str) -> Result<User, ApiError> {
        let user = self.get_user_by_id(user_id).await?;

        sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(user_id)
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        info!(user_id = %user_id, "Deleted user");

        Ok(user)
    }
}
