use super::models::{CreateLanguageRequest, Language, UpdateLanguageRequest};
use crate::common::{generate_language_id, ApiError};
use sqlx::SqlitePool;
use tracing::info;

pub struct LanguagesService {
    db: SqlitePool,
}

impl LanguagesService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn get_all_languages(&self) -> Result<Vec<Language>, ApiError> {
        let languages = sqlx::query_as::<_, Language>("SELECT * FROM languages ORDER BY name ASC")
            .fetch_all(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        Ok(languages)
    }

    pub async fn get_language_by_id(&self, language_id: &str) -> Result<Language, ApiError> {
        let language = sqlx::query_as::<_, Language>("SELECT * FROM languages WHERE id = ?")
            .bind(language_id)
            .fetch_optional(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?
            .ok_or_else(|| {
                ApiError::NotFound(format!("Language with ID {} not found", language_id))
            })?;

        Ok(language)
    }

    pub async fn create_language(
        &self,
        request: CreateLanguageRequest,
    ) -> Result<Language, ApiError> {
        if request.name.trim().is_empty() {
            return Err(ApiError::ValidationError(
                "Language name is required".to_string(),
            ));
        }

        let language_id = generate_language_id();
        let now = chrono::Utc::now().to_rfc3339();
        let status = request.status.unwrap_or_else(|| "show".to_string());

        sqlx::query(
            r#"
            INSERT INTO languages (id, name, language_code, iso_code, flag, title, status, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&language_id)
        .bind(&request.name)
        .bind(&request.language_code)
        .bind(&request.iso_code)
        .bind(&request.flag)
        .bind(&request.title)
        .bind(&status)
        .bind(&now)
        .bind(&now)
        .execute(&self.db)
        .await
        .map_err(|e| {
            if e.to_string().contains("UNIQUE constraint failed") {
                ApiError::Conflict("name already exists".to_string())
            } else {
                ApiError::DatabaseError(e)
            }
        })?;

        info!(language_id = %language_id, "Created language");

        self.get_language_by_id(&language_id).await
    }

    pub async fn update_language(
        &self,
        language_id: &str,
        request: UpdateLanguageRequest,
    ) -> Result<Language, ApiError> {
        self.get_language_by_id(language_id).await?;

        let now = chrono::Utc::now().to_rfc3339();

        let mut updates = Vec::new();
        let mut params: Vec<String> = Vec::new();

        if let Some(name) = &request.name {
            if name.trim().is_empty() {
                return Err(ApiError::ValidationError(
                    "Language name cannot be empty".to_string(),
                ));
            }
            updates.push("name = ?");
            params.push(name.clone());
        }

        if let Some(language_code) = &request.language_code {
            updates.push("language_code = ?");
            params.push(language_code.clone());
        }

        if let Some(iso_code) = &request.iso_code {
            updates.push("iso_code = ?");
            params.push(iso_code.clone());
        }

        if let Some(flag) = &request.flag {
            updates.push("flag = ?");
            params.push(flag.clone());
        }

        if let Some(title) = &request.title {
            updates.push("title = ?");
            params.push(title.clone());
        }

        if let Some(status) = &request.status {
            updates.push("status = ?");
            params.push(status.clone());
        }

        if updates.is_empty() {
            return self.get_language_by_id(language_id).await;
        }

        updates.push("updated_at = ?");
        params.push(now);
        params.push(language_id.to_string());

        let query = format!("UPDATE languages SET {} WHERE id = ?", updates.join(", "));

        let mut query_builder = sqlx::query(&query);
        for param in params {
            query_builder = query_builder.bind(param);
        }

        query_builder.execute(&self.db).await.map_err(|e| {
            if e.to_string().contains("UNIQUE constraint failed") {
                ApiError::Conflict("name already exists for another language".to_string())
            } else {
                ApiError::DatabaseError(e)
            }
        })?;

        info!(language_id = %language_id, "Updated language");

        self.get_language_by_id(language_id).await
    }

    pub async fn delete_language(&self, language_id: &str) -> Result<Language, ApiError> {
        let language = self.get_language_by_id(language_id).await?;

        sqlx::query("DELETE FROM languages WHERE id = ?")
            .bind(language_id)
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        info!(language_id = %language_id, "Deleted language");

        Ok(language)
    }

    pub async fn delete_many_languages(&self, ids: &[String]) -> Result<Vec<Language>, ApiError> {
        if ids.is_empty() {
            return Err(ApiError::BadRequest("No IDs provided".to_string()));
        }

        let placeholders = vec!["?"; ids.len()].join(", ");
        let select = format!("SELECT * FROM languages WHERE id IN ({})", placeholders);

        let mut select_query = sqlx::query_as::<_, Language>(&select);
        for id in ids {
            select_query = select_query.bind(id);
        }
        let languages = select_query
            .fetch_all(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        if languages.is_empty() {
            return Err(ApiError::NotFound(
                "No languages found with the provided IDs".to_string(),
            ));
        }

        let delete = format!("DELETE FROM languages WHERE id IN ({})", placeholders);
        let mut delete_query = sqlx::query(&delete);
        for id in ids {
            delete_query = delete_query.bind(id);
        }
        delete_query
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        info!(count = languages.len(), "Deleted languages");

        Ok(languages)
    }

    pub async fn update_many_languages(&self, ids: &[String], status: &str) -> Result<u64, ApiError> {
        if ids.is_empty() {
            return Err(ApiError::BadRequest("No IDs provided".to_string()));
        }

        let placeholders = vec!["?"; ids.len()].join(", ");
        let query = format!(
            "UPDATE languages SET status = ?, updated_at = ? WHERE id IN ({})",
            placeholders
        );

        let now = chrono::Utc::now().to_rfc3339();
        let mut query_builder = sqlx::query(&query).bind(status).bind(&now);
        for id in ids {
            query_builder = query_builder.bind(id);
        }

        let result = query_builder
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("No languages were updated".to_string()));
        }

        info!(count = result.rows_affected(), status = %status, "Bulk-updated language status");

        Ok(result.rows_affected())
    }

    pub async fn toggle_status(&self, language_id: &str) -> Result<Language, ApiError> {
        let language = self.get_language_by_id(language_id).await?;

        let new_status = if language.status.as_deref() == Some("show") {
            "hide"
        } else {
            "show"
        };

        let now = chrono::Utc::now().to_rfc3339();
        sqlx::query("UPDATE languages SET status = ?, updated_at = ? WHERE id = ?")
            .bind(new_status)
            .bind(&now)
            .bind(language_id)
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        self.get_language_by_id(language_id).await
    }
}
