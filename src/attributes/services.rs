use super::models::{Attribute, CreateAttributeRequest, UpdateAttributeRequest};
use crate::common::{generate_attribute_id, ApiError};
use sqlx::SqlitePool;
use tracing::info;

pub struct AttributesService {
    db: SqlitePool,
}

impl AttributesService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn get_all_attributes(&self) -> Result<Vec<Attribute>, ApiError> {
        let attributes =
            sqlx::query_as::<_, Attribute>("SELECT * FROM attributes ORDER BY title ASC")
                .fetch_all(&self.db)
                .await
                .map_err(ApiError::DatabaseError)?;

        Ok(attributes)
    }

    pub async fn get_attribute_by_id(&self, attribute_id: &str) -> Result<Attribute, ApiError> {
        let attribute = sqlx::query_as::<_, Attribute>("SELECT * FROM attributes WHERE id = ?")
            .bind(attribute_id)
            .fetch_optional(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?
            .ok_or_else(|| {
                ApiError::NotFound(format!("Attribute with ID {} not found", attribute_id))
            })?;

        Ok(attribute)
    }

    /// Create an attribute; the unique index on title decides conflicts
    pub async fn add_attribute(&self, request: CreateAttributeRequest) -> Result<Attribute, ApiError> {
        if request.title.trim().is_empty() {
            return Err(ApiError::ValidationError(
                "Attribute title is required".to_string(),
            ));
        }

        let attribute_id = generate_attribute_id();
        let now = chrono::Utc::now().to_rfc3339();
        let status = request.status.unwrap_or_else(|| "show".to_string());

        sqlx::query(
            r#"
            INSERT INTO attributes (id, title, name, option, lang, status, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&attribute_id)
        .bind(&request.title)
        .bind(&request.name)
        .bind(&request.option)
        .bind(&request.lang)
        .bind(&status)
        .bind(&now)
        .bind(&now)
        .execute(&self.db)
        .await
        .map_err(|e| {
            if e.to_string().contains("UNIQUE constraint failed") {
                ApiError::Conflict("Title already exists".to_string())
            } else {
                ApiError::DatabaseError(e)
            }
        })?;

        info!(attribute_id = %attribute_id, "Created attribute");

        self.get_attribute_by_id(&attribute_id).await
    }

    pub async fn update_attribute(
        &self,
        attribute_id: &str,
        request: UpdateAttributeRequest,
    ) -> Result<Attribute, ApiError> {
        self.get_attribute_by_id(attribute_id).await?;

        let now = chrono::Utc::now().to_rfc3339();

        let mut updates = Vec::new();
        let mut params: Vec<String> = Vec::new();

        if let Some(title) = &request.title {
            if title.trim().is_empty() {
                return Err(ApiError::ValidationError(
                    "Attribute title cannot be empty".to_string(),
                ));
            }
            updates.push("title = ?");
            params.push(title.clone());
        }

        if let Some(name) = &request.name {
            updates.push("name = ?");
            params.push(name.clone());
        }

        if let Some(option) = &request.option {
            updates.push("option = ?");
            params.push(option.clone());
        }

        if let Some(lang) = &request.lang {
            updates.push("lang = ?");
            params.push(lang.clone());
        }

        if let Some(status) = &request.status {
            updates.push("status = ?");
            params.push(status.clone());
        }

        if updates.is_empty() {
            return self.get_attribute_by_id(attribute_id).await;
        }

        updates.push("updated_at = ?");
        params.push(now);
        params.push(attribute_id.to_string());

        let query = format!("UPDATE attributes SET {} WHERE id = ?", updates.join(", "));

        let mut query_builder = sqlx::query(&query);
        for param in params {
            query_builder = query_builder.bind(param);
        }

        query_builder.execute(&self.db).await.map_err(|e| {
            if e.to_string().contains("UNIQUE constraint failed") {
                ApiError::Conflict("Title already exists for another attribute".to_string())
            } else {
                ApiError::DatabaseError(e)
            }
        })?;

        info!(attribute_id = %attribute_id, "Updated attribute");

        self.get_attribute_by_id(attribute_id).await
    }

    pub async fn delete_attribute(&self, attribute_id: &str) -> Result<Attribute, ApiError> {
        let attribute = self.get_attribute_by_id(attribute_id).await?;

        sqlx::query("DELETE FROM attributes WHERE id = ?")
            .bind(attribute_id)
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        info!(attribute_id = %attribute_id, "Deleted attribute");

        Ok(attribute)
    }

    pub async fn delete_many_attributes(&self, ids: &[String]) -> Result<Vec<Attribute>, ApiError> {
        if ids.is_empty() {
            return Err(ApiError::BadRequest("No IDs provided".to_string()));
        }

        let placeholders = vec!["?"; ids.len()].join(", ");
        let select = format!("SELECT * FROM attributes WHERE id IN ({})", placeholders);

        let mut select_query = sqlx::query_as::<_, Attribute>(&select);
        for id in ids {
            select_query = select_query.bind(id);
        }
        let attributes = select_query
            .fetch_all(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        if attributes.is_empty() {
            return Err(ApiError::NotFound(
                "No attributes found with the provided IDs".to_string(),
            ));
        }

        let delete = format!("DELETE FROM attributes WHERE id IN ({})", placeholders);
        let mut delete_query = sqlx::query(&delete);
        for id in ids {
            delete_query = delete_query.bind(id);
        }
        delete_query
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        info!(count = attributes.len(), "Deleted attributes");

        Ok(attributes)
    }

    pub async fn update_many_attributes(&self, ids: &[String], status: &str) -> Result<u64, ApiError> {
        if ids.is_empty() {
            return Err(ApiError::BadRequest("No IDs provided".to_string()));
        }

        let placeholders = vec!["?"; ids.len()].join(", ");
        let query = format!(
            "UPDATE attributes SET status = ?, updated_at = ? WHERE id IN ({})",
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
            return Err(ApiError::NotFound("No attributes were updated".to_string()));
        }

        info!(count = result.rows_affected(), status = %status, "Bulk-updated attribute status");

        Ok(result.rows_affected())
    }
}
