use super::models::{Category, CreateCategoryRequest, UpdateCategoryRequest};
use crate::common::{generate_category_id, ApiError, Validator};
use sqlx::SqlitePool;
use tracing::info;

pub struct CategoriesService {
    db: SqlitePool,
}

impl CategoriesService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn get_all_categories(&self) -> Result<Vec<Category>, ApiError> {
        let categories =
            sqlx::query_as::<_, Category>("SELECT * FROM categories ORDER BY name ASC")
                .fetch_all(&self.db)
                .await
                .map_err(ApiError::DatabaseError)?;

        Ok(categories)
    }

    pub async fn get_category_by_id(&self, category_id: &str) -> Result<Category, ApiError> {
        let category = sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = ?")
            .bind(category_id)
            .fetch_optional(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?
            .ok_or_else(|| {
                ApiError::NotFound(format!("Category with ID {} not found", category_id))
            })?;

        Ok(category)
    }

    /// Create a category; the store's unique index on name decides conflicts
    pub async fn create_category(
        &self,
        request: CreateCategoryRequest,
    ) -> Result<Category, ApiError> {
        let validation_result = request.validate(&request);
        if !validation_result.is_valid {
            return Err(ApiError::from(validation_result));
        }

        let category_id = generate_category_id();
        let now = chrono::Utc::now().to_rfc3339();
        let status = request.status.unwrap_or_else(|| "show".to_string());

        sqlx::query(
            r#"
            INSERT INTO categories (id, name, description, icon, status, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&category_id)
        .bind(&request.name)
        .bind(&request.description)
        .bind(&request.icon)
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

        info!(category_id = %category_id, "Created category");

        self.get_category_by_id(&category_id).await
    }

    pub async fn update_category(
        &self,
        category_id: &str,
        request: UpdateCategoryRequest,
    ) -> Result<Category, ApiError> {
        self.get_category_by_id(category_id).await?;

        let now = chrono::Utc::now().to_rfc3339();

        let mut updates = Vec::new();
        let mut params: Vec<String> = Vec::new();

        if let Some(name) = &request.name {
            if name.trim().is_empty() {
                return Err(ApiError::ValidationError(
                    "Category name cannot be empty".to_string(),
                ));
            }
            updates.push("name = ?");
            params.push(name.clone());
        }

        if let Some(description) = &request.description {
            updates.push("description = ?");
            params.push(description.clone());
        }

        if let Some(icon) = &request.icon {
            updates.push("icon = ?");
            params.push(icon.clone());
        }

        if let Some(status) = &request.status {
            updates.push("status = ?");
            params.push(status.clone());
        }

        if updates.is_empty() {
            return self.get_category_by_id(category_id).await;
        }

        updates.push("updated_at = ?");
        params.push(now);
        params.push(category_id.to_string());

        let query = format!("UPDATE categories SET {} WHERE id = ?", updates.join(", "));

        let mut query_builder = sqlx::query(&query);
        for param in params {
            query_builder = query_builder.bind(param);
        }

        query_builder.execute(&self.db).await.map_err(|e| {
            if e.to_string().contains("UNIQUE constraint failed") {
                ApiError::Conflict("name already exists for another category".to_string())
            } else {
                ApiError::DatabaseError(e)
            }
        })?;

        info!(category_id = %category_id, "Updated category");

        self.get_category_by_id(category_id).await
    }

    /// Delete a category, returning the deleted record
    pub async fn delete_category(&self, category_id: &str) -> Result<Category, ApiError> {
        let category = self.get_category_by_id(category_id).await?;

        sqlx::query("DELETE FROM categories WHERE id = ?")
            .bind(category_id)
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        info!(category_id = %category_id, "Deleted category");

        Ok(category)
    }

    /// Delete a batch of categories, returning the deleted records
    pub async fn delete_many_categories(&self, ids: &[String]) -> Result<Vec<Category>, ApiError> {
        if ids.is_empty() {
            return Err(ApiError::BadRequest("No IDs provided".to_string()));
        }

        // Fetch first so the deleted records can be returned to the caller
        let placeholders = vec!["?"; ids.len()].join(", ");
        let select = format!("SELECT * FROM categories WHERE id IN ({})", placeholders);

        let mut select_query = sqlx::query_as::<_, Category>(&select);
        for id in ids {
            select_query = select_query.bind(id);
        }
        let categories = select_query
            .fetch_all(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        if categories.is_empty() {
            return Err(ApiError::NotFound(
                "No categories found with the provided IDs".to_string(),
            ));
        }

        let delete = format!("DELETE FROM categories WHERE id IN ({})", placeholders);
        let mut delete_query = sqlx::query(&delete);
        for id in ids {
            delete_query = delete_query.bind(id);
        }
        delete_query
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        info!(count = categories.len(), "Deleted categories");

        Ok(categories)
    }

    /// Set the status of a batch of categories in one statement.
    /// The filter key is the canonical `id` column for every resource.
    pub async fn update_many_categories(
        &self,
        ids: &[String],
        status: &str,
    ) -> Result<u64, ApiError> {
        if ids.is_empty() {
            return Err(ApiError::BadRequest("No IDs provided".to_string()));
        }

        let placeholders = vec!["?"; ids.len()].join(", ");
        let query = format!(
            "UPDATE categories SET status = ?, updated_at = ? WHERE id IN ({})",
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
            return Err(ApiError::NotFound("No categories were updated".to_string()));
        }

        info!(count = result.rows_affected(), status = %status, "Bulk-updated category status");

        Ok(result.rows_affected())
    }

    /// Flip a category between show and hide
    pub async fn toggle_status(&self, category_id: &str) -> Result<Category, ApiError> {
        let category = self.get_category_by_id(category_id).await?;

        let new_status = if category.status.as_deref() == Some("show") {
            "hide"
        } else {
            "show"
        };

        let now = chrono::Utc::now().to_rfc3339();
        sqlx::query("UPDATE categories SET status = ?, updated_at = ? WHERE id = ?")
            .bind(new_status)
            .bind(&now)
            .bind(category_id)
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        self.get_category_by_id(category_id).await
    }
}
