use super::models::{Brand, CreateBrandRequest, UpdateBrandRequest};
use crate::common::{generate_brand_id, ApiError};
use sqlx::SqlitePool;
use tracing::info;

pub struct BrandsService {
    db: SqlitePool,
}

impl BrandsService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn get_all_brands(&self) -> Result<Vec<Brand>, ApiError> {
        let brands = sqlx::query_as::<_, Brand>("SELECT * FROM brands ORDER BY name ASC")
            .fetch_all(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        Ok(brands)
    }

    pub async fn get_brand_by_id(&self, brand_id: &str) -> Result<Brand, ApiError> {
        let brand = sqlx::query_as::<_, Brand>("SELECT * FROM brands WHERE id = ?")
            .bind(brand_id)
            .fetch_optional(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?
            .ok_or_else(|| ApiError::NotFound(format!("Brand with ID {} not found", brand_id)))?;

        Ok(brand)
    }

    pub async fn create_brand(&self, request: CreateBrandRequest) -> Result<Brand, ApiError> {
        if request.name.trim().is_empty() {
            return Err(ApiError::ValidationError(
                "Brand name is required".to_string(),
            ));
        }

        let brand_id = generate_brand_id();
        let now = chrono::Utc::now().to_rfc3339();
        let status = request.status.unwrap_or_else(|| "show".to_string());

        sqlx::query(
            r#"
            INSERT INTO brands (id, name, logo, website, status, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&brand_id)
        .bind(&request.name)
        .bind(&request.logo)
        .bind(&request.website)
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

        info!(brand_id = %brand_id, "Created brand");

        self.get_brand_by_id(&brand_id).await
    }

    pub async fn update_brand(
        &self,
        brand_id: &str,
        request: UpdateBrandRequest,
    ) -> Result<Brand, ApiError> {
        self.get_brand_by_id(brand_id).await?;

        let now = chrono::Utc::now().to_rfc3339();

        let mut updates = Vec::new();
        let mut params: Vec<String> = Vec::new();

        if let Some(name) = &request.name {
            if name.trim().is_empty() {
                return Err(ApiError::ValidationError(
                    "Brand name cannot be empty".to_string(),
                ));
            }
            updates.push("name = ?");
            params.push(name.clone());
        }

        if let Some(logo) = &request.logo {
            updates.push("logo = ?");
            params.push(logo.clone());
        }

        if let Some(website) = &request.website {
            updates.push("website = ?");
            params.push(website.clone());
        }

        if let Some(status) = &request.status {
            updates.push("status = ?");
            params.push(status.clone());
        }

        if updates.is_empty() {
            return self.get_brand_by_id(brand_id).await;
        }

        updates.push("updated_at = ?");
        params.push(now);
        params.push(brand_id.to_string());

        let query = format!("UPDATE brands SET {} WHERE id = ?", updates.join(", "));

        let mut query_builder = sqlx::query(&query);
        for param in params {
            query_builder = query_builder.bind(param);
        }

        query_builder.execute(&self.db).await.map_err(|e| {
            if e.to_string().contains("UNIQUE constraint failed") {
                ApiError::Conflict("name already exists for another brand".to_string())
            } else {
                ApiError::DatabaseError(e)
            }
        })?;

        info!(brand_id = %brand_id, "Updated brand");

        self.get_brand_by_id(brand_id).await
    }

    pub async fn delete_brand(&self, brand_id: &str) -> Result<Brand, ApiError> {
        let brand = self.get_brand_by_id(brand_id).await?;

        sqlx::query("DELETE FROM brands WHERE id = ?")
            .bind(brand_id)
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        info!(brand_id = %brand_id, "Deleted brand");

        Ok(brand)
    }

    pub async fn delete_many_brands(&self, ids: &[String]) -> Result<Vec<Brand>, ApiError> {
        if ids.is_empty() {
            return Err(ApiError::BadRequest("No IDs provided".to_string()));
        }

        let placeholders = vec!["?"; ids.len()].join(", ");
        let select = format!("SELECT * FROM brands WHERE id IN ({})", placeholders);

        let mut select_query = sqlx::query_as::<_, Brand>(&select);
        for id in ids {
            select_query = select_query.bind(id);
        }
        let brands = select_query
            .fetch_all(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        if brands.is_empty() {
            return Err(ApiError::NotFound(
                "No brands found with the provided IDs".to_string(),
            ));
        }

        let delete = format!("DELETE FROM brands WHERE id IN ({})", placeholders);
        let mut delete_query = sqlx::query(&delete);
        for id in ids {
            delete_query = delete_query.bind(id);
        }
        delete_query
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        info!(count = brands.len(), "Deleted brands");

        Ok(brands)
    }

    pub async fn update_many_brands(&self, ids: &[String], status: &str) -> Result<u64, ApiError> {
        if ids.is_empty() {
            return Err(ApiError::BadRequest("No IDs provided".to_string()));
        }

        let placeholders = vec!["?"; ids.len()].join(", ");
        let query = format!(
            "UPDATE brands SET status = ?, updated_at = ? WHERE id IN ({})",
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
            return Err(ApiError::NotFound("No brands were updated".to_string()));
        }

        info!(count = result.rows_affected(), status = %status, "Bulk-updated brand status");

        Ok(result.rows_affected())
    }

    pub async fn toggle_status(&self, brand_id: &str) -> Result<Brand, ApiError> {
        let brand = self.get_brand_by_id(brand_id).await?;

        let new_status = if brand.status.as_deref() == Some("show") {
            "hide"
        } else {
            "show"
        };

        let now = chrono::Utc::now().to_rfc3339();
        sqlx::query("UPDATE brands SET status = ?, updated_at = ? WHERE id = ?")
            .bind(new_status)
            .bind(&now)
            .bind(brand_id)
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        self.get_brand_by_id(brand_id).await
    }
}
