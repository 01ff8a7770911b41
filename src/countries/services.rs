use super::models::{Country, CreateCountryRequest, UpdateCountryRequest};
use crate::common::{generate_country_id, ApiError};
use sqlx::SqlitePool;
use tracing::info;

pub struct CountriesService {
    db: SqlitePool,
}

impl CountriesService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn get_all_countries(&self) -> Result<Vec<Country>, ApiError> {
        let countries = sqlx::query_as::<_, Country>("SELECT * FROM countries ORDER BY name ASC")
            .fetch_all(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        Ok(countries)
    }

    pub async fn get_country_by_id(&self, country_id: &str) -> Result<Country, ApiError> {
        let country = sqlx::query_as::<_, Country>("SELECT * FROM countries WHERE id = ?")
            .bind(country_id)
            .fetch_optional(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?
            .ok_or_else(|| {
                ApiError::NotFound(format!("Country with ID {} not found", country_id))
            })?;

        Ok(country)
    }

    pub async fn create_country(&self, request: CreateCountryRequest) -> Result<Country, ApiError> {
        if request.name.trim().is_empty() {
            return Err(ApiError::ValidationError(
                "Country name is required".to_string(),
            ));
        }

        let country_id = generate_country_id();
        let now = chrono::Utc::now().to_rfc3339();
        let status = request.status.unwrap_or_else(|| "show".to_string());

        sqlx::query(
            r#"
            INSERT INTO countries (id, name, country_code, flag, status, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&country_id)
        .bind(&request.name)
        .bind(&request.country_code)
        .bind(&request.flag)
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

        info!(country_id = %country_id, "Created country");

        self.get_country_by_id(&country_id).await
    }

    pub async fn update_country(
        &self,
        country_id: &str,
        request: UpdateCountryRequest,
    ) -> Result<Country, ApiError> {
        self.get_country_by_id(country_id).await?;

        let now = chrono::Utc::now().to_rfc3339();

        let mut updates = Vec::new();
        let mut params: Vec<String> = Vec::new();

        if let Some(name) = &request.name {
            if name.trim().is_empty() {
                return Err(ApiError::ValidationError(
                    "Country name cannot be empty".to_string(),
                ));
            }
            updates.push("name = ?");
            params.push(name.clone());
        }

        if let Some(country_code) = &request.country_code {
            updates.push("country_code = ?");
            params.push(country_code.clone());
        }

        if let Some(flag) = &request.flag {
            updates.push("flag = ?");
            params.push(flag.clone());
        }

        if let Some(status) = &request.status {
            updates.push("status = ?");
            params.push(status.clone());
        }

        if updates.is_empty() {
            return self.get_country_by_id(country_id).await;
        }

        updates.push("updated_at = ?");
        params.push(now);
        params.push(country_id.to_string());

        let query = format!("UPDATE countries SET {} WHERE id = ?", updates.join(", "));

        let mut query_builder = sqlx::query(&query);
        for param in params {
            query_builder = query_builder.bind(param);
        }

        query_builder.execute(&self.db).await.map_err(|e| {
            if e.to_string().contains("UNIQUE constraint failed") {
                ApiError::Conflict("name already exists for another country".to_string())
            } else {
                ApiError::DatabaseError(e)
            }
        })?;

        info!(country_id = %country_id, "Updated country");

        self.get_country_by_id(country_id).await
    }

    pub async fn delete_country(&self, country_id: &str) -> Result<Country, ApiError> {
        let country = self.get_country_by_id(country_id).await?;

        sqlx::query("DELETE FROM countries WHERE id = ?")
            .bind(country_id)
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        info!(country_id = %country_id, "Deleted country");

        Ok(country)
    }

    pub async fn delete_many_countries(&self, ids: &[String]) -> Result<Vec<Country>, ApiError> {
        if ids.is_empty() {
            return Err(ApiError::BadRequest("No IDs provided".to_string()));
        }

        let placeholders = vec!["?"; ids.len()].join(", ");
        let select = format!("SELECT * FROM countries WHERE id IN ({})", placeholders);

        let mut select_query = sqlx::query_as::<_, Country>(&select);
        for id in ids {
            select_query = select_query.bind(id);
        }
        let countries = select_query
            .fetch_all(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        if countries.is_empty() {
            return Err(ApiError::NotFound(
                "No countries found with the provided IDs".to_string(),
            ));
        }

        let delete = format!("DELETE FROM countries WHERE id IN ({})", placeholders);
        let mut delete_query = sqlx::query(&delete);
        for id in ids {
            delete_query = delete_query.bind(id);
        }
        delete_query
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        info!(count = countries.len(), "Deleted countries");

        Ok(countries)
    }

    pub async fn update_many_countries(&self, ids: &[String], status: &str) -> Result<u64, ApiError> {
        if ids.is_empty() {
            return Err(ApiError::BadRequest("No IDs provided".to_string()));
        }

        let placeholders = vec!["?"; ids.len()].join(", ");
        let query = format!(
            "UPDATE countries SET status = ?, updated_at = ? WHERE id IN ({})",
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
            return Err(ApiError::NotFound("No countries were updated".to_string()));
        }

        info!(count = result.rows_affected(), status = %status, "Bulk-updated country status");

        Ok(result.rows_affected())
    }

    pub async fn toggle_status(&self, country_id: &str) -> Result<Country, ApiError> {
        let country = self.get_country_by_id(country_id).await?;

        let new_status = if country.status.as_deref() == Some("show") {
            "hide"
        } else {
            "show"
        };

        let now = chrono::Utc::now().to_rfc3339();
        sqlx::query("UPDATE countries SET status = ?, updated_at = ? WHERE id = ?")
            .bind(new_status)
            .bind(&now)
            .bind(country_id)
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        self.get_country_by_id(country_id).await
    }
}
