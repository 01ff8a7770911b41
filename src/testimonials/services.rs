use super::models::{CreateTestimonialRequest, Testimonial, UpdateTestimonialRequest};
use crate::common::{generate_testimonial_id, ApiError};
use sqlx::SqlitePool;
use tracing::info;

pub struct TestimonialsService {
    db: SqlitePool,
}

impl TestimonialsService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn get_all_testimonials(&self) -> Result<Vec<Testimonial>, ApiError> {
        let testimonials =
            sqlx::query_as::<_, Testimonial>("SELECT * FROM testimonials ORDER BY created_at DESC")
                .fetch_all(&self.db)
                .await
                .map_err(ApiError::DatabaseError)?;

        Ok(testimonials)
    }

    pub async fn get_testimonial_by_id(
        &self,
        testimonial_id: &str,
    ) -> Result<Testimonial, ApiError> {
        let testimonial =
            sqlx::query_as::<_, Testimonial>("SELECT * FROM testimonials WHERE id = ?")
                .bind(testimonial_id)
                .fetch_optional(&self.db)
                .await
                .map_err(ApiError::DatabaseError)?
                .ok_or_else(|| {
                    ApiError::NotFound(format!(
                        "Testimonial with ID {} not found",
                        testimonial_id
                    ))
                })?;

        Ok(testimonial)
    }

    pub async fn create_testimonial(
        &self,
        request: CreateTestimonialRequest,
    ) -> Result<Testimonial, ApiError> {
        if request.name.trim().is_empty() {
            return Err(ApiError::ValidationError(
                "Testimonial name is required".to_string(),
            ));
        }

        if let Some(rating) = request.rating {
            if !(1..=5).contains(&rating) {
                return Err(ApiError::ValidationError(
                    "Rating must be between 1 and 5".to_string(),
                ));
            }
        }

        let testimonial_id = generate_testimonial_id();
        let now = chrono::Utc::now().to_rfc3339();
        let status = request.status.unwrap_or_else(|| "show".to_string());

        sqlx::query(
            r#"
            INSERT INTO testimonials (id, name, title, message, rating, avatar, status, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&testimonial_id)
        .bind(&request.name)
        .bind(&request.title)
        .bind(&request.message)
        .bind(request.rating)
        .bind(&request.avatar)
        .bind(&status)
        .bind(&now)
        .bind(&now)
        .execute(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        info!(testimonial_id = %testimonial_id, "Created testimonial");

        self.get_testimonial_by_id(&testimonial_id).await
    }

    pub async fn update_testimonial(
        &self,
        testimonial_id: &str,
        request: UpdateTestimonialRequest,
    ) -> Result<Testimonial, ApiError> {
        self.get_testimonial_by_id(testimonial_id).await?;

        let now = chrono::Utc::now().to_rfc3339();

        let mut updates = Vec::new();
        let mut params: Vec<String> = Vec::new();

        if let Some(name) = &request.name {
            if name.trim().is_empty() {
                return Err(ApiError::ValidationError(
                    "Testimonial name cannot be empty".to_string(),
                ));
            }
            updates.push("name = ?");
            params.push(name.clone());
        }

        if let Some(title) = &request.title {
            updates.push("title = ?");
            params.push(title.clone());
        }

        if let Some(message) = &request.message {
            updates.push("message = ?");
            params.push(message.clone());
        }

        if let Some(rating) = &request.rating {
            if !(1..=5).contains(rating) {
                return Err(ApiError::ValidationError(
                    "Rating must be between 1 and 5".to_string(),
                ));
            }
            updates.push("rating = ?");
            params.push(rating.to_string());
        }

        if let Some(avatar) = &request.avatar {
            updates.push("avatar = ?");
            params.push(avatar.clone());
        }

        if let Some(status) = &request.status {
            updates.push("status = ?");
            params.push(status.clone());
        }

        if updates.is_empty() {
            return self.get_testimonial_by_id(testimonial_id).await;
        }

        updates.push("updated_at = ?");
        params.push(now);
        params.push(testimonial_id.to_string());

        let query = format!("UPDATE testimonials SET {} WHERE id = ?", updates.join(", "));

        let mut query_builder = sqlx::query(&query);
        for param in params {
            query_builder = query_builder.bind(param);
        }

        query_builder
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        info!(testimonial_id = %testimonial_id, "Updated testimonial");

        self.get_testimonial_by_id(testimonial_id).await
    }

    pub async fn delete_testimonial(&self, testimonial_id: &str) -> Result<Testimonial, ApiError> {
        let testimonial = self.get_testimonial_by_id(testimonial_id).await?;

        sqlx::query("DELETE FROM testimonials WHERE id = ?")
            .bind(testimonial_id)
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        info!(testimonial_id = %testimonial_id, "Deleted testimonial");

        Ok(testimonial)
    }

    pub async fn delete_many_testimonials(
        &self,
        ids: &[String],
    ) -> Result<Vec<Testimonial>, ApiError> {
        if ids.is_empty() {
            return Err(ApiError::BadRequest("No IDs provided".to_string()));
        }

        let placeholders = vec!["?"; ids.len()].join(", ");
        let select = format!("SELECT * FROM testimonials WHERE id IN ({})", placeholders);

        let mut select_query = sqlx::query_as::<_, Testimonial>(&select);
        for id in ids {
            select_query = select_query.bind(id);
        }
        let testimonials = select_query
            .fetch_all(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        if testimonials.is_empty() {
            return Err(ApiError::NotFound(
                "No testimonials found with the provided IDs".to_string(),
            ));
        }

        let delete = format!("DELETE FROM testimonials WHERE id IN ({})", placeholders);
        let mut delete_query = sqlx::query(&delete);
        for id in ids {
            delete_query = delete_query.bind(id);
        }
        delete_query
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        info!(count = testimonials.len(), "Deleted testimonials");

        Ok(testimonials)
    }

    pub async fn update_many_testimonials(
        &self,
        ids: &[String],
        status: &str,
    ) -> Result<u64, ApiError> {
        if ids.is_empty() {
            return Err(ApiError::BadRequest("No IDs provided".to_string()));
        }

        let placeholders = vec!["?"; ids.len()].join(", ");
        let query = format!(
            "UPDATE testimonials SET status = ?, updated_at = ? WHERE id IN ({})",
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
            return Err(ApiError::NotFound(
                "No testimonials were updated".to_string(),
            ));
        }

        info!(count = result.rows_affected(), status = %status, "Bulk-updated testimonial status");

        Ok(result.rows_affected())
    }

    pub async fn toggle_status(&self, testimonial_id: &str) -> Result<Testimonial, ApiError> {
        let testimonial = self.get_testimonial_by_id(testimonial_id).await?;

        let new_status = if testimonial.status.as_deref() == Some("show") {
            "hide"
        } else {
            "show"
        };

        let now = chrono::Utc::now().to_rfc3339();
        sqlx::query("UPDATE testimonials SET status = ?, updated_at = ? WHERE id = ?")
            .bind(new_status)
            .bind(&now)
            .bind(testimonial_id)
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        self.get_testimonial_by_id(testimonial_id).await
    }
}
