use sqlx::SqlitePool;
use tracing::info;

use super::models::{Coupon, CreateCouponRequest, UpdateCouponRequest};
use crate::common::{generate_coupon_id, ApiError};

pub struct CouponsService {
    db: SqlitePool,
}

impl CouponsService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn get_all_coupons(&self) -> Result<Vec<Coupon>, ApiError> {
        let coupons = sqlx::query_as::<_, Coupon>(
            "SELECT * FROM coupons ORDER BY end_time ASC",
        )
        .fetch_all(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        Ok(coupons)
    }

    pub async fn get_coupon_by_id(&self, id: &str) -> Result<Coupon, ApiError> {
        let coupon = sqlx::query_as::<_, Coupon>("SELECT * FROM coupons WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        coupon.ok_or_else(|| ApiError::NotFound(format!("Coupon with ID {} not found", id)))
    }

    pub async fn add_coupon(&self, request: CreateCouponRequest) -> Result<Coupon, ApiError> {
        let id = generate_coupon_id();
        let now = chrono::Utc::now().to_rfc3339();
        let status = request.status.unwrap_or_else(|| "show".to_string());

        sqlx::query(
            r#"
            INSERT INTO coupons (
                id, title, coupon_code, end_time, discount_percentage,
                minimum_amount, product_type, logo, status, created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&request.title)
        .bind(&request.coupon_code)
        .bind(&request.end_time)
        .bind(request.discount_percentage)
        .bind(request.minimum_amount)
        .bind(&request.product_type)
        .bind(&request.logo)
        .bind(&status)
        .bind(&now)
        .bind(&now)
        .execute(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        info!("Created coupon {} ({})", request.title, id);

        self.get_coupon_by_id(&id).await
    }

    pub async fn add_all_coupons(
        &self,
        requests: Vec<CreateCouponRequest>,
    ) -> Result<u64, ApiError> {
        if requests.is_empty() {
            return Err(ApiError::BadRequest("No coupons provided".to_string()));
        }

        let mut tx = self.db.begin().await.map_err(ApiError::DatabaseError)?;
        let count = requests.len() as u64;

        for request in requests {
            let id = generate_coupon_id();
            let now = chrono::Utc::now().to_rfc3339();
            let status = request.status.unwrap_or_else(|| "show".to_string());

            sqlx::query(
                r#"
                INSERT INTO coupons (
                    id, title, coupon_code, end_time, discount_percentage,
                    minimum_amount, product_type, logo, status, created_at, updated_at
                )
                VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(&id)
            .bind(&request.title)
            .bind(&request.coupon_code)
            .bind(&request.end_time)
            .bind(request.discount_percentage)
            .bind(request.minimum_amount)
            .bind(&request.product_type)
            .bind(&request.logo)
            .bind(&status)
            .bind(&now)
            .bind(&now)
            .execute(&mut *tx)
            .await
            .map_err(ApiError::DatabaseError)?;
        }

        tx.commit().await.map_err(ApiError::DatabaseError)?;

        info!("Inserted {} coupons", count);

        Ok(count)
    }

    pub async fn update_coupon(
        &self,
        id: &str,
        request: UpdateCouponRequest,
    ) -> Result<Coupon, ApiError> {
        let existing = self.get_coupon_by_id(id).await?;

        let mut updates = Vec::new();
        let mut params: Vec<String> = Vec::new();

        if let Some(title) = request.title {
            updates.push("title = ?");
            params.push(title);
        }
        if let Some(coupon_code) = request.coupon_code {
            updates.push("coupon_code = ?");
            params.push(coupon_code);
        }
        if let Some(end_time) = request.end_time {
            updates.push("end_time = ?");
            params.push(end_time);
        }
        if let Some(discount_percentage) = request.discount_percentage {
            updates.push("discount_percentage = ?");
            params.push(discount_percentage.to_string());
        }
        if let Some(minimum_amount) = request.minimum_amount {
            updates.push("minimum_amount = ?");
            params.push(minimum_amount.to_string());
        }
        if let Some(product_type) = request.product_type {
            updates.push("product_type = ?");
            params.push(product_type);
        }
        if let Some(logo) = request.logo {
            updates.push("logo = ?");
            params.push(logo);
        }
        if let Some(status) = request.status {
            updates.push("status = ?");
            params.push(status);
        }

        if updates.is_empty() {
            return Ok(existing);
        }

        updates.push("updated_at = ?");
        params.push(chrono::Utc::now().to_rfc3339());

        let query = format!("UPDATE coupons SET {} WHERE id = ?", updates.join(", "));

        let mut query_builder = sqlx::query(&query);
        for param in &params {
            query_builder = query_builder.bind(param);
        }
        query_builder = query_builder.bind(id);

        query_builder
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        self.get_coupon_by_id(id).await
    }

    pub async fn update_many_coupons(
        &self,
        ids: &[String],
        fields: UpdateCouponRequest,
    ) -> Result<u64, ApiError> {
        if ids.is_empty() {
            return Err(ApiError::BadRequest("No coupon IDs provided".to_string()));
        }

        let mut updates = Vec::new();
        let mut params: Vec<String> = Vec::new();

        if let Some(title) = fields.title {
            updates.push("title = ?");
            params.push(title);
        }
        if let Some(coupon_code) = fields.coupon_code {
            updates.push("coupon_code = ?");
            params.push(coupon_code);
        }
        if let Some(end_time) = fields.end_time {
            updates.push("end_time = ?");
            params.push(end_time);
        }
        if let Some(discount_percentage) = fields.discount_percentage {
            updates.push("discount_percentage = ?");
            params.push(discount_percentage.to_string());
        }
        if let Some(minimum_amount) = fields.minimum_amount {
            updates.push("minimum_amount = ?");
            params.push(minimum_amount.to_string());
        }
        if let Some(product_type) = fields.product_type {
            updates.push("product_type = ?");
            params.push(product_type);
        }
        if let Some(logo) = fields.logo {
            updates.push("logo = ?");
            params.push(logo);
        }
        if let Some(status) = fields.status {
            updates.push("status = ?");
            params.push(status);
        }

        if updates.is_empty() {
            return Err(ApiError::BadRequest("No fields to update".to_string()));
        }

        updates.push("updated_at = ?");
        params.push(chrono::Utc::now().to_rfc3339());

        let placeholders = vec!["?"; ids.len()].join(", ");
        let query = format!(
            "UPDATE coupons SET {} WHERE id IN ({})",
            updates.join(", "),
            placeholders
        );

        let mut query_builder = sqlx::query(&query);
        for param in &params {
            query_builder = query_builder.bind(param);
        }
        for id in ids {
            query_builder = query_builder.bind(id);
        }

        let result = query_builder
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("No matching coupons found".to_string()));
        }

        info!("Updated {} coupons", result.rows_affected());

        Ok(result.rows_affected())
    }

    /// Flips visibility based on the status sent by the client: a coupon the
    /// client sees as "show" is hidden, anything else is shown.
    pub async fn toggle_status(
        &self,
        id: &str,
        current_status: Option<String>,
    ) -> Result<Coupon, ApiError> {
        self.get_coupon_by_id(id).await?;

        let next = match current_status.as_deref() {
            Some("show") => "hide",
            _ => "show",
        };

        sqlx::query("UPDATE coupons SET status = ?, updated_at = ? WHERE id = ?")
            .bind(next)
            .bind(chrono::Utc::now().to_rfc3339())
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        self.get_coupon_by_id(id).await
    }

    pub async fn delete_coupon(&self, id: &str) -> Result<Coupon, ApiError> {
        let coupon = self.get_coupon_by_id(id).await?;

        sqlx::query("DELETE FROM coupons WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        info!("Deleted coupon {}", id);

        Ok(coupon)
    }

    pub async fn delete_many_coupons(&self, ids: &[String]) -> Result<Vec<Coupon>, ApiError> {
        if ids.is_empty() {
            return Err(ApiError::BadRequest("No coupon IDs provided".to_string()));
        }

        let placeholders = vec!["?"; ids.len()].join(", ");

        let select = format!("SELECT * FROM coupons WHERE id IN ({})", placeholders);
        let mut select_builder = sqlx::query_as::<_, Coupon>(&select);
        for id in ids {
            select_builder = select_builder.bind(id);
        }
        let coupons = select_builder
            .fetch_all(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        if coupons.is_empty() {
            return Err(ApiError::NotFound("No matching coupons found".to_string()));
        }

        let delete = format!("DELETE FROM coupons WHERE id IN ({})", placeholders);
        let mut delete_builder = sqlx::query(&delete);
        for id in ids {
            delete_builder = delete_builder.bind(id);
        }
        delete_builder
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        info!("Deleted {} coupons", coupons.len());

        Ok(coupons)
    }
}
