//! Persistence seam for part-time postings.
//!
//! `AppState` holds an `Arc<dyn PostingStore>`. Production uses
//! [`PgPostingStore`]; handler tests swap in an in-memory store.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::posting::PartTimePostingRow;
use crate::parttime::posting::PostingRecord;

#[async_trait]
pub trait PostingStore: Send + Sync {
    async fn create(&self, record: PostingRecord) -> Result<PartTimePostingRow, AppError>;

    async fn get(&self, id: Uuid) -> Result<Option<PartTimePostingRow>, AppError>;

    /// Newest first.
    async fn list(&self) -> Result<Vec<PartTimePostingRow>, AppError>;

    /// Returns `None` when no posting has this id.
    async fn update(
        &self,
        id: Uuid,
        record: PostingRecord,
    ) -> Result<Option<PartTimePostingRow>, AppError>;

    /// Returns whether a posting was removed.
    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;
}

pub struct PgPostingStore {
    pool: PgPool,
}

impl PgPostingStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostingStore for PgPostingStore {
    async fn create(&self, record: PostingRecord) -> Result<PartTimePostingRow, AppError> {
        let row: PartTimePostingRow = sqlx::query_as(
            r#"
            INSERT INTO parttime_postings
                (id, title, description, salary, location, contact, contact_method,
                 contact_normalized, requirements, gender, requirement_extra)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&record.title)
        .bind(&record.description)
        .bind(&record.salary)
        .bind(&record.location)
        .bind(&record.contact)
        .bind(&record.contact_method)
        .bind(&record.contact_normalized)
        .bind(&record.requirements)
        .bind(&record.gender)
        .bind(&record.requirement_extra)
        .fetch_one(&self.pool)
        .await?;

        info!(posting_id = %row.id, method = %row.contact_method, "Part-time posting created");
        Ok(row)
    }

    async fn get(&self, id: Uuid) -> Result<Option<PartTimePostingRow>, AppError> {
        let row = sqlx::query_as("SELECT * FROM parttime_postings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn list(&self) -> Result<Vec<PartTimePostingRow>, AppError> {
        let rows = sqlx::query_as("SELECT * FROM parttime_postings ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn update(
        &self,
        id: Uuid,
        record: PostingRecord,
    ) -> Result<Option<PartTimePostingRow>, AppError> {
        let row: Option<PartTimePostingRow> = sqlx::query_as(
            r#"
            UPDATE parttime_postings
            SET title = $2, description = $3, salary = $4, location = $5,
                contact = $6, contact_method = $7, contact_normalized = $8,
                requirements = $9, gender = $10, requirement_extra = $11,
                updated_at = $12
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&record.title)
        .bind(&record.description)
        .bind(&record.salary)
        .bind(&record.location)
        .bind(&record.contact)
        .bind(&record.contact_method)
        .bind(&record.contact_normalized)
        .bind(&record.requirements)
        .bind(&record.gender)
        .bind(&record.requirement_extra)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        if row.is_some() {
            info!(posting_id = %id, "Part-time posting updated");
        }
        Ok(row)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM parttime_postings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        let removed = result.rows_affected() > 0;
        if removed {
            info!(posting_id = %id, "Part-time posting deleted");
        }
        Ok(removed)
    }
}
