use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A stored part-time posting. Contact and requirement fields hold both the
/// raw user text and the values derived from it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PartTimePostingRow {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub salary: Option<String>,
    pub location: Option<String>,
    pub contact: String,
    pub contact_method: String,
    pub contact_normalized: String,
    pub requirements: Option<String>,
    pub gender: String,
    pub requirement_extra: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
