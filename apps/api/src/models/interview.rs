use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// A completed interview as stored in the `interviews` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InterviewRow {
    pub id: Uuid,
    pub user_id: String,
    pub role: String,
    pub chat: Value,
    pub review: String,
    pub created_at: DateTime<Utc>,
}
