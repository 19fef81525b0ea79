//! Review persistence — a single best-effort insert per completed interview.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::interview::InterviewRow;
use crate::models::Turn;

/// Identifier recorded when no identity was forwarded.
pub const ANONYMOUS_USER: &str = "anonymous";

/// A completed interview ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRecord {
    pub user_id: String,
    pub role: String,
    pub transcript: Vec<Turn>,
    pub review: String,
}

/// The persistence boundary. Write-once: there is no update or delete path.
#[async_trait]
pub trait ReviewStore: Send + Sync {
    async fn save(&self, record: &ReviewRecord) -> Result<()>;
}

/// `ReviewStore` backed by the `interviews` table.
pub struct PgReviewStore {
    pool: PgPool,
}

impl PgReviewStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewStore for PgReviewStore {
    async fn save(&self, record: &ReviewRecord) -> Result<()> {
        // Append-only INSERT
        let row = sqlx::query_as::<_, InterviewRow>(
            r#"
            INSERT INTO interviews (id, user_id, role, chat, review)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&record.user_id)
        .bind(&record.role)
        .bind(Json(&record.transcript))
        .bind(&record.review)
        .fetch_one(&self.pool)
        .await?;

        info!(
            "Saved interview {} for user {} at {}",
            row.id, row.user_id, row.created_at
        );
        Ok(())
    }
}

/// Writes the record once; any failure is logged and swallowed.
///
/// Returns whether the write succeeded so callers can log or test it, but the
/// outcome must never change the response already computed.
pub async fn persist_best_effort(store: &dyn ReviewStore, record: &ReviewRecord) -> bool {
    match store.save(record).await {
        Ok(()) => true,
        Err(e) => {
            warn!("Database save failed (continuing anyway): {e:#}");
            false
        }
    }
}
