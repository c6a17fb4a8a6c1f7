//! Suppression reason repository for corkboard.

use sqlx::SqlitePool;

use super::reason::SuppressionReason;
use crate::{CorkboardError, Result};

/// Repository for the suppression reason catalog.
pub struct ReasonRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ReasonRepository<'a> {
    /// Create a new ReasonRepository with the given pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Get an existing reason by code, or create it atomically.
    ///
    /// A single upsert statement keyed on the unique `code` column, so two
    /// concurrent calls with the same code cannot produce duplicate rows.
    pub async fn get_or_create(&self, code: &str) -> Result<SuppressionReason> {
        let reason = sqlx::query_as::<_, SuppressionReason>(
            "INSERT INTO suppression_reasons (code) VALUES (?)
             ON CONFLICT(code) DO UPDATE SET code = excluded.code
             RETURNING id, code, description",
        )
        .bind(code)
        .fetch_one(self.pool)
        .await
        .map_err(|e| CorkboardError::Database(e.to_string()))?;

        Ok(reason)
    }

    /// Get a reason by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<SuppressionReason>> {
        let result = sqlx::query_as::<_, SuppressionReason>(
            "SELECT id, code, description FROM suppression_reasons WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| CorkboardError::Database(e.to_string()))?;

        Ok(result)
    }
}
