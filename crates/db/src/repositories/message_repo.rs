//! Repository for the `messages` table.

use sqlx::SqlitePool;

use crate::models::message::{CreateMessage, Message};

/// Column list for `messages` queries.
const COLUMNS: &str = "id, name, email, message, created_at";

/// Provides insert and count operations for contact messages.
pub struct MessageRepo;

impl MessageRepo {
    /// Insert a new message, returning the full row.
    pub async fn create(pool: &SqlitePool, input: &CreateMessage) -> Result<Message, sqlx::Error> {
        let query = format!(
            "INSERT INTO messages (name, email, message, created_at) \
             VALUES (?, ?, ?, ?) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Message>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.message)
            .bind(chrono::Utc::now())
            .fetch_one(pool)
            .await
    }

    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM messages")
            .fetch_one(pool)
            .await
    }
}
