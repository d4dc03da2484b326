//! Contact message entity model and DTO.

use folio_core::contact::MessageForm;
use folio_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `messages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Message {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: Timestamp,
}

/// DTO for inserting a new contact message.
#[derive(Debug, Clone)]
pub struct CreateMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl From<MessageForm> for CreateMessage {
    fn from(form: MessageForm) -> Self {
        Self {
            name: form.name,
            email: form.email,
            message: form.message,
        }
    }
}
