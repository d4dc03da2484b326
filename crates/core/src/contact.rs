//! Contact form DTO and validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::profile::MAX_EMAIL_LENGTH;

/// Maximum length of the sender's name (characters).
pub const MAX_SENDER_NAME_LENGTH: u64 = 100;

/// Raw values of the contact form. Absent keys deserialize as empty.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(default)]
pub struct MessageForm {
    #[validate(length(min = 1, max = MAX_SENDER_NAME_LENGTH, message = "Name is required (at most 100 characters)"))]
    pub name: String,
    #[validate(length(min = 1, max = MAX_EMAIL_LENGTH, message = "Email is required (at most 120 characters)"))]
    pub email: String,
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

/// Trim the contact submission and check that every field is present.
pub fn validate_message_form(form: &MessageForm) -> Result<MessageForm, CoreError> {
    let trimmed = MessageForm {
        name: form.name.trim().to_string(),
        email: form.email.trim().to_string(),
        message: form.message.trim().to_string(),
    };
    trimmed.validate()?;
    Ok(trimmed)
}
