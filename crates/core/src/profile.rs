//! Portfolio submission form, its validation rules, and the text helpers
//! used when rendering a profile.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of the first and last name (characters).
pub const MAX_NAME_LENGTH: u64 = 50;

/// Maximum length of the email address (characters).
pub const MAX_EMAIL_LENGTH: u64 = 120;

/// Maximum length of the phone number (characters).
pub const MAX_PHONE_LENGTH: u64 = 15;

/// Multipart field name carrying the optional profile image.
pub const PICTURE_FIELD: &str = "profile_picture";

/// Message shown when a submission reuses an existing profile's email.
pub const DUPLICATE_EMAIL_MESSAGE: &str =
    "This email is already in use. Please use another email.";

// ---------------------------------------------------------------------------
// Form DTO
// ---------------------------------------------------------------------------

/// Raw values of the "create portfolio" form.
///
/// Every key defaults to an empty string so an absent field is reported by
/// validation instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(default)]
pub struct ProfileForm {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH, message = "First name is required (at most 50 characters)"))]
    pub first_name: String,
    #[validate(length(min = 1, max = MAX_NAME_LENGTH, message = "Last name is required (at most 50 characters)"))]
    pub last_name: String,
    #[validate(length(min = 1, max = MAX_EMAIL_LENGTH, message = "Email is required (at most 120 characters)"))]
    pub email: String,
    #[validate(length(min = 1, max = MAX_PHONE_LENGTH, message = "Phone is required (at most 15 characters)"))]
    pub phone: String,
    pub bio: String,
    pub skills: String,
    pub links: String,
}

impl ProfileForm {
    /// Assign a text field by its form name. Unknown names are ignored.
    pub fn set_field(&mut self, name: &str, value: String) {
        let slot = match name {
            "first_name" => &mut self.first_name,
            "last_name" => &mut self.last_name,
            "email" => &mut self.email,
            "phone" => &mut self.phone,
            "bio" => &mut self.bio,
            "skills" => &mut self.skills,
            "links" => &mut self.links,
            _ => return,
        };
        *slot = value;
    }

    /// Return a copy with surrounding whitespace removed from every field.
    pub fn trimmed(&self) -> Self {
        Self {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            bio: self.bio.trim().to_string(),
            skills: self.skills.trim().to_string(),
            links: self.links.trim().to_string(),
        }
    }
}

/// Trim the submission and check required fields and length limits.
///
/// Returns the trimmed form on success; that is the value to persist.
pub fn validate_profile_form(form: &ProfileForm) -> Result<ProfileForm, CoreError> {
    let trimmed = form.trimmed();
    trimmed.validate()?;
    Ok(trimmed)
}

/// Map an empty optional text field to `None`.
pub fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

// ---------------------------------------------------------------------------
// Rendering helpers
// ---------------------------------------------------------------------------

/// Split the free-form skills text on commas and newlines.
///
/// Blank entries are dropped.
pub fn split_skills(skills: &str) -> Vec<String> {
    skills
        .split([',', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split the free-form links text on whitespace and commas.
pub fn split_links(links: &str) -> Vec<String> {
    links
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Whether a link looks like an absolute http(s) URL and can be made clickable.
pub fn is_web_link(link: &str) -> bool {
    link.starts_with("http://") || link.starts_with("https://")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
