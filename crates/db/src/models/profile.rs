//! Profile entity model and DTO.

use folio_core::profile::{non_empty, ProfileForm};
use folio_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `profiles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Profile {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub bio: Option<String>,
    pub skills: Option<String>,
    /// Asset key of the uploaded image, if one was supplied.
    pub profile_picture: Option<String>,
    pub links: Option<String>,
    pub created_at: Timestamp,
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// DTO for inserting a new profile.
#[derive(Debug, Clone)]
pub struct CreateProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub bio: Option<String>,
    pub skills: Option<String>,
    pub profile_picture: Option<String>,
    pub links: Option<String>,
}

impl CreateProfile {
    /// Build the insert DTO from an already validated form.
    ///
    /// Empty optional fields are stored as `NULL`.
    pub fn from_form(form: &ProfileForm, profile_picture: Option<String>) -> Self {
        Self {
            first_name: form.first_name.clone(),
            last_name: form.last_name.clone(),
            email: form.email.clone(),
            phone: form.phone.clone(),
            bio: non_empty(&form.bio),
            skills: non_empty(&form.skills),
            profile_picture,
            links: non_empty(&form.links),
        }
    }
}
