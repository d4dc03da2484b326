//! Repository for the `profiles` table.

use folio_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::profile::{CreateProfile, Profile};

/// Column list for `profiles` queries.
const COLUMNS: &str = "\
    id, first_name, last_name, email, phone, bio, skills, \
    profile_picture, links, created_at";

/// Provides insert and lookup operations for profiles.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Insert a new profile, returning the full row with its assigned id.
    ///
    /// Fails with a unique violation (`uq_profiles_email`) if the email is
    /// already taken.
    pub async fn create(pool: &SqlitePool, input: &CreateProfile) -> Result<Profile, sqlx::Error> {
        let query = format!(
            "INSERT INTO profiles \
                (first_name, last_name, email, phone, bio, skills, \
                 profile_picture, links, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.bio)
            .bind(&input.skills)
            .bind(&input.profile_picture)
            .bind(&input.links)
            .bind(chrono::Utc::now())
            .fetch_one(pool)
            .await
    }

    /// Find a profile by ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE id = ?");
        sqlx::query_as::<_, Profile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the profile owning `email` (exact match).
    pub async fn find_by_email(
        pool: &SqlitePool,
        email: &str,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE email = ?");
        sqlx::query_as::<_, Profile>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// The most recently inserted profile, or `None` if there are none.
    pub async fn latest(pool: &SqlitePool) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles ORDER BY id DESC LIMIT 1");
        sqlx::query_as::<_, Profile>(&query)
            .fetch_optional(pool)
            .await
    }

    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM profiles")
            .fetch_one(pool)
            .await
    }
}
