//! Integration tests for the profile and message repositories.
//!
//! Exercises the repository layer against a real SQLite database:
//! - Sequential id assignment and lookup
//! - Email uniqueness enforced by `uq_profiles_email`
//! - Latest-profile ordering
//! - Message counting

use folio_core::contact::MessageForm;
use folio_core::profile::ProfileForm;
use folio_db::models::message::CreateMessage;
use folio_db::models::profile::CreateProfile;
use folio_db::repositories::{MessageRepo, ProfileRepo};
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_profile(first_name: &str, email: &str) -> CreateProfile {
    let form = ProfileForm {
        first_name: first_name.to_string(),
        last_name: "Lee".to_string(),
        email: email.to_string(),
        phone: "555".to_string(),
        ..Default::default()
    };
    CreateProfile::from_form(&form, None)
}

fn new_message(name: &str) -> CreateMessage {
    MessageForm {
        name: name.to_string(),
        email: "visitor@x.com".to_string(),
        message: "Hello there".to_string(),
    }
    .into()
}

// ---------------------------------------------------------------------------
// Profiles
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_create_and_fetch_profile(pool: SqlitePool) {
    let created = ProfileRepo::create(&pool, &new_profile("Ann", "ann@x.com"))
        .await
        .unwrap();
    assert_eq!(created.id, 1);
    assert_eq!(created.full_name(), "Ann Lee");

    let fetched = ProfileRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("profile should exist");
    assert_eq!(fetched.email, "ann@x.com");
    assert_eq!(fetched.created_at, created.created_at);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_empty_optional_fields_are_stored_as_null(pool: SqlitePool) {
    let created = ProfileRepo::create(&pool, &new_profile("Ann", "ann@x.com"))
        .await
        .unwrap();
    assert_eq!(created.bio, None);
    assert_eq!(created.skills, None);
    assert_eq!(created.links, None);
    assert_eq!(created.profile_picture, None);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_ids_are_sequential(pool: SqlitePool) {
    let first = ProfileRepo::create(&pool, &new_profile("Ann", "ann@x.com"))
        .await
        .unwrap();
    let second = ProfileRepo::create(&pool, &new_profile("Bea", "bea@x.com"))
        .await
        .unwrap();
    assert_eq!(second.id, first.id + 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_find_missing_profile_returns_none(pool: SqlitePool) {
    let found = ProfileRepo::find_by_id(&pool, 999_999).await.unwrap();
    assert!(found.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_find_by_email(pool: SqlitePool) {
    ProfileRepo::create(&pool, &new_profile("Ann", "ann@x.com"))
        .await
        .unwrap();

    let found = ProfileRepo::find_by_email(&pool, "ann@x.com").await.unwrap();
    assert_eq!(found.map(|p| p.first_name), Some("Ann".to_string()));

    let missing = ProfileRepo::find_by_email(&pool, "nobody@x.com").await.unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_email_rejected_by_constraint(pool: SqlitePool) {
    ProfileRepo::create(&pool, &new_profile("Ann", "ann@x.com"))
        .await
        .unwrap();

    let err = ProfileRepo::create(&pool, &new_profile("Impostor", "ann@x.com"))
        .await
        .unwrap_err();
    assert!(folio_db::is_unique_violation(&err), "got: {err}");
    assert_eq!(ProfileRepo::count(&pool).await.unwrap(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_latest_returns_most_recent(pool: SqlitePool) {
    assert!(ProfileRepo::latest(&pool).await.unwrap().is_none());

    ProfileRepo::create(&pool, &new_profile("P1", "p1@x.com"))
        .await
        .unwrap();
    let p2 = ProfileRepo::create(&pool, &new_profile("P2", "p2@x.com"))
        .await
        .unwrap();

    let latest = ProfileRepo::latest(&pool).await.unwrap().unwrap();
    assert_eq!(latest.id, p2.id);
    assert_eq!(latest.first_name, "P2");
}

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_messages_are_never_deduplicated(pool: SqlitePool) {
    for expected in 1..=3 {
        let message = MessageRepo::create(&pool, &new_message("Bo")).await.unwrap();
        assert_eq!(message.name, "Bo");
        assert_eq!(MessageRepo::count(&pool).await.unwrap(), expected);
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_non_database_errors_are_not_unique_violations(pool: SqlitePool) {
    let err = sqlx::query("SELECT * FROM no_such_table")
        .execute(&pool)
        .await
        .unwrap_err();
    assert!(!folio_db::is_unique_violation(&err));
    assert!(!folio_db::is_unique_violation(&sqlx::Error::RowNotFound));
}
