//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no server or
//! database is needed.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use folio_api::error::AppError;
use folio_core::error::CoreError;
use http_body_util::BodyExt;

/// Helper: convert an `AppError` into its status code and HTML body.
async fn error_to_response(err: AppError) -> (StatusCode, String) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Profile",
        id: 42,
    });

    let (status, body) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Profile with id 42 not found"));
}

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("Email is required".into()));
    let (status, body) = error_to_response(err).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("Email is required"));
}

#[tokio::test]
async fn conflict_error_returns_409() {
    let err = AppError::Core(CoreError::Conflict("taken".into()));
    let (status, _) = error_to_response(err).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn internal_error_hides_details() {
    let err = AppError::InternalError("disk full at /var/secret".into());
    let (status, body) = error_to_response(err).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("An internal error occurred"));
    assert!(!body.contains("/var/secret"));
}

#[tokio::test]
async fn row_not_found_maps_to_404() {
    let (status, _) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn error_page_escapes_message() {
    let err = AppError::BadRequest("<script>alert(1)</script>".into());
    let (status, body) = error_to_response(err).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("&lt;script&gt;"));
    assert!(!body.contains("<script>"));
}
