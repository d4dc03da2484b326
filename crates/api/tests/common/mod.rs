#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, Response};
use axum::Router;
use folio_core::asset_store::{AssetStore, LocalAssetStore};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tempfile::TempDir;
use tower::ServiceExt;

use folio_api::config::ServerConfig;
use folio_api::router::build_app_router;
use folio_api::state::AppState;
use folio_api::views::Views;

/// Multipart boundary used by [`post_multipart`].
const BOUNDARY: &str = "folio-test-boundary";

/// A router wired to a test database and a throwaway asset directory.
///
/// The directory lives as long as this value.
pub struct TestApp {
    pub router: Router,
    pub assets_dir: TempDir,
}

impl TestApp {
    /// Fresh handle to the router for one request.
    pub fn app(&self) -> Router {
        self.router.clone()
    }

    /// Directory uploaded images are written to.
    pub fn asset_path(&self) -> &Path {
        self.assets_dir.path()
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(asset_dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        asset_dir: asset_dir.to_string_lossy().to_string(),
        request_timeout_secs: 30,
        max_upload_bytes: 1024 * 1024,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// Uses the same [`build_app_router`] as `main.rs` so integration tests
/// exercise the production middleware stack.
pub fn build_test_app(pool: SqlitePool) -> TestApp {
    build_test_app_with_assets(pool, |dir| Arc::new(LocalAssetStore::new(dir)))
}

/// Like [`build_test_app`], but with an asset store built by `make_store`
/// on top of the temporary asset directory.
pub fn build_test_app_with_assets<F>(pool: SqlitePool, make_store: F) -> TestApp
where
    F: FnOnce(&Path) -> Arc<dyn AssetStore>,
{
    let assets_dir = tempfile::tempdir().unwrap();
    let config = test_config(assets_dir.path());

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        views: Arc::new(Views::new().unwrap()),
        assets: make_store(assets_dir.path()),
    };

    TestApp {
        router: build_app_router(state, &config),
        assets_dir,
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST an `application/x-www-form-urlencoded` body.
pub async fn post_form(app: Router, uri: &str, fields: &[(&str, &str)]) -> Response<Body> {
    let body = serde_urlencoded::to_string(fields).unwrap();
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// An uploaded file for [`post_multipart`]: field name, filename, bytes.
pub struct FilePart<'a> {
    pub field: &'a str,
    pub file_name: &'a str,
    pub bytes: &'a [u8],
}

/// POST a `multipart/form-data` body with text fields and optional files.
pub async fn post_multipart(
    app: Router,
    uri: &str,
    fields: &[(&str, &str)],
    files: &[FilePart<'_>],
) -> Response<Body> {
    let mut body: Vec<u8> = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    for file in files {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n\
                 Content-Type: application/octet-stream\r\n\r\n",
                file.field, file.file_name
            )
            .as_bytes(),
        );
        body.extend_from_slice(file.bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// `Location` header of a redirect response.
pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get("location")
        .expect("redirect must carry a Location header")
        .to_str()
        .unwrap()
}
