use axum::extract::State;
use axum::{routing::get, Json, Router};
use folio_db::repositories::ProfileRepo;
use serde::Serialize;

use crate::state::AppState;

/// Payload of `GET /health`, polled by the deployment's uptime check.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `"ok"` when the site can serve portfolios, `"degraded"` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Number of published portfolios; absent when the database is down.
    pub portfolios: Option<i64>,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let portfolios = match ProfileRepo::count(&state.pool).await {
        Ok(count) => Some(count),
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not count portfolios");
            None
        }
    };
    let db_healthy = portfolios.is_some();

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        portfolios,
    })
}

/// Mount health check routes.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
