use std::sync::Arc;

use folio_core::asset_store::AssetStore;

use crate::config::ServerConfig;
use crate::views::Views;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Constructed once at startup and injected into every handler; there is no
/// global store handle. Cheaply cloneable (inner data is behind `Arc` or is
/// already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: folio_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Compiled HTML templates.
    pub views: Arc<Views>,
    /// Storage for uploaded profile images.
    pub assets: Arc<dyn AssetStore>,
}
