pub mod contact;
pub mod health;
pub mod portfolio;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the site route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                         home
/// /create-portfolio         entry form (GET), submit profile (POST)
/// /portfolio/{id}           profile view
/// /thankyou                 latest profile confirmation
/// /contact                  contact form (GET), submit message (POST)
/// /contact/thankyou         contact confirmation
/// ```
pub fn site_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::home::home))
        .merge(portfolio::router())
        .merge(contact::router())
}
