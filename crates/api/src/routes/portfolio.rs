//! Route definitions for portfolio submission and display.

use axum::routing::get;
use axum::Router;

use crate::handlers::portfolio;
use crate::state::AppState;

/// Portfolio routes.
///
/// ```text
/// GET    /create-portfolio    -> new_portfolio
/// POST   /create-portfolio    -> create_portfolio
/// GET    /portfolio/{id}      -> show_portfolio
/// GET    /thankyou            -> thank_you
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/create-portfolio",
            get(portfolio::new_portfolio).post(portfolio::create_portfolio),
        )
        .route("/portfolio/{id}", get(portfolio::show_portfolio))
        .route(portfolio::THANK_YOU_PATH, get(portfolio::thank_you))
}
