//! Route definitions for the contact form.

use axum::routing::get;
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// Contact routes.
///
/// ```text
/// GET    /contact             -> contact_form
/// POST   /contact             -> submit_message
/// GET    /contact/thankyou    -> contact_thank_you
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/contact",
            get(contact::contact_form).post(contact::submit_message),
        )
        .route(contact::CONTACT_THANK_YOU_PATH, get(contact::contact_thank_you))
}
