//! Handlers for the contact form.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use folio_core::contact::{validate_message_form, MessageForm};
use folio_core::error::CoreError;
use folio_db::models::message::CreateMessage;
use folio_db::repositories::MessageRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// Where a successful contact submission redirects to.
pub const CONTACT_THANK_YOU_PATH: &str = "/contact/thankyou";

/// GET /contact -- render the empty contact form.
pub async fn contact_form(State(state): State<AppState>) -> AppResult<Html<String>> {
    Ok(Html(state.views.contact_form(&MessageForm::default(), None)?))
}

/// POST /contact -- store a message. Messages are never deduplicated.
pub async fn submit_message(
    State(state): State<AppState>,
    Form(form): Form<MessageForm>,
) -> AppResult<Response> {
    let valid = match validate_message_form(&form) {
        Ok(valid) => valid,
        Err(CoreError::Validation(msg)) => {
            let html = state.views.contact_form(&form, Some(&msg))?;
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response());
        }
        Err(other) => return Err(other.into()),
    };

    let message = MessageRepo::create(&state.pool, &CreateMessage::from(valid)).await?;
    tracing::info!(message_id = message.id, "Contact message stored");

    Ok(Redirect::to(CONTACT_THANK_YOU_PATH).into_response())
}

/// GET /contact/thankyou
pub async fn contact_thank_you(State(state): State<AppState>) -> AppResult<Html<String>> {
    Ok(Html(state.views.contact_thank_you()?))
}
