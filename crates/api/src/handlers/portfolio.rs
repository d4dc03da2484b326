//! Handlers for portfolio submission and display.
//!
//! Submission validates the form, rejects emails that already belong to a
//! profile, stores the optional image and inserts the profile. Rejected
//! submissions re-render the form with the values the user typed.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use folio_core::error::CoreError;
use folio_core::profile::{validate_profile_form, ProfileForm, DUPLICATE_EMAIL_MESSAGE};
use folio_core::types::DbId;
use folio_db::models::profile::CreateProfile;
use folio_db::repositories::ProfileRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ProfileSubmission;
use crate::state::AppState;

/// Where a successful submission redirects to.
pub const THANK_YOU_PATH: &str = "/thankyou";

// ---------------------------------------------------------------------------
// GET /create-portfolio
// ---------------------------------------------------------------------------

/// Render the empty entry form.
pub async fn new_portfolio(State(state): State<AppState>) -> AppResult<Html<String>> {
    Ok(Html(state.views.entry_form(&ProfileForm::default(), None)?))
}

// ---------------------------------------------------------------------------
// POST /create-portfolio
// ---------------------------------------------------------------------------

/// Submit a new portfolio.
///
/// - Missing or overlong required field: 422 with the form and the problem.
/// - Email already used by a profile: 200 with the form and an error.
/// - Otherwise: 303 to `/thankyou`.
pub async fn create_portfolio(
    State(state): State<AppState>,
    submission: ProfileSubmission,
) -> AppResult<Response> {
    let ProfileSubmission { form, picture } = submission;

    let valid = match validate_profile_form(&form) {
        Ok(valid) => valid,
        Err(CoreError::Validation(msg)) => {
            return rerender(&state, &form.trimmed(), StatusCode::UNPROCESSABLE_ENTITY, &msg);
        }
        Err(other) => return Err(other.into()),
    };

    if ProfileRepo::find_by_email(&state.pool, &valid.email)
        .await?
        .is_some()
    {
        tracing::warn!(email = %valid.email, "Rejected portfolio with duplicate email");
        return rerender(&state, &valid, StatusCode::OK, DUPLICATE_EMAIL_MESSAGE);
    }

    let picture_key = match &picture {
        Some(upload) => Some(state.assets.save(&upload.file_name, &upload.bytes).await?),
        None => None,
    };

    let input = CreateProfile::from_form(&valid, picture_key.clone());
    let profile = match ProfileRepo::create(&state.pool, &input).await {
        Ok(profile) => profile,
        // Lost the race against a concurrent submission with the same email.
        Err(err) if folio_db::is_unique_violation(&err) => {
            discard_asset(&state, picture_key.as_deref()).await;
            tracing::warn!(email = %valid.email, "Duplicate email caught by constraint");
            return rerender(&state, &valid, StatusCode::OK, DUPLICATE_EMAIL_MESSAGE);
        }
        Err(err) => {
            discard_asset(&state, picture_key.as_deref()).await;
            return Err(err.into());
        }
    };

    tracing::info!(
        profile_id = profile.id,
        has_picture = profile.profile_picture.is_some(),
        "Portfolio created",
    );

    Ok(Redirect::to(THANK_YOU_PATH).into_response())
}

fn rerender(
    state: &AppState,
    form: &ProfileForm,
    status: StatusCode,
    error: &str,
) -> AppResult<Response> {
    let html = state.views.entry_form(form, Some(error))?;
    Ok((status, Html(html)).into_response())
}

/// Remove an image stored for a submission that was not persisted.
async fn discard_asset(state: &AppState, key: Option<&str>) {
    let Some(key) = key else {
        return;
    };
    if let Err(e) = state.assets.remove(key).await {
        tracing::error!(asset_key = %key, error = %e, "Failed to remove orphaned asset");
    }
}

// ---------------------------------------------------------------------------
// GET /portfolio/{id}
// ---------------------------------------------------------------------------

/// Render a single portfolio. Unknown or non-numeric ids yield 404.
pub async fn show_portfolio(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Html<String>> {
    let id: DbId = raw_id
        .parse()
        .map_err(|_| AppError::NotFound(format!("No portfolio at '{raw_id}'")))?;

    let profile = ProfileRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Profile",
            id,
        })?;

    Ok(Html(state.views.portfolio(&profile)?))
}

// ---------------------------------------------------------------------------
// GET /thankyou
// ---------------------------------------------------------------------------

/// Confirmation page showing the most recently created portfolio.
pub async fn thank_you(State(state): State<AppState>) -> AppResult<Html<String>> {
    let latest = ProfileRepo::latest(&state.pool).await?;
    Ok(Html(state.views.thank_you(latest.as_ref())?))
}
