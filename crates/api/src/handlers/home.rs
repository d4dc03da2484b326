//! Landing page.

use axum::extract::State;
use axum::response::Html;

use crate::error::AppResult;
use crate::state::AppState;

/// GET / -- render the home page.
pub async fn home(State(state): State<AppState>) -> AppResult<Html<String>> {
    Ok(Html(state.views.home()?))
}
