//! Route definitions for the contact form.

use axum::routing::get;
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// Contact form routes.
///
/// ```text
/// GET    /                  -> show_form
/// POST   /                  -> submit_form
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(contact::show_form).post(contact::submit_form))
}
