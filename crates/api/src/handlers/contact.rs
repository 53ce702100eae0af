//! Handlers for the contact form.

use axum::extract::State;
use axum::response::Html;
use axum::Form;
use contact_core::validation::spam::is_spam;
use contact_core::{validate, FieldErrors, RawSubmission, SanitizedSubmission, ValidationVerdict};

use crate::error::AppResult;
use crate::pages;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /
// ---------------------------------------------------------------------------

/// Render the empty contact form.
pub async fn show_form() -> Html<String> {
    pages::form_page(&SanitizedSubmission::default(), &FieldErrors::new())
}

// ---------------------------------------------------------------------------
// POST /
// ---------------------------------------------------------------------------

/// Validate a submitted form and persist it when accepted.
///
/// Oversized free-text fields are refused before the pipeline runs, unless
/// the honeypot is filled in: spam always gets its own page. Rejections
/// re-render the form with the sanitized values.
pub async fn submit_form(
    State(state): State<AppState>,
    Form(input): Form<RawSubmission>,
) -> AppResult<Html<String>> {
    if !is_spam(input.website.as_deref()) {
        input.check_bounds()?;
    }

    match validate(input) {
        ValidationVerdict::SpamRejected { errors } => Ok(pages::spam_page(&errors)),
        ValidationVerdict::Rejected { errors, submission } => {
            Ok(pages::form_page(&submission, &errors))
        }
        ValidationVerdict::Accepted(submission) => {
            let contact_id = state.store.save(&submission).await?;
            tracing::info!(contact_id, "Contact form submitted");
            Ok(pages::thank_you_page(&submission))
        }
    }
}
