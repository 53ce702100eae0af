//! Verdict builder: the single entry point of the pipeline.
//!
//! Spam detection fails fast; field validation fails complete. A tripped
//! honeypot ends evaluation immediately, otherwise every field validator
//! runs so the caller gets the whole error map at once.

use std::collections::BTreeMap;

use super::rules::FIELD_VALIDATORS;
use super::spam::{is_spam, SPAM_MESSAGE};
use crate::submission::{RawSubmission, SanitizedSubmission, FIELD_MESSAGE};

/// Field name to its single error message.
pub type FieldErrors = BTreeMap<&'static str, &'static str>;

/// Terminal outcome of validating one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationVerdict {
    /// Every rule passed; the payload is ready to persist.
    Accepted(SanitizedSubmission),
    /// One or more fields failed. Carries the sanitized values for re-display.
    Rejected {
        errors: FieldErrors,
        submission: SanitizedSubmission,
    },
    /// The honeypot was filled in. Only the spam marker is reported.
    SpamRejected { errors: FieldErrors },
}

impl ValidationVerdict {
    /// Error map of a rejection; `None` when accepted.
    pub fn errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Accepted(_) => None,
            Self::Rejected { errors, .. } | Self::SpamRejected { errors } => Some(errors),
        }
    }
}

/// Run the full pipeline over one raw submission.
pub fn validate(raw: RawSubmission) -> ValidationVerdict {
    if is_spam(raw.website.as_deref()) {
        tracing::warn!("Honeypot field filled in, rejecting submission as spam");
        return ValidationVerdict::SpamRejected {
            errors: FieldErrors::from([(FIELD_MESSAGE, SPAM_MESSAGE)]),
        };
    }

    let submission = SanitizedSubmission::from_raw(&raw);
    let errors = collect_field_errors(&submission);

    if errors.is_empty() {
        tracing::debug!("Submission accepted");
        ValidationVerdict::Accepted(submission)
    } else {
        tracing::debug!(
            fields = ?errors.keys().collect::<Vec<_>>(),
            "Submission rejected",
        );
        ValidationVerdict::Rejected { errors, submission }
    }
}

/// Evaluate every field validator, keeping each failing field's message.
pub fn collect_field_errors(submission: &SanitizedSubmission) -> FieldErrors {
    FIELD_VALIDATORS
        .iter()
        .filter_map(|(field, validator)| validator(submission).map(|message| (*field, message)))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
