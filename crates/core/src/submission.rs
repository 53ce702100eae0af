//! Submission data model: the untrusted input bundle and its sanitized form.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::sanitize::sanitize_text;

// ---------------------------------------------------------------------------
// Field names
// ---------------------------------------------------------------------------

pub const FIELD_FIRST_NAME: &str = "first_name";
pub const FIELD_LAST_NAME: &str = "last_name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_CONTINENT: &str = "continent";
pub const FIELD_MESSAGE: &str = "message";
pub const FIELD_GENDER: &str = "gender";
pub const FIELD_SUBJECT: &str = "subject";
/// Hidden honeypot field; humans never see it, naive bots fill it in.
pub const FIELD_HONEYPOT: &str = "website";

/// Maximum length of any submitted field, in characters.
pub const MAX_FIELD_LENGTH: usize = 100;

/// Subject used when the form omits the field entirely.
///
/// Not a member of `VALID_SUBJECTS`, so an absent subject is always rejected
/// with "Invalid subject".
pub const DEFAULT_SUBJECT: &str = "Others";

// ---------------------------------------------------------------------------
// RawSubmission
// ---------------------------------------------------------------------------

/// Untrusted form input exactly as received. Every attribute may be absent.
///
/// The five free-text fields carry `length` bounds, checked at the transport
/// boundary with [`RawSubmission::check_bounds`]; the field validators
/// re-check them so the pipeline stays safe when driven from elsewhere.
/// `gender` and `subject` are matched against fixed sets instead, and the
/// honeypot is never bounded so any filled value reaches the spam guard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RawSubmission {
    #[validate(length(max = 100))]
    pub first_name: Option<String>,
    #[validate(length(max = 100))]
    pub last_name: Option<String>,
    #[validate(length(max = 100))]
    pub email: Option<String>,
    #[validate(length(max = 100))]
    pub continent: Option<String>,
    #[validate(length(max = 100))]
    pub message: Option<String>,
    pub gender: Option<String>,
    pub subject: Option<String>,
    pub website: Option<String>,
}

impl RawSubmission {
    /// Reject input whose free-text fields exceed [`MAX_FIELD_LENGTH`] characters.
    ///
    /// The error names every offending field, sorted.
    pub fn check_bounds(&self) -> Result<(), CoreError> {
        self.validate().map_err(|errors| {
            let mut fields: Vec<String> = errors
                .field_errors()
                .into_keys()
                .map(|field| field.to_string())
                .collect();
            fields.sort();
            CoreError::Validation(format!(
                "Fields exceed maximum length of {MAX_FIELD_LENGTH} characters: {}",
                fields.join(", ")
            ))
        })
    }
}

// ---------------------------------------------------------------------------
// SanitizedSubmission
// ---------------------------------------------------------------------------

/// The seven persisted fields after sanitization.
///
/// Free-text fields have had the denylist stripped; `gender` and `subject`
/// are carried verbatim because they are matched exactly against fixed sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SanitizedSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub continent: String,
    pub message: String,
    pub gender: String,
    pub subject: String,
}

impl SanitizedSubmission {
    /// Build the sanitized view of `raw`. Absent attributes become empty
    /// strings, except `subject` which falls back to [`DEFAULT_SUBJECT`].
    pub fn from_raw(raw: &RawSubmission) -> Self {
        let text = |value: &Option<String>| sanitize_text(value.as_deref().unwrap_or_default());

        Self {
            first_name: text(&raw.first_name),
            last_name: text(&raw.last_name),
            email: text(&raw.email),
            continent: text(&raw.continent),
            message: text(&raw.message),
            gender: raw.gender.clone().unwrap_or_default(),
            subject: raw
                .subject
                .clone()
                .unwrap_or_else(|| DEFAULT_SUBJECT.to_string()),
        }
    }
}

impl From<SanitizedSubmission> for RawSubmission {
    fn from(s: SanitizedSubmission) -> Self {
        Self {
            first_name: Some(s.first_name),
            last_name: Some(s.last_name),
            email: Some(s.email),
            continent: Some(s.continent),
            message: Some(s.message),
            gender: Some(s.gender),
            subject: Some(s.subject),
            website: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
