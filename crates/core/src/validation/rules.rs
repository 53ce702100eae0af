//! Per-field validation rules.
//!
//! Every validator looks at one field of a [`SanitizedSubmission`] and
//! returns at most one message. Within a field the first failing rule wins.

use std::sync::LazyLock;

use regex::Regex;

use crate::submission::{
    SanitizedSubmission, FIELD_CONTINENT, FIELD_EMAIL, FIELD_FIRST_NAME, FIELD_GENDER,
    FIELD_LAST_NAME, FIELD_MESSAGE, FIELD_SUBJECT, MAX_FIELD_LENGTH,
};

// ---------------------------------------------------------------------------
// Allowed values
// ---------------------------------------------------------------------------

/// Accepted `gender` codes (exact, case-sensitive).
pub const VALID_GENDERS: &[&str] = &["P", "O"];

/// Accepted `subject` values (exact, case-sensitive).
pub const VALID_SUBJECTS: &[&str] = &["Repair", "Order", "Other"];

/// Something, `@`, something, `.`, something. Anchored at the start only.
const EMAIL_PATTERN: &str = r"^[^@]+@[^@]+\.[^@]+";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));

// ---------------------------------------------------------------------------
// Validator table
// ---------------------------------------------------------------------------

/// A single-field validator.
pub type FieldValidator = fn(&SanitizedSubmission) -> Option<&'static str>;

/// All field validators, in form order.
pub const FIELD_VALIDATORS: &[(&str, FieldValidator)] = &[
    (FIELD_FIRST_NAME, validate_first_name),
    (FIELD_LAST_NAME, validate_last_name),
    (FIELD_EMAIL, validate_email),
    (FIELD_CONTINENT, validate_continent),
    (FIELD_MESSAGE, validate_message),
    (FIELD_GENDER, validate_gender),
    (FIELD_SUBJECT, validate_subject),
];

pub fn validate_first_name(s: &SanitizedSubmission) -> Option<&'static str> {
    too_long(&s.first_name, "First name is too long")
        .or_else(|| blank(&s.first_name, "First name is required"))
}

pub fn validate_last_name(s: &SanitizedSubmission) -> Option<&'static str> {
    too_long(&s.last_name, "Last name is too long")
        .or_else(|| blank(&s.last_name, "Last name is required"))
}

pub fn validate_email(s: &SanitizedSubmission) -> Option<&'static str> {
    too_long(&s.email, "Email is too long").or_else(|| {
        if EMAIL_RE.is_match(&s.email) {
            None
        } else {
            Some("Invalid email")
        }
    })
}

pub fn validate_continent(s: &SanitizedSubmission) -> Option<&'static str> {
    too_long(&s.continent, "Continent is too long")
        .or_else(|| blank(&s.continent, "Continent is required"))
}

pub fn validate_message(s: &SanitizedSubmission) -> Option<&'static str> {
    too_long(&s.message, "Message is too long")
        .or_else(|| blank(&s.message, "Message is required"))
}

pub fn validate_gender(s: &SanitizedSubmission) -> Option<&'static str> {
    one_of(&s.gender, VALID_GENDERS, "Invalid gender")
}

pub fn validate_subject(s: &SanitizedSubmission) -> Option<&'static str> {
    one_of(&s.subject, VALID_SUBJECTS, "Invalid subject")
}

// ---------------------------------------------------------------------------
// Rule primitives
// ---------------------------------------------------------------------------

fn too_long(value: &str, message: &'static str) -> Option<&'static str> {
    (value.chars().count() > MAX_FIELD_LENGTH).then_some(message)
}

fn blank(value: &str, message: &'static str) -> Option<&'static str> {
    value.trim().is_empty().then_some(message)
}

fn one_of(value: &str, allowed: &[&str], message: &'static str) -> Option<&'static str> {
    (!allowed.contains(&value)).then_some(message)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
