//! Honeypot spam guard.

/// Message reported when the honeypot trips.
pub const SPAM_MESSAGE: &str = "Spam detected";

/// Whether the raw honeypot value marks the submission as automated.
///
/// Any non-empty value trips the guard, whitespace included. The check runs
/// on the raw value; its content is irrelevant.
pub fn is_spam(honeypot: Option<&str>) -> bool {
    honeypot.is_some_and(|value| !value.is_empty())
}
