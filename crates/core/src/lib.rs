//! Contact-form submission pipeline.
//!
//! Turns an untrusted [`RawSubmission`] into a [`ValidationVerdict`]:
//! honeypot check first, then sanitization and per-field validation. Pure
//! logic only; persistence and rendering live in the `contact-db` and
//! `contact-api` crates.

pub mod error;
pub mod sanitize;
pub mod submission;
pub mod types;
pub mod validation;

pub use submission::{RawSubmission, SanitizedSubmission};
pub use validation::verdict::{validate, FieldErrors, ValidationVerdict};
