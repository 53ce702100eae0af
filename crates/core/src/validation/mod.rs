//! Validation pipeline.
//!
//! Per-field rules, the honeypot spam guard, and the verdict builder that
//! combines them. Pure logic, no I/O.

pub mod rules;
pub mod spam;
pub mod verdict;
