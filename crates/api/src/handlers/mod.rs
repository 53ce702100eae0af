//! Request handlers.
//!
//! Handlers run the validation pipeline from `contact_core`, persist through
//! the store in [`AppState`](crate::state::AppState), and render pages.

pub mod contact;
