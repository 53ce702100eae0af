//! Contact form HTTP service library.
//!
//! Exposes config, state, error handling, pages, and routes so integration
//! tests and the binary entrypoint can both access them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod pages;
pub mod router;
pub mod routes;
pub mod state;
