//! Repositories: one per table, each a unit struct of async query helpers.

pub mod contact_repo;

pub use contact_repo::ContactRepo;
