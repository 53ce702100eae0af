//! Row models for the contact database.

pub mod contact;
