//! Domain types and rules for the shelter catalog.
//!
//! Nothing in this crate performs I/O, so the API and repository layers can
//! share the same parameter resolution and validation logic.

pub mod catalog;
pub mod error;
pub mod types;
pub mod validation;
