//! Read models for the catalog tables.
//!
//! Each struct is a `FromRow` + `Serialize` projection of a query result,
//! shaped exactly as the API returns it.

pub mod breed;
pub mod dog;
pub mod status;
