//! Request handlers, one module per resource.

pub mod breeds;
pub mod dogs;
