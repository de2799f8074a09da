//! Breed model.

use serde::Serialize;
use sqlx::FromRow;
use shelter_core::types::DbId;

/// A breed as listed by `GET /api/breeds`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Breed {
    pub id: DbId,
    pub name: String,
}
