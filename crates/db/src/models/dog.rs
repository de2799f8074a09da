//! Dog projections.
//!
//! The listing endpoint returns [`DogSummary`] rows; the detail endpoint
//! returns a single [`DogDetail`] with the status rendered as its label.

use serde::Serialize;
use sqlx::FromRow;
use shelter_core::types::DbId;

/// Summary projection: `{id, name, breed}`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DogSummary {
    pub id: DbId,
    pub name: String,
    /// Breed name (not id).
    pub breed: String,
}

/// Full detail projection of a single dog.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DogDetail {
    pub id: DbId,
    pub name: String,
    pub breed: String,
    pub age: i32,
    pub description: Option<String>,
    pub gender: String,
    /// Status label from `dog_statuses.name`, e.g. `AVAILABLE`.
    pub status: String,
}
