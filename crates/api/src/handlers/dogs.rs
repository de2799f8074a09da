//! Handlers for the `/dogs` resource.
//!
//! Listing supports free-text search, a breed filter, an availability
//! filter and offset pagination. Responses are returned without an
//! envelope: `{dogs, total, pages, current_page}` for the list and the
//! bare detail object for a single dog.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use shelter_core::catalog::total_pages;
use shelter_core::error::CoreError;
use shelter_core::types::DbId;
use shelter_db::models::dog::DogSummary;
use shelter_db::repositories::DogRepo;

use crate::error::{AppError, AppResult};
use crate::query::DogListParams;
use crate::state::AppState;

/// One page of dog summaries plus pagination metadata.
#[derive(Debug, Serialize)]
pub struct DogListResponse {
    pub dogs: Vec<DogSummary>,
    /// Matching rows before pagination.
    pub total: i64,
    /// `ceil(total / per_page)`; zero when nothing matches.
    pub pages: i64,
    /// The resolved page number, echoed back even past the last page.
    pub current_page: i64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/dogs?search=&page=&per_page=&breed_id=&available=
///
/// List dogs ordered by name. A page past the end returns an empty list
/// with the same `total` and `pages`.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<DogListParams>,
) -> AppResult<impl IntoResponse> {
    let query = params.resolve();

    let total = DogRepo::count(&state.pool, &query).await?;
    let dogs = DogRepo::list(&state.pool, &query).await?;

    Ok(Json(DogListResponse {
        dogs,
        total,
        pages: total_pages(total, query.per_page),
        current_page: query.page,
    }))
}

/// GET /api/dogs/{id}
///
/// Get a single dog's detail, with its status rendered as a label.
pub async fn get_by_id(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = id.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let dog = DogRepo::find_detail_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Dog", id }))?;
    Ok(Json(dog))
}
