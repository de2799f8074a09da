//! Handlers for the `/breeds` resource.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use shelter_db::repositories::BreedRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/breeds
///
/// List every breed as `{id, name}`.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let breeds = BreedRepo::list(&state.pool).await?;
    Ok(Json(breeds))
}
