//! Route definitions for dogs.

use axum::routing::get;
use axum::Router;

use crate::handlers::dogs;
use crate::state::AppState;

/// Routes mounted at `/dogs`.
///
/// ```text
/// GET    /                         -> list
/// GET    /{id}                     -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(dogs::list))
        .route("/{id}", get(dogs::get_by_id))
}
