//! Route definitions for breeds.

use axum::routing::get;
use axum::Router;

use crate::handlers::breeds;
use crate::state::AppState;

/// Routes mounted at `/breeds`.
///
/// ```text
/// GET    /                         -> list
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(breeds::list))
}
