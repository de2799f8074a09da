pub mod breeds;
pub mod dogs;
pub mod health;
pub mod index;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /dogs                                            list (search, filters, pagination)
/// /dogs/{id}                                       detail
///
/// /breeds                                          list
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/dogs", dogs::router())
        .nest("/breeds", breeds::router())
}
