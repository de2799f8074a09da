use axum::{routing::get, Router};

use crate::state::AppState;

/// Plain-text greeting served at the root.
pub const WELCOME_TEXT: &str =
    "Welcome to the Dog Shelter API! Use /api/dogs and /api/breeds to access data.";

/// GET / -- plain-text welcome message.
async fn index() -> &'static str {
    WELCOME_TEXT
}

/// Mount the root route.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}
