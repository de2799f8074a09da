//! Catalog health report.
//!
//! Reports whether the catalog tables answer queries, along with their row
//! counts, rather than just pinging the connection.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use shelter_core::catalog::DogListQuery;
use shelter_db::repositories::{BreedRepo, DogRepo};

use crate::state::AppState;

/// Row counts of the catalog tables.
#[derive(Debug, Serialize)]
pub struct CatalogCounts {
    pub breeds: i64,
    pub dogs: i64,
}

/// `GET /health` payload. `catalog` is `null` when the store is unreachable.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub catalog: Option<CatalogCounts>,
}

async fn catalog_counts(pool: &shelter_db::DbPool) -> Result<CatalogCounts, sqlx::Error> {
    let breeds = BreedRepo::count(pool).await?;
    let dogs = DogRepo::count(pool, &DogListQuery::default()).await?;
    Ok(CatalogCounts { breeds, dogs })
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let catalog = match catalog_counts(&state.pool).await {
        Ok(counts) => Some(counts),
        Err(err) => {
            tracing::warn!(error = %err, "Catalog unreachable");
            None
        }
    };

    Json(HealthResponse {
        status: if catalog.is_some() { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        catalog,
    })
}

/// Mounted at the root, next to the welcome text.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
