//! Query parameter types for API handlers.

use serde::Deserialize;
use shelter_core::catalog::DogListQuery;

/// Raw query parameters for `GET /api/dogs`.
///
/// Every field is captured as text so that malformed values reach the
/// permissive resolution in [`DogListQuery::from_raw`] instead of failing
/// extraction with a 400.
#[derive(Debug, Default, Deserialize)]
pub struct DogListParams {
    pub search: Option<String>,
    pub page: Option<String>,
    pub per_page: Option<String>,
    pub breed_id: Option<String>,
    pub available: Option<String>,
}

impl DogListParams {
    /// Resolve into a clamped, validated listing query.
    pub fn resolve(&self) -> DogListQuery {
        DogListQuery::from_raw(
            self.search.as_deref(),
            self.page.as_deref(),
            self.per_page.as_deref(),
            self.breed_id.as_deref(),
            self.available.as_deref(),
        )
    }
}
