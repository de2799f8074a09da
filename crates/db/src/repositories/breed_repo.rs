//! Repository for the `breeds` table.

use sqlx::PgPool;

use crate::models::breed::Breed;

/// Column list for the `breeds` table.
const COLUMNS: &str = "id, name";

/// Read-only queries over breeds.
pub struct BreedRepo;

impl BreedRepo {
    /// List all breeds in insertion (id) order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Breed>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM breeds ORDER BY id ASC");
        sqlx::query_as::<_, Breed>(&query).fetch_all(pool).await
    }

    /// Count all breeds.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*)::BIGINT FROM breeds")
            .fetch_one(pool)
            .await
    }
}
