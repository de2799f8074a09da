//! Repository for the `dogs` table joined to `breeds` and `dog_statuses`.

use sqlx::PgPool;
use shelter_core::catalog::{contains_pattern, DogListQuery};
use shelter_core::types::DbId;

use crate::models::dog::{DogDetail, DogSummary};
use crate::models::status::{DogStatus, StatusId};

// ---------------------------------------------------------------------------
// Column lists
// ---------------------------------------------------------------------------

/// Join shared by every dog query.
const FROM_JOIN: &str = "FROM dogs d JOIN breeds b ON b.id = d.breed_id";

/// Column list for the summary projection.
const SUMMARY_COLUMNS: &str = "d.id, d.name, b.name AS breed";

/// Column list for the detail projection.
const DETAIL_COLUMNS: &str = "d.id, d.name, b.name AS breed, d.age, d.description, \
    d.gender, s.name AS status";

// ---------------------------------------------------------------------------
// DogRepo
// ---------------------------------------------------------------------------

/// Read-only queries over the dog catalog.
pub struct DogRepo;

impl DogRepo {
    /// List one page of dog summaries matching the query, ordered by name.
    pub async fn list(
        pool: &PgPool,
        params: &DogListQuery,
    ) -> Result<Vec<DogSummary>, sqlx::Error> {
        tracing::debug!(?params, "Listing dogs");
        let (where_clause, bind_values, bind_idx) = build_dog_filter(params);

        let query = format!(
            "SELECT {SUMMARY_COLUMNS} {FROM_JOIN} {where_clause} \
             ORDER BY d.name ASC, d.id ASC \
             LIMIT ${bind_idx} OFFSET ${}",
            bind_idx + 1
        );

        let q = bind_dog_values(sqlx::query_as::<_, DogSummary>(&query), &bind_values);
        q.bind(params.per_page)
            .bind(params.offset())
            .fetch_all(pool)
            .await
    }

    /// Count all dogs matching the query, ignoring pagination.
    pub async fn count(pool: &PgPool, params: &DogListQuery) -> Result<i64, sqlx::Error> {
        let (where_clause, bind_values, _) = build_dog_filter(params);

        let query = format!("SELECT COUNT(*)::BIGINT AS count {FROM_JOIN} {where_clause}");

        let q = bind_dog_values_scalar(sqlx::query_scalar::<_, i64>(&query), &bind_values);
        q.fetch_one(pool).await
    }

    /// Find a dog's full detail by ID.
    pub async fn find_detail_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<DogDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS} {FROM_JOIN} \
             JOIN dog_statuses s ON s.id = d.status_id \
             WHERE d.id = $1"
        );
        sqlx::query_as::<_, DogDetail>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}

// ---------------------------------------------------------------------------
// Dynamic filter helpers
// ---------------------------------------------------------------------------

/// Typed bind value for dynamically-built dog queries.
#[derive(Debug, PartialEq)]
enum BindValue {
    BigInt(i64),
    SmallInt(StatusId),
    Text(String),
}

/// Build a WHERE clause and bind values from a resolved listing query.
///
/// Returns `(where_clause, bind_values, next_bind_index)`.
/// The `where_clause` is empty if no filters are active, or starts with `WHERE `.
fn build_dog_filter(params: &DogListQuery) -> (String, Vec<BindValue>, u32) {
    let mut conditions: Vec<String> = Vec::new();
    let mut bind_idx = 1u32;
    let mut bind_values: Vec<BindValue> = Vec::new();

    if let Some(ref search) = params.search {
        // One placeholder shared by all three columns.
        conditions.push(format!(
            "(d.name ILIKE ${bind_idx} OR b.name ILIKE ${bind_idx} \
             OR d.description ILIKE ${bind_idx})"
        ));
        bind_idx += 1;
        bind_values.push(BindValue::Text(contains_pattern(search)));
    }

    if let Some(breed_id) = params.breed_id {
        conditions.push(format!("d.breed_id = ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::BigInt(breed_id));
    }

    if params.available_only {
        conditions.push(format!("d.status_id = ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::SmallInt(DogStatus::Available.id()));
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    (where_clause, bind_values, bind_idx)
}

/// Bind a slice of `BindValue` to a sqlx `QueryAs`.
fn bind_dog_values<'q, O>(
    mut q: sqlx::query::QueryAs<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments>,
    bind_values: &'q [BindValue],
) -> sqlx::query::QueryAs<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments> {
    for val in bind_values {
        match val {
            BindValue::BigInt(v) => q = q.bind(*v),
            BindValue::SmallInt(v) => q = q.bind(*v),
            BindValue::Text(v) => q = q.bind(v.as_str()),
        }
    }
    q
}

/// Bind a slice of `BindValue` to a sqlx `QueryScalar`.
fn bind_dog_values_scalar<'q>(
    mut q: sqlx::query::QueryScalar<'q, sqlx::Postgres, i64, sqlx::postgres::PgArguments>,
    bind_values: &'q [BindValue],
) -> sqlx::query::QueryScalar<'q, sqlx::Postgres, i64, sqlx::postgres::PgArguments> {
    for val in bind_values {
        match val {
            BindValue::BigInt(v) => q = q.bind(*v),
            BindValue::SmallInt(v) => q = q.bind(*v),
            BindValue::Text(v) => q = q.bind(v.as_str()),
        }
    }
    q
}
