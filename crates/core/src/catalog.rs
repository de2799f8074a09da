//! Dog listing parameters: defaults, clamping and permissive parsing.
//!
//! Raw query-string values are resolved here into a [`DogListQuery`] before
//! the repository layer composes SQL from it. Malformed values never fail a
//! request: pagination falls back to defaults or is clamped, and a bad
//! breed filter is dropped.

use std::num::IntErrorKind;

use crate::types::DbId;

// ---------------------------------------------------------------------------
// Pagination defaults
// ---------------------------------------------------------------------------

/// Page number used when none (or garbage) is supplied.
pub const DEFAULT_PAGE: i64 = 1;

/// Default number of dogs per page.
pub const DEFAULT_PER_PAGE: i64 = 12;

/// Maximum number of dogs per page.
pub const MAX_PER_PAGE: i64 = 50;

/// The only `available` value that turns the availability filter on.
pub const AVAILABLE_FLAG: &str = "true";

// ---------------------------------------------------------------------------
// Resolved query
// ---------------------------------------------------------------------------

/// A fully resolved dog listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DogListQuery {
    /// Trimmed search text, `None` when empty.
    pub search: Option<String>,
    /// 1-based page number.
    pub page: i64,
    /// Page size within `1..=MAX_PER_PAGE`.
    pub per_page: i64,
    pub breed_id: Option<DbId>,
    /// Restrict to dogs with the AVAILABLE status.
    pub available_only: bool,
}

impl DogListQuery {
    /// Resolve raw query-string values.
    pub fn from_raw(
        search: Option<&str>,
        page: Option<&str>,
        per_page: Option<&str>,
        breed_id: Option<&str>,
        available: Option<&str>,
    ) -> Self {
        Self {
            search: normalize_search(search),
            page: clamp_page(parse_int(page)),
            per_page: clamp_per_page(parse_int(per_page)),
            breed_id: parse_breed_filter(breed_id),
            available_only: is_available_filter(available),
        }
    }

    /// Number of rows to skip for the requested page.
    pub fn offset(&self) -> i64 {
        page_offset(self.page, self.per_page)
    }
}

impl Default for DogListQuery {
    fn default() -> Self {
        Self {
            search: None,
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
            breed_id: None,
            available_only: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse an integer, saturating values too large for `i64` instead of
/// discarding them. Non-integers yield `None`.
fn parse_int(raw: Option<&str>) -> Option<i64> {
    match raw?.trim().parse::<i64>() {
        Ok(v) => Some(v),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

/// Trim search input; whitespace-only input means no search.
pub fn normalize_search(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Clamp a user-provided page number to at least 1.
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(DEFAULT_PAGE).max(1)
}

/// Clamp a user-provided page size to `1..=MAX_PER_PAGE`.
pub fn clamp_per_page(per_page: Option<i64>) -> i64 {
    per_page.unwrap_or(DEFAULT_PER_PAGE).clamp(1, MAX_PER_PAGE)
}

/// Parse the breed filter. Anything that is not an integer is ignored.
pub fn parse_breed_filter(raw: Option<&str>) -> Option<DbId> {
    parse_int(raw)
}

/// Only the exact string `"true"` enables the filter; `"false"` does not
/// select unavailable dogs, it applies no filter at all.
pub fn is_available_filter(raw: Option<&str>) -> bool {
    raw == Some(AVAILABLE_FLAG)
}

/// Rows to skip before the given page. Saturates instead of overflowing.
pub fn page_offset(page: i64, per_page: i64) -> i64 {
    (page - 1).max(0).saturating_mul(per_page)
}

/// Total number of pages for `total` rows. Zero rows means zero pages.
pub fn total_pages(total: i64, per_page: i64) -> i64 {
    if total <= 0 || per_page <= 0 {
        return 0;
    }
    (total + per_page - 1) / per_page
}

/// Build an `ILIKE` pattern matching `term` as a literal substring.
///
/// `\`, `%` and `_` are escaped with the default `\` escape character.
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
