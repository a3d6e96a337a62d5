//! Repository for the `planters` table.
//!
//! Read-only: planter records are written by the ingest side of the
//! platform; this service only lists, searches, and fetches them.

use grovetrack_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use grovetrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::planter::{FilterOptions, OrderBy, Planter, PlanterFilter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, first_name, last_name, email, phone, organization, \
    organization_id, image_url, image_rotation, featured, created_at, updated_at";

/// Provides list, search, and fetch operations for planters.
pub struct PlanterRepo;

impl PlanterRepo {
    /// Find a planter by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Planter>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM planters WHERE id = $1");
        sqlx::query_as::<_, Planter>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List planters whose first or last name contains `keyword`,
    /// case-insensitively.
    pub async fn list_by_name(
        pool: &PgPool,
        keyword: &str,
        options: &FilterOptions,
    ) -> Result<Vec<Planter>, sqlx::Error> {
        let (limit, offset) = clamp_page(options);
        let query = format!(
            "SELECT {COLUMNS} FROM planters
             WHERE first_name ILIKE $1 OR last_name ILIKE $1
             {order} LIMIT $2 OFFSET $3",
            order = order_clause(options.order_by),
        );
        sqlx::query_as::<_, Planter>(&query)
            .bind(like_pattern(keyword))
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count planters whose first or last name contains `keyword`.
    pub async fn count_by_name(pool: &PgPool, keyword: &str) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM planters
             WHERE first_name ILIKE $1 OR last_name ILIKE $1",
        )
        .bind(like_pattern(keyword))
        .fetch_one(pool)
        .await
    }

    /// List planters matching the equality filter.
    pub async fn list_by_filter(
        pool: &PgPool,
        filter: &PlanterFilter,
        options: &FilterOptions,
    ) -> Result<Vec<Planter>, sqlx::Error> {
        let (limit, offset) = clamp_page(options);
        let query = format!(
            "SELECT {COLUMNS} FROM planters
             WHERE ($1::bigint IS NULL OR organization_id = $1)
             {order} LIMIT $2 OFFSET $3",
            order = order_clause(options.order_by),
        );
        sqlx::query_as::<_, Planter>(&query)
            .bind(filter.organization_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count planters matching the equality filter.
    pub async fn count_by_filter(
        pool: &PgPool,
        filter: &PlanterFilter,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM planters
             WHERE ($1::bigint IS NULL OR organization_id = $1)",
        )
        .bind(filter.organization_id)
        .fetch_one(pool)
        .await
    }

    /// List featured planters, newest first, capped at `limit`.
    pub async fn list_featured(pool: &PgPool, limit: i64) -> Result<Vec<Planter>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM planters
             WHERE featured ORDER BY created_at DESC LIMIT $1"
        );
        sqlx::query_as::<_, Planter>(&query)
            .bind(limit.max(1))
            .fetch_all(pool)
            .await
    }
}

/// Clamp the requested page to sane bounds before it reaches SQL.
fn clamp_page(options: &FilterOptions) -> (i64, i64) {
    (
        clamp_limit(Some(options.limit), DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT),
        clamp_offset(Some(options.offset)),
    )
}

/// Build the `ORDER BY` clause from a resolved sort descriptor.
///
/// Falls back to `id ASC` so pagination is stable without a client sort.
fn order_clause(order_by: Option<OrderBy>) -> String {
    match order_by {
        Some(order) => format!(
            "ORDER BY {} {}",
            order.column.as_sql(),
            order.direction.as_sql()
        ),
        None => "ORDER BY id ASC".to_string(),
    }
}

/// Turn user text into a `%...%` ILIKE pattern with LIKE metacharacters
/// escaped, so the keyword always matches literally.
fn like_pattern(keyword: &str) -> String {
    let mut escaped = String::with_capacity(keyword.len() + 2);
    escaped.push('%');
    for ch in keyword.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use grovetrack_core::pagination::DEFAULT_PAGE_LIMIT;

    use super::*;
    use crate::models::planter::{SortColumn, SortDirection};

    #[test]
    fn order_clause_defaults_to_stable_id_sort() {
        assert_eq!(order_clause(None), "ORDER BY id ASC");
    }

    #[test]
    fn order_clause_uses_static_sql_names() {
        let order = OrderBy {
            column: SortColumn::LastName,
            direction: SortDirection::Desc,
        };
        assert_eq!(order_clause(Some(order)), "ORDER BY last_name DESC");
    }

    #[test]
    fn like_pattern_escapes_metacharacters() {
        assert_eq!(like_pattern("oak"), "%oak%");
        assert_eq!(like_pattern("100%"), "%100\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
    }

    #[test]
    fn clamp_page_bounds_out_of_range_values() {
        let options = FilterOptions {
            limit: 5000,
            offset: -3,
            order_by: None,
        };
        assert_eq!(clamp_page(&options), (1000, 0));

        let defaults = FilterOptions::default();
        assert_eq!(clamp_page(&defaults), (DEFAULT_PAGE_LIMIT, 0));
    }
}
