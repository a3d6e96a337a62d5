//! Planter entity model and query descriptors.

use grovetrack_core::pagination::DEFAULT_PAGE_LIMIT;
use grovetrack_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `planters` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Planter {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub organization: Option<String>,
    pub organization_id: Option<DbId>,
    pub image_url: Option<String>,
    pub image_rotation: Option<i32>,
    pub featured: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Equality predicates applied to list queries.
///
/// Presence is explicit: `organization_id: Some(0)` filters by
/// organization 0, it is never treated as "not supplied".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanterFilter {
    pub organization_id: Option<DbId>,
}

/// Columns a client may sort planter listings by.
///
/// A closed set so `ORDER BY` is always built from a static SQL name,
/// never from client text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Id,
    FirstName,
    LastName,
    CreatedAt,
    UpdatedAt,
}

impl SortColumn {
    /// Parse a client-supplied column name.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "id" => Some(Self::Id),
            "first_name" => Some(Self::FirstName),
            "last_name" => Some(Self::LastName),
            "created_at" => Some(Self::CreatedAt),
            "updated_at" => Some(Self::UpdatedAt),
            _ => None,
        }
    }

    /// The column's SQL identifier.
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
        }
    }
}

/// Sort direction, defaulting to ascending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Parse a direction token, case-insensitively.
    pub fn parse(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("asc") {
            Some(Self::Asc)
        } else if token.eq_ignore_ascii_case("desc") {
            Some(Self::Desc)
        } else {
            None
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// A resolved `ORDER BY` target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBy {
    pub column: SortColumn,
    pub direction: SortDirection,
}

/// Pagination and sort descriptor passed to repository list queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOptions {
    pub limit: i64,
    pub offset: i64,
    pub order_by: Option<OrderBy>,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_LIMIT,
            offset: 0,
            order_by: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_column_parses_known_names() {
        assert_eq!(SortColumn::parse("first_name"), Some(SortColumn::FirstName));
        assert_eq!(SortColumn::parse("created_at"), Some(SortColumn::CreatedAt));
        assert_eq!(SortColumn::parse("password"), None);
        assert_eq!(SortColumn::parse(""), None);
    }

    #[test]
    fn sort_direction_is_case_insensitive() {
        assert_eq!(SortDirection::parse("asc"), Some(SortDirection::Asc));
        assert_eq!(SortDirection::parse("DESC"), Some(SortDirection::Desc));
        assert_eq!(SortDirection::parse("Desc"), Some(SortDirection::Desc));
        assert_eq!(SortDirection::parse("sideways"), None);
    }

    #[test]
    fn filter_options_defaults() {
        let options = FilterOptions::default();
        assert_eq!(options.limit, 20);
        assert_eq!(options.offset, 0);
        assert!(options.order_by.is_none());
    }
}
