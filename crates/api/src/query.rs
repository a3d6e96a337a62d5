//! Query parameter types and normalization for planter listings.
//!
//! Raw query strings are deserialized into [`PlanterListParams`] by the
//! `Query` extractor, then validated and normalized into strongly-typed
//! repository inputs in one step. Validation happens before any
//! repository call; normalization is a pure transformation.

use grovetrack_core::error::CoreError;
use grovetrack_core::pagination::{DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use grovetrack_db::models::planter::{
    FilterOptions, OrderBy, PlanterFilter, SortColumn, SortDirection,
};
use serde::Deserialize;

/// Raw query parameters accepted by `GET /planters`.
#[derive(Debug, Default, Deserialize)]
pub struct PlanterListParams {
    pub keyword: Option<String>,
    pub organization_id: Option<i64>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub order_by: Option<String>,
}

/// Validated, normalized inputs for the collection lookup.
#[derive(Debug, PartialEq, Eq)]
pub struct ListRequest {
    /// Name-search keyword; its presence selects the search branch.
    pub keyword: Option<String>,
    pub filter: PlanterFilter,
    pub options: FilterOptions,
}

impl PlanterListParams {
    /// Validate the raw parameters and build the normalized request.
    ///
    /// Defaults: `limit = 20`, `offset = 0`, no sort. Out-of-range values
    /// are rejected rather than clamped, so a client mistake surfaces as
    /// a 400 instead of silently returning a different page.
    ///
    /// `organization_id=0` is a real filter (organization 0), not an
    /// absent one.
    pub fn normalize(self) -> Result<ListRequest, CoreError> {
        if let Some(org_id) = self.organization_id {
            if org_id < 0 {
                return Err(CoreError::Validation(
                    "organization_id must be non-negative".to_string(),
                ));
            }
        }

        let limit = match self.limit {
            Some(limit) if !(1..=MAX_PAGE_LIMIT).contains(&limit) => {
                return Err(CoreError::Validation(format!(
                    "limit must be between 1 and {MAX_PAGE_LIMIT}"
                )));
            }
            Some(limit) => limit,
            None => DEFAULT_PAGE_LIMIT,
        };

        let offset = match self.offset {
            Some(offset) if offset < 0 => {
                return Err(CoreError::Validation(
                    "offset must be non-negative".to_string(),
                ));
            }
            Some(offset) => offset,
            None => 0,
        };

        let order_by = match self.order_by.as_deref() {
            Some(token) if !token.is_empty() => Some(parse_order_by(token)?),
            _ => None,
        };

        Ok(ListRequest {
            keyword: self.keyword,
            filter: PlanterFilter {
                organization_id: self.organization_id,
            },
            options: FilterOptions {
                limit,
                offset,
                order_by,
            },
        })
    }
}

/// Parse an `order_by` token of the form `"column"` or `"column:direction"`.
///
/// The token is split on the first colon; the direction segment is
/// case-insensitive and defaults to ascending when absent.
fn parse_order_by(token: &str) -> Result<OrderBy, CoreError> {
    let (column_name, direction) = match token.split_once(':') {
        Some((column_name, direction_token)) => {
            let direction = SortDirection::parse(direction_token).ok_or_else(|| {
                CoreError::Validation(
                    "order_by direction must be either asc or desc".to_string(),
                )
            })?;
            (column_name, direction)
        }
        None => (token, SortDirection::Asc),
    };

    let column = SortColumn::parse(column_name).ok_or_else(|| {
        CoreError::Validation(format!("unknown order_by column: {column_name}"))
    })?;

    Ok(OrderBy { column, direction })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn defaults_applied_when_no_params_supplied() {
        let request = PlanterListParams::default().normalize().unwrap();
        assert_eq!(request.options.limit, 20);
        assert_eq!(request.options.offset, 0);
        assert!(request.options.order_by.is_none());
        assert!(request.keyword.is_none());
        assert_eq!(request.filter, PlanterFilter::default());
    }

    #[test]
    fn order_by_with_direction_is_lowercased() {
        for token in ["last_name:desc", "last_name:DESC", "last_name:Desc"] {
            let params = PlanterListParams {
                order_by: Some(token.to_string()),
                ..Default::default()
            };
            let request = params.normalize().unwrap();
            assert_eq!(
                request.options.order_by,
                Some(OrderBy {
                    column: SortColumn::LastName,
                    direction: SortDirection::Desc,
                })
            );
        }
    }

    #[test]
    fn order_by_without_direction_defaults_to_asc() {
        let params = PlanterListParams {
            order_by: Some("created_at".to_string()),
            ..Default::default()
        };
        let request = params.normalize().unwrap();
        assert_eq!(
            request.options.order_by,
            Some(OrderBy {
                column: SortColumn::CreatedAt,
                direction: SortDirection::Asc,
            })
        );
    }

    #[test]
    fn empty_order_by_is_ignored() {
        let params = PlanterListParams {
            order_by: Some(String::new()),
            ..Default::default()
        };
        let request = params.normalize().unwrap();
        assert!(request.options.order_by.is_none());
    }

    #[test]
    fn invalid_order_by_direction_is_rejected() {
        let params = PlanterListParams {
            order_by: Some("id:sideways".to_string()),
            ..Default::default()
        };
        assert_matches!(params.normalize(), Err(CoreError::Validation(msg)) => {
            assert!(msg.contains("asc or desc"));
        });
    }

    #[test]
    fn unknown_order_by_column_is_rejected() {
        let params = PlanterListParams {
            order_by: Some("password:asc".to_string()),
            ..Default::default()
        };
        assert_matches!(params.normalize(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn limit_out_of_range_is_rejected() {
        for limit in [0, -1, 1001] {
            let params = PlanterListParams {
                limit: Some(limit),
                ..Default::default()
            };
            assert_matches!(params.normalize(), Err(CoreError::Validation(_)));
        }

        let params = PlanterListParams {
            limit: Some(1000),
            ..Default::default()
        };
        assert_eq!(params.normalize().unwrap().options.limit, 1000);
    }

    #[test]
    fn negative_offset_is_rejected() {
        let params = PlanterListParams {
            offset: Some(-1),
            ..Default::default()
        };
        assert_matches!(params.normalize(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn negative_organization_id_is_rejected() {
        let params = PlanterListParams {
            organization_id: Some(-5),
            ..Default::default()
        };
        assert_matches!(params.normalize(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn organization_id_zero_is_a_real_filter() {
        let params = PlanterListParams {
            organization_id: Some(0),
            ..Default::default()
        };
        let request = params.normalize().unwrap();
        assert_eq!(request.filter.organization_id, Some(0));
    }

    #[test]
    fn keyword_passes_through_unchanged() {
        let params = PlanterListParams {
            keyword: Some("oak".to_string()),
            limit: Some(5),
            ..Default::default()
        };
        let request = params.normalize().unwrap();
        assert_eq!(request.keyword.as_deref(), Some("oak"));
        assert_eq!(request.options.limit, 5);
    }
}
