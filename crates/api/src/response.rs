//! Shared response envelope types for planter handlers.
//!
//! List responses echo the normalized pagination values back to the
//! client alongside the total row count, so consumers can page without
//! re-deriving defaults.

use serde::Serialize;

use crate::links::PlanterWithLinks;

/// Paginated planter listing: `{ total, offset, limit, planters }`.
#[derive(Debug, Serialize)]
pub struct PlanterPage {
    /// Total rows matching the query, ignoring pagination.
    pub total: i64,
    /// Offset actually applied (after defaulting).
    pub offset: i64,
    /// Limit actually applied (after defaulting).
    pub limit: i64,
    pub planters: Vec<PlanterWithLinks>,
}

/// Featured planter listing: `{ planters }`, never paginated.
#[derive(Debug, Serialize)]
pub struct FeaturedPlanters {
    pub planters: Vec<PlanterWithLinks>,
}
