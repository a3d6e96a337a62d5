//! Pagination limits shared by the API and repository layers.
//!
//! The HTTP boundary rejects out-of-range values outright; the clamp
//! helpers here are the repository's own guard so no caller can push a
//! pathological LIMIT/OFFSET into SQL.

/// Page size applied when a list request supplies no `limit`.
pub const DEFAULT_PAGE_LIMIT: i64 = 20;

/// Largest page size a client may request.
pub const MAX_PAGE_LIMIT: i64 = 1000;

/// Fixed result cap for the featured-planters endpoint.
pub const FEATURED_LIMIT: i64 = 10;

/// Clamp a user-provided limit to `[1, max]`, falling back to `default`.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
