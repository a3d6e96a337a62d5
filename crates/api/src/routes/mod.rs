pub mod health;
pub mod planter;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /planters                 list / search (GET)
/// /planters/featured        curated fixed-size listing (GET)
/// /planters/{id}            single record (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/planters", planter::router())
}
