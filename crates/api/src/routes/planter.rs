//! Route definitions for the planters resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::planter;
use crate::state::AppState;

/// Routes mounted at `/planters`.
///
/// ```text
/// GET /              -> list
/// GET /featured      -> featured
/// GET /{id}          -> get_by_id
/// ```
///
/// `/featured` is registered as a static segment, so it always wins over
/// the `/{id}` capture.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(planter::list))
        .route("/featured", get(planter::featured))
        .route("/{id}", get(planter::get_by_id))
}
