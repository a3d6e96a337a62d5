//! Handlers for the `/planters` resource.
//!
//! All three endpoints are read-only: repository failures propagate
//! unchanged to [`AppError`]'s `IntoResponse`, which is the single
//! error-to-response translator.

use axum::extract::{Path, Query, State};
use axum::Json;
use grovetrack_core::error::CoreError;
use grovetrack_core::pagination::FEATURED_LIMIT;
use grovetrack_core::types::DbId;
use grovetrack_db::repositories::PlanterRepo;

use crate::error::{AppError, AppResult};
use crate::links::{with_links, PlanterWithLinks};
use crate::query::{ListRequest, PlanterListParams};
use crate::response::{FeaturedPlanters, PlanterPage};
use crate::state::AppState;

/// GET /api/v1/planters/featured
///
/// Fixed-size curated listing. Takes no query extractor, so any
/// pagination parameters a client supplies are ignored.
pub async fn featured(State(state): State<AppState>) -> AppResult<Json<FeaturedPlanters>> {
    let planters = PlanterRepo::list_featured(&state.pool, FEATURED_LIMIT).await?;

    Ok(Json(FeaturedPlanters {
        planters: with_links(planters),
    }))
}

/// GET /api/v1/planters/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<PlanterWithLinks>> {
    let planter = PlanterRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Planter",
            id,
        }))?;

    Ok(Json(PlanterWithLinks::new(planter)))
}

/// GET /api/v1/planters
///
/// Branches on `keyword`: when present, a name search; otherwise a
/// filter listing. The fetch and its matching count are independent
/// read-only queries, so they run concurrently.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PlanterListParams>,
) -> AppResult<Json<PlanterPage>> {
    let ListRequest {
        keyword,
        filter,
        options,
    } = params.normalize().map_err(AppError::Core)?;

    let (planters, total) = match keyword.as_deref() {
        Some(keyword) => tokio::try_join!(
            PlanterRepo::list_by_name(&state.pool, keyword, &options),
            PlanterRepo::count_by_name(&state.pool, keyword),
        )?,
        None => tokio::try_join!(
            PlanterRepo::list_by_filter(&state.pool, &filter, &options),
            PlanterRepo::count_by_filter(&state.pool, &filter),
        )?,
    };

    tracing::debug!(
        total,
        limit = options.limit,
        offset = options.offset,
        keyword = keyword.as_deref().unwrap_or(""),
        "Planter listing executed",
    );

    Ok(Json(PlanterPage {
        total,
        offset: options.offset,
        limit: options.limit,
        planters: with_links(planters),
    }))
}
