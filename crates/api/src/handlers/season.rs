//! Handlers for the `/seasons` resource, its standings and the
//! season-level recompute triggers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use league_core::error::CoreError;
use league_core::season::{validate_non_blank, validate_season_rules};
use league_core::types::DbId;
use league_db::models::season::{CreateSeason, Season, UpdateSeason};
use league_db::repositories::{SeasonRepo, StandingRepo};
use sqlx::PgPool;

use crate::engine::recompute;
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Load a season or fail with 404.
pub(crate) async fn find_season(pool: &PgPool, id: DbId) -> AppResult<Season> {
    SeasonRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Season",
            id,
        }))
}

/// POST /api/v1/seasons
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateSeason>,
) -> AppResult<impl IntoResponse> {
    validate_non_blank("name", &input.name)?;
    validate_season_rules(
        Some(input.start_date),
        Some(input.end_date),
        input.top_matchdays_limit,
    )?;

    let season = SeasonRepo::create(&state.pool, &input).await?;
    tracing::info!(season_id = season.id, name = %season.name, "Season created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: season })))
}

/// GET /api/v1/seasons
///
/// Most recent start date first.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Season>>>> {
    let seasons = SeasonRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: seasons }))
}

/// GET /api/v1/seasons/active
///
/// The active season with the latest start date, or `null` if none.
pub async fn get_active(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Option<Season>>>> {
    let season = SeasonRepo::find_active(&state.pool).await?;
    Ok(Json(DataResponse { data: season }))
}

/// GET /api/v1/seasons/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Season>>> {
    let season = find_season(&state.pool, id).await?;
    Ok(Json(DataResponse { data: season }))
}

/// PUT /api/v1/seasons/{id}
///
/// Rule changes are stored immediately but only affect points and
/// standings once a recalculation is triggered.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSeason>,
) -> AppResult<Json<DataResponse<Season>>> {
    let existing = find_season(&state.pool, id).await?;

    if let Some(name) = &input.name {
        validate_non_blank("name", name)?;
    }
    validate_season_rules(
        Some(input.start_date.unwrap_or(existing.start_date)),
        Some(input.end_date.unwrap_or(existing.end_date)),
        input.top_matchdays_limit,
    )?;

    let season = SeasonRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Season",
            id,
        }))?;
    tracing::info!(season_id = id, "Season updated");

    Ok(Json(DataResponse { data: season }))
}

/// DELETE /api/v1/seasons/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if SeasonRepo::delete(&state.pool, id).await? {
        tracing::info!(season_id = id, "Season deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Season",
            id,
        }))
    }
}

/// GET /api/v1/seasons/{id}/standings
///
/// Highest total first, ties broken by player display name.
pub async fn list_standings(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    find_season(&state.pool, id).await?;
    let standings = StandingRepo::list_by_season(&state.pool, id).await?;
    Ok(Json(DataResponse { data: standings }))
}

/// POST /api/v1/seasons/{id}/rebuild
///
/// Rebuild standings from the stored matchday totals without recalculating
/// any matchday.
pub async fn rebuild(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let summary = recompute::rebuild_season(&state.pool, id).await?;
    Ok(Json(DataResponse { data: summary }))
}

/// POST /api/v1/seasons/{id}/recalculate
///
/// Recalculate every matchday with the season's current rules, then
/// rebuild standings.
pub async fn recalculate(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let result = recompute::recalculate_season(&state.pool, id).await?;
    Ok(Json(DataResponse { data: result }))
}
