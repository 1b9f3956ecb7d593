//! Handlers for matchdays.
//!
//! Listing and creation are scoped to a season
//! (`/seasons/{id}/matchdays[/{matchday_id}]`); edits go through
//! `/matchdays/{id}`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use league_core::error::CoreError;
use league_core::types::DbId;
use league_db::models::matchday::{CreateMatchday, Matchday, UpdateMatchday};
use league_db::repositories::{MatchdayRepo, MatchdayScoreRepo};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::handlers::season::find_season;
use crate::response::DataResponse;
use crate::state::AppState;

/// Load a matchday or fail with 404.
pub(crate) async fn find_matchday(pool: &PgPool, id: DbId) -> AppResult<Matchday> {
    MatchdayRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Matchday",
            id,
        }))
}

/// Load a matchday that must belong to `season_id`, or fail with 404.
async fn find_matchday_in_season(
    pool: &PgPool,
    season_id: DbId,
    id: DbId,
) -> AppResult<Matchday> {
    find_season(pool, season_id).await?;
    MatchdayRepo::find_in_season(pool, season_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Matchday",
            id,
        }))
}

/// Reject manual edits on a closed matchday.
pub(crate) fn ensure_open(matchday: &Matchday) -> AppResult<()> {
    if matchday.is_closed {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Matchday {} is closed; reopen it before editing",
            matchday.number
        ))));
    }
    Ok(())
}

/// GET /api/v1/seasons/{id}/matchdays
///
/// Ordered by matchday number.
pub async fn list_by_season(
    State(state): State<AppState>,
    Path(season_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Matchday>>>> {
    find_season(&state.pool, season_id).await?;
    let matchdays = MatchdayRepo::list_by_season(&state.pool, season_id).await?;
    Ok(Json(DataResponse { data: matchdays }))
}

/// POST /api/v1/seasons/{id}/matchdays
///
/// Returns 409 if the number is already used in the season.
pub async fn create(
    State(state): State<AppState>,
    Path(season_id): Path<DbId>,
    Json(input): Json<CreateMatchday>,
) -> AppResult<impl IntoResponse> {
    find_season(&state.pool, season_id).await?;

    let matchday = MatchdayRepo::create(&state.pool, season_id, &input).await?;
    tracing::info!(
        matchday_id = matchday.id,
        season_id,
        number = matchday.number,
        "Matchday created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: matchday })))
}

/// GET /api/v1/seasons/{id}/matchdays/{matchday_id}
pub async fn get_in_season(
    State(state): State<AppState>,
    Path((season_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<DataResponse<Matchday>>> {
    let matchday = find_matchday_in_season(&state.pool, season_id, id).await?;
    Ok(Json(DataResponse { data: matchday }))
}

/// GET /api/v1/seasons/{id}/matchdays/{matchday_id}/scores
///
/// Highest total first, ties broken by player display name.
pub async fn list_scores(
    State(state): State<AppState>,
    Path((season_id, id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    let matchday = find_matchday_in_season(&state.pool, season_id, id).await?;
    let scores = MatchdayScoreRepo::list_by_matchday(&state.pool, matchday.id).await?;
    Ok(Json(DataResponse { data: scores }))
}

/// PUT /api/v1/matchdays/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMatchday>,
) -> AppResult<Json<DataResponse<Matchday>>> {
    let matchday = MatchdayRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Matchday",
            id,
        }))?;
    Ok(Json(DataResponse { data: matchday }))
}

/// DELETE /api/v1/matchdays/{id}
///
/// Closed matchdays must be reopened first.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let matchday = find_matchday(&state.pool, id).await?;
    ensure_open(&matchday)?;

    MatchdayRepo::delete(&state.pool, id).await?;
    tracing::info!(matchday_id = id, season_id = matchday.season_id, "Matchday deleted");
    Ok(StatusCode::NO_CONTENT)
}
