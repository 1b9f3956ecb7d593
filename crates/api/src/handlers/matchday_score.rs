//! Handlers for manual matchday score entry.
//!
//! Only `wins`, `draws` and `losses` are accepted from clients. Every
//! mutation is refused while the matchday is closed; the recompute engine
//! itself never checks the flag.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use league_core::error::CoreError;
use league_core::scoring::{validate_score_line, ScoreLine};
use league_core::types::DbId;
use league_db::models::matchday::Matchday;
use league_db::models::matchday_score::{
    CreateMatchdayScore, MatchdayScore, UpdateMatchdayScore,
};
use league_db::repositories::{MatchdayScoreRepo, PlayerRepo};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::handlers::matchday::{ensure_open, find_matchday};
use crate::response::DataResponse;
use crate::state::AppState;

async fn find_score(pool: &PgPool, id: DbId) -> AppResult<MatchdayScore> {
    MatchdayScoreRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MatchdayScore",
            id,
        }))
}

/// The player must exist and play in the matchday's season.
async fn ensure_player_in_season(
    pool: &PgPool,
    player_id: DbId,
    matchday: &Matchday,
) -> AppResult<()> {
    let player = PlayerRepo::find_by_id(pool, player_id).await?.ok_or_else(|| {
        AppError::Core(CoreError::Validation(format!(
            "Player {player_id} does not exist"
        )))
    })?;

    if player.season_id != matchday.season_id {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Player {player_id} does not belong to season {}",
            matchday.season_id
        ))));
    }
    Ok(())
}

/// POST /api/v1/matchdays/{id}/scores
///
/// Returns 409 if the player already has a score on this matchday.
pub async fn create(
    State(state): State<AppState>,
    Path(matchday_id): Path<DbId>,
    Json(input): Json<CreateMatchdayScore>,
) -> AppResult<impl IntoResponse> {
    let matchday = find_matchday(&state.pool, matchday_id).await?;
    ensure_open(&matchday)?;
    validate_score_line(&input.score_line())?;
    ensure_player_in_season(&state.pool, input.player_id, &matchday).await?;

    let score = MatchdayScoreRepo::create(&state.pool, matchday_id, &input).await?;
    tracing::info!(
        score_id = score.id,
        matchday_id,
        player_id = score.player_id,
        "Matchday score entered"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: score })))
}

/// PUT /api/v1/scores/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMatchdayScore>,
) -> AppResult<Json<DataResponse<MatchdayScore>>> {
    let existing = find_score(&state.pool, id).await?;
    let matchday = find_matchday(&state.pool, existing.matchday_id).await?;
    ensure_open(&matchday)?;

    validate_score_line(&ScoreLine::new(
        input.wins.unwrap_or(existing.wins),
        input.draws.unwrap_or(existing.draws),
        input.losses.unwrap_or(existing.losses),
    ))?;

    let score = MatchdayScoreRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MatchdayScore",
            id,
        }))?;
    tracing::info!(score_id = id, matchday_id = score.matchday_id, "Matchday score corrected");

    Ok(Json(DataResponse { data: score }))
}

/// DELETE /api/v1/scores/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let existing = find_score(&state.pool, id).await?;
    let matchday = find_matchday(&state.pool, existing.matchday_id).await?;
    ensure_open(&matchday)?;

    MatchdayScoreRepo::delete(&state.pool, id).await?;
    tracing::info!(score_id = id, matchday_id = matchday.id, "Matchday score deleted");
    Ok(StatusCode::NO_CONTENT)
}
