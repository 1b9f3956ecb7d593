//! Handlers for recorded head-to-head matches.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use league_core::error::CoreError;
use league_core::match_result::validate_pairing;
use league_core::types::DbId;
use league_db::models::league_match::{CreateLeagueMatch, LeagueMatch};
use league_db::repositories::{LeagueMatchRepo, PlayerRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::matchday::find_matchday;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/matchdays/{id}/matches
pub async fn list_by_matchday(
    State(state): State<AppState>,
    Path(matchday_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<LeagueMatch>>>> {
    find_matchday(&state.pool, matchday_id).await?;
    let matches = LeagueMatchRepo::list_by_matchday(&state.pool, matchday_id).await?;
    Ok(Json(DataResponse { data: matches }))
}

/// POST /api/v1/matchdays/{id}/matches
///
/// Both players must belong to the matchday's season.
pub async fn create(
    State(state): State<AppState>,
    Path(matchday_id): Path<DbId>,
    Json(input): Json<CreateLeagueMatch>,
) -> AppResult<impl IntoResponse> {
    validate_pairing(input.player_a_id, input.player_b_id)?;
    let matchday = find_matchday(&state.pool, matchday_id).await?;

    for player_id in [input.player_a_id, input.player_b_id] {
        let in_season = PlayerRepo::find_by_id(&state.pool, player_id)
            .await?
            .is_some_and(|p| p.season_id == matchday.season_id);
        if !in_season {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Player {player_id} is not part of season {}",
                matchday.season_id
            ))));
        }
    }

    let recorded = LeagueMatchRepo::create(&state.pool, matchday_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: recorded })))
}

/// GET /api/v1/matches/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<LeagueMatch>>> {
    let recorded = LeagueMatchRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Match",
            id,
        }))?;
    Ok(Json(DataResponse { data: recorded }))
}

/// DELETE /api/v1/matches/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if LeagueMatchRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Match",
            id,
        }))
    }
}
